//! One parser per shortcut format. Each consumes a byte stream and yields the URL it contains.
//!
//! Parsers only read from the stream they are handed; they never close it.

pub mod desktop;
pub mod webloc;
pub mod windows;

use std::io::BufRead;

use crate::error::{Result, ShortcutError};
use crate::grammar::peek_first_char;

/// Cheap check that the stream could be an INI-style shortcut before doing any real work.
///
/// The first character must be whitespace, `[`, or the format's comment marker.
fn sniff_first_char<R: BufRead>(reader: &mut R, comment_marker: char) -> Result<()> {
    let first = peek_first_char(reader)?;
    match first {
        Some(c) if c == comment_marker || c == '[' || c.is_whitespace() => Ok(()),
        Some(c) => Err(ShortcutError::InvalidFormat(format!(
            "unexpected first character {c:?}"
        ))),
        None => Err(ShortcutError::InvalidFormat("stream is empty".to_string())),
    }
}
