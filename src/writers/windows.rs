use std::io::{self, Write};

use crate::utf7;

const LINE_END: &str = "\r\n";

/// Write a Windows internet shortcut.
///
/// An ASCII URL gets a single `[InternetShortcut]` section. Otherwise the URL goes UTF-7 encoded
/// into `[InternetShortcut.W]`, and the `[InternetShortcut]` and `[InternetShortcut.A]` sections
/// carry an ASCII rendition with `?` in place of each non-ASCII character.
pub fn write<W: Write>(sink: &mut W, url: &str) -> io::Result<()> {
    if url.is_ascii() {
        return write_section(sink, "InternetShortcut", url);
    }

    let ascii = ascii_substitute(url);
    write_section(sink, "InternetShortcut", &ascii)?;
    write_section(sink, "InternetShortcut.A", &ascii)?;
    write_section(sink, "InternetShortcut.W", &utf7::encode(url))
}

fn write_section<W: Write>(sink: &mut W, header: &str, url: &str) -> io::Result<()> {
    write!(sink, "[{header}]{LINE_END}URL={url}{LINE_END}")
}

fn ascii_substitute(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}
