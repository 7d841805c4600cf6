//! Read and write web shortcut files.
//!
//! Supported formats:
//! - Windows internet shortcuts (`.url`) and pinned sites (`.website`, read only).
//! - FreeDesktop link entries (`.desktop`).
//! - Apple web locations (`.webloc`), as binary or XML property lists.
//!
//! When the file name is known, [`read`] picks the format from its extension. For a bare stream,
//! [`read_url_trial_and_error`] tries each format in turn.
//!
//! ```no_run
//! use std::path::Path;
//! use webshortcut::{read, ShortcutWriter};
//!
//! let contents = read(Path::new("Example.url"))?;
//! println!("{} -> {}", contents.name(), contents.url());
//!
//! let file_name = ShortcutWriter::Desktop.default_filename("Example")?;
//! ShortcutWriter::Desktop.write_file(Path::new(&file_name), "Example", contents.url())?;
//! # Ok::<(), webshortcut::ShortcutError>(())
//! ```
//!
//! Stream-based functions never close the stream they are given. Every call is self-contained;
//! nothing is cached between calls.

pub mod config;
pub mod error;
pub mod filename;
pub mod format;
pub mod grammar;
pub mod parsers;
pub mod reader;
pub mod trial;
pub mod utf7;
pub mod writers;

#[cfg(test)]
mod test_support;

pub use error::{EncodingError, Result, ShortcutError};
pub use filename::DEFAULT_MAX_FILENAME_LENGTH;
pub use format::ShortcutFormat;
pub use reader::{has_valid_extension, read, read_url, ShortcutContents};
pub use trial::{
    read_url_trial_and_error, read_url_trial_and_error_with_capacity, DEFAULT_TRIAL_BUFFER_SIZE,
};
pub use utf7::Utf7Error;
pub use writers::ShortcutWriter;
