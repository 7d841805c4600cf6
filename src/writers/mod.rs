//! Writers for the shortcut formats that can be authored.
//!
//! There is no writer for `.website` shortcuts: that format carries a lot of browser-specific
//! metadata, and a `.url` shortcut is the portable Windows choice.

pub mod desktop;
pub mod webloc;
pub mod windows;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ShortcutError};
use crate::filename::{self, DEFAULT_MAX_FILENAME_LENGTH};
use crate::format::ShortcutFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutWriter {
    Url,
    Desktop,
    WeblocBinary,
    WeblocXml,
}

impl ShortcutWriter {
    pub const ALL: [ShortcutWriter; 4] = [
        ShortcutWriter::Url,
        ShortcutWriter::Desktop,
        ShortcutWriter::WeblocBinary,
        ShortcutWriter::WeblocXml,
    ];

    /// The format a reader sees when it opens the written file.
    pub fn format(self) -> ShortcutFormat {
        match self {
            ShortcutWriter::Url => ShortcutFormat::Url,
            ShortcutWriter::Desktop => ShortcutFormat::Desktop,
            ShortcutWriter::WeblocBinary | ShortcutWriter::WeblocXml => ShortcutFormat::Webloc,
        }
    }

    /// Extension without the leading dot, e.g. `url`.
    pub fn default_extension(self) -> &'static str {
        self.format().extension()
    }

    /// Write a shortcut to `sink`. Some formats have nowhere to store `name` and ignore it.
    ///
    /// The sink is flushed but not closed.
    pub fn write<W: Write>(self, sink: &mut W, name: &str, url: &str) -> Result<()> {
        match self {
            ShortcutWriter::Url => windows::write(sink, url)?,
            ShortcutWriter::Desktop => desktop::write(sink, name, url)?,
            ShortcutWriter::WeblocBinary => webloc::write_binary(sink, url)?,
            ShortcutWriter::WeblocXml => webloc::write_xml(sink, url)?,
        }
        sink.flush()?;
        Ok(())
    }

    /// Write a shortcut to a new file. An existing file is never overwritten.
    ///
    /// If writing fails part way, the incomplete file is removed.
    pub fn write_file(self, path: &Path, name: &str, url: &str) -> Result<()> {
        debug!("writing {self} shortcut to {}", path.display());
        write_new_file(path, |sink| self.write(sink, name, url))
    }

    /// See [`filename::create_base_filename`].
    pub fn create_base_filename(self, name: &str, max_length: usize) -> Result<String> {
        filename::create_base_filename(name, self.default_extension(), max_length)
    }

    /// See [`filename::create_full_filename`].
    pub fn create_full_filename(self, name: &str, max_length: usize) -> Result<String> {
        filename::create_full_filename(name, self.default_extension(), max_length)
    }

    /// [`create_full_filename`](Self::create_full_filename) with the default maximum length.
    pub fn default_filename(self, name: &str) -> Result<String> {
        self.create_full_filename(name, DEFAULT_MAX_FILENAME_LENGTH)
    }
}

/// Create `path`, which must not exist yet, and fill it with `fill`.
fn write_new_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => ShortcutError::AlreadyExists(path.to_path_buf()),
            _ => ShortcutError::Io(err),
        })?;

    let mut writer = BufWriter::new(file);
    let result = fill(&mut writer).and_then(|()| {
        let file = writer.into_inner().map_err(|err| err.into_error())?;
        file.sync_all()?;
        Ok(())
    });

    if result.is_err() {
        if let Err(err) = fs::remove_file(path) {
            warn!(
                "Failed to remove incomplete shortcut {}: {err}",
                path.display()
            );
        }
    }
    result
}

impl fmt::Display for ShortcutWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShortcutWriter::Url => "url",
            ShortcutWriter::Desktop => "desktop",
            ShortcutWriter::WeblocBinary => "webloc-binary",
            ShortcutWriter::WeblocXml => "webloc-xml",
        };
        f.write_str(label)
    }
}
