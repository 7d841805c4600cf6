use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::parsers::{desktop, webloc, windows};
use crate::reader::{shortcut_name, ShortcutContents};

/// The shortcut formats that can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutFormat {
    /// Windows internet shortcut.
    Url,
    /// Windows pinned site. Read with the `.url` grammar; there is no writer.
    Website,
    /// FreeDesktop link entry.
    Desktop,
    /// Apple web location, binary or XML property list.
    Webloc,
}

impl ShortcutFormat {
    pub const ALL: [ShortcutFormat; 4] = [
        ShortcutFormat::Url,
        ShortcutFormat::Website,
        ShortcutFormat::Desktop,
        ShortcutFormat::Webloc,
    ];

    /// Case-insensitive lookup of an extension given without its leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// The reader for a file, chosen by the text after the last `.` of its name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy();
        let (_, extension) = file_name.rsplit_once('.')?;
        if extension.is_empty() {
            return None;
        }
        Self::from_extension(extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            ShortcutFormat::Url => "url",
            ShortcutFormat::Website => "website",
            ShortcutFormat::Desktop => "desktop",
            ShortcutFormat::Webloc => "webloc",
        }
    }

    /// Extract the URL from a stream in this format. The stream is not closed.
    pub fn parse<R: BufRead>(self, reader: R) -> Result<String> {
        match self {
            ShortcutFormat::Url | ShortcutFormat::Website => windows::parse(reader),
            ShortcutFormat::Desktop => desktop::parse(reader),
            ShortcutFormat::Webloc => webloc::parse(reader),
        }
    }

    /// Read a file in this format. The name is taken from the file name, not the contents.
    pub fn read_file(self, path: &Path) -> Result<ShortcutContents> {
        debug!("reading {} as {self}", path.display());
        let file = File::open(path)?;
        let url = self.parse(BufReader::new(file))?;
        Ok(ShortcutContents::new(shortcut_name(path), url))
    }
}

impl fmt::Display for ShortcutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(
            ShortcutFormat::from_extension("url"),
            Some(ShortcutFormat::Url)
        );
        assert_eq!(
            ShortcutFormat::from_extension("URL"),
            Some(ShortcutFormat::Url)
        );
        assert_eq!(
            ShortcutFormat::from_extension("WebSite"),
            Some(ShortcutFormat::Website)
        );
        assert_eq!(
            ShortcutFormat::from_extension("Desktop"),
            Some(ShortcutFormat::Desktop)
        );
        assert_eq!(
            ShortcutFormat::from_extension("webloc"),
            Some(ShortcutFormat::Webloc)
        );
        assert_eq!(ShortcutFormat::from_extension("lnk"), None);
        assert_eq!(ShortcutFormat::from_extension(""), None);
    }

    #[test]
    fn test_path_lookup() {
        assert_eq!(
            ShortcutFormat::from_path(&PathBuf::from("/tmp/My Site.URL")),
            Some(ShortcutFormat::Url)
        );
        assert_eq!(
            ShortcutFormat::from_path(&PathBuf::from("archive.tar.desktop")),
            Some(ShortcutFormat::Desktop)
        );
        assert_eq!(
            ShortcutFormat::from_path(&PathBuf::from("noextension")),
            None
        );
        assert_eq!(
            ShortcutFormat::from_path(&PathBuf::from("trailingdot.")),
            None
        );
    }

    #[test]
    fn test_website_uses_url_grammar() {
        let input = "[InternetShortcut]\nURL=http://example.com\nIconIndex=0\n";
        let url = ShortcutFormat::Website
            .parse(Cursor::new(input.as_bytes()))
            .unwrap();
        assert_eq!(url, "http://example.com");
    }
}
