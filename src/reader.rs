use serde::Serialize;
use std::path::Path;

use crate::error::{Result, ShortcutError};
use crate::format::ShortcutFormat;

/// The name and URL of a shortcut.
///
/// The name is always derived from the file name. Names embedded in shortcut files are not kept
/// in sync when the file is renamed, and `.desktop` files may carry several localized ones, so
/// they are not a reliable source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutContents {
    name: String,
    url: String,
}

impl ShortcutContents {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL exactly as stored in the file, not normalized or percent-decoded.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

/// The file name with its extension removed. A leading dot does not start an extension.
pub fn shortcut_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name[..dot].to_string(),
        _ => file_name,
    }
}

/// True if the file extension indicates a shortcut this crate can read.
pub fn has_valid_extension(path: &Path) -> bool {
    ShortcutFormat::from_path(path).is_some()
}

/// Read a shortcut file, choosing the format from its extension.
pub fn read(path: &Path) -> Result<ShortcutContents> {
    let format = ShortcutFormat::from_path(path)
        .ok_or_else(|| ShortcutError::UnsupportedExtension(path.to_path_buf()))?;
    format.read_file(path)
}

/// Like [`read`], returning only the URL.
pub fn read_url(path: &Path) -> Result<String> {
    read(path).map(ShortcutContents::into_url)
}
