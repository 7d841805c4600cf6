use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::utf7::Utf7Error;

pub type Result<T, E = ShortcutError> = std::result::Result<T, E>;

/// Failure of a single read or write operation.
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("shortcut content is invalid: {0}")]
    InvalidFormat(String),
    #[error("{0} section not found in shortcut")]
    MissingEntry(&'static str),
    #[error("URL not found in shortcut")]
    MissingUrl,
    #[error("failed to decode shortcut text")]
    Encoding(#[from] EncodingError),
    #[error("error rewinding input stream - buffer size ({capacity} bytes) is too small")]
    BufferTooSmall { capacity: usize },
    #[error("the shortcut is not recognized as a known type")]
    UnrecognizedFormat,
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("no shortcut reader for {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("maximum file name length must be at least {minimum} (got {requested})")]
    FilenameLength { requested: usize, minimum: usize },
    #[error("I/O error")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid UTF-7")]
    Utf7(#[from] Utf7Error),
    #[error("invalid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Required to turn a [Utf7Error] into a [ShortcutError] with `?`.
impl From<Utf7Error> for ShortcutError {
    fn from(value: Utf7Error) -> Self {
        Self::from(EncodingError::from(value))
    }
}

impl ShortcutError {
    /// Errors that mean the trial loop cannot continue with the next candidate.
    pub(crate) fn is_fatal_for_trial(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. } | Self::Io(_))
    }
}
