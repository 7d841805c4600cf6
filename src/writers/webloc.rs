use plist::{Dictionary, Value};
use std::io::Write;

use crate::error::{Result, ShortcutError};

fn shortcut_plist(url: &str) -> Value {
    let mut root = Dictionary::new();
    root.insert("URL".to_string(), Value::String(url.to_string()));
    Value::Dictionary(root)
}

fn encode_failed(err: plist::Error) -> ShortcutError {
    match err.into_io() {
        Ok(io) => ShortcutError::Io(io),
        Err(err) => ShortcutError::InvalidFormat(format!("failed to encode property list: {err}")),
    }
}

/// Write a binary property list `.webloc`.
pub fn write_binary<W: Write>(sink: &mut W, url: &str) -> Result<()> {
    shortcut_plist(url)
        .to_writer_binary(sink)
        .map_err(encode_failed)
}

/// Write an XML property list `.webloc`.
pub fn write_xml<W: Write>(sink: &mut W, url: &str) -> Result<()> {
    shortcut_plist(url)
        .to_writer_xml(sink)
        .map_err(encode_failed)
}
