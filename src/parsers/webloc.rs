use log::debug;
use plist::Value;
use std::io::{Cursor, Read};

use crate::error::{Result, ShortcutError};

/// Read the URL of an Apple `.webloc` shortcut, in either binary or XML property list form.
///
/// The property list decoder needs random access, so the remainder of the stream is buffered in
/// memory first. The caller's stream is left open.
pub fn parse<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let root = Value::from_reader(Cursor::new(bytes)).map_err(|err| {
        debug!("property list decoding failed: {err}");
        ShortcutError::InvalidFormat(format!("not a property list: {err}"))
    })?;

    let dict = root.as_dictionary().ok_or_else(|| {
        ShortcutError::InvalidFormat("property list root is not a dictionary".to_string())
    })?;

    match dict.get("URL").and_then(Value::as_string) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(ShortcutError::MissingUrl),
    }
}
