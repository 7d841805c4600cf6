//! Line grammar shared by the INI-style shortcut formats (`.desktop`, `.url`, `.website`).
//!
//! The patterns are deliberately relaxed about whitespace, since these files are written by
//! many different tools. Every pattern is anchored to the whole line.

use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;

/// A section header, e.g. `[MyHeader]`.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[.*\]\s*$").expect("header pattern is valid"));

/// A key/value pair, e.g. `MyKey=MyValue` or `Name[de]=Wert`.
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9-]*)(\[([^\[\]]*)\])?\s*=\s*(.*?)\s*$")
        .expect("key/value pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    /// `None` when the key is empty, which is syntactically valid but never usable.
    pub key: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub value: &'a str,
}

pub fn is_header(line: &str) -> bool {
    HEADER.is_match(line)
}

pub fn key_value(line: &str) -> Option<KeyValue<'_>> {
    let captures = KEY_VALUE.captures(line)?;
    let key = captures
        .get(1)
        .map(|m| m.as_str())
        .filter(|key| !key.is_empty());
    let locale = captures.get(3).map(|m| m.as_str());
    let value = captures.get(4).map_or("", |m| m.as_str());
    Some(KeyValue { key, locale, value })
}

/// A line holding only whitespace, or a comment introduced by `marker`.
pub fn is_blank_or_comment(line: &str, marker: char) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(marker)
}

/// Splits a byte stream into lines terminated by CR, LF or CRLF.
///
/// Lines are yielded as raw bytes without their terminator; decoding is left to the format.
/// Memory use is bounded by the longest line, not by the stream length.
pub struct Lines<R> {
    reader: R,
    skip_lf: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    pub fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut saw_any = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(saw_any.then_some(line));
            }

            // A CR at the end of the previous line may be followed by the LF of a CRLF pair.
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            saw_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    line.extend_from_slice(&available[..pos]);
                    self.skip_lf = available[pos] == b'\r';
                    self.reader.consume(pos + 1);
                    return Ok(Some(line));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

/// Peek at the first character of a stream without consuming it.
///
/// Returns `None` for an empty stream. Non-ASCII leading characters are decoded as UTF-8 when the
/// peeked bytes allow it.
pub fn peek_first_char<R: BufRead>(reader: &mut R) -> io::Result<Option<char>> {
    let available = reader.fill_buf()?;
    let Some(&first) = available.first() else {
        return Ok(None);
    };
    if first.is_ascii() {
        return Ok(Some(char::from(first)));
    }
    let prefix = &available[..available.len().min(4)];
    let decoded = match std::str::from_utf8(prefix) {
        Ok(s) => s.chars().next(),
        Err(err) => std::str::from_utf8(&prefix[..err.valid_up_to()])
            .ok()
            .and_then(|s| s.chars().next()),
    };
    Ok(Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER)))
}
