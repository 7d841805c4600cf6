use log::{debug, trace};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

use crate::error::{Result, ShortcutError};
use crate::grammar::{self, Lines};
use crate::utf7;

/// `[InternetShortcut]`, holding an ANSI URL.
static INTERNET_SHORTCUT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[InternetShortcut\]\s*$").expect("internet shortcut header pattern is valid")
});

/// `[InternetShortcut.W]`, holding a UTF-7 URL.
static INTERNET_SHORTCUT_W_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[InternetShortcut\.W\]\s*$")
        .expect("internet shortcut .W header pattern is valid")
});

const COMMENT_MARKER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    InternetShortcut,
    InternetShortcutW,
    Other,
}

/// Read the URL of a Windows internet shortcut (`.url`, also used for `.website`).
///
/// The whole stream is scanned: a UTF-7 URL from an `[InternetShortcut.W]` section takes
/// precedence over the ASCII one from `[InternetShortcut]` wherever the two appear.
pub fn parse<R: BufRead>(mut reader: R) -> Result<String> {
    super::sniff_first_char(&mut reader, COMMENT_MARKER)?;

    let mut lines = Lines::new(reader);
    let mut section = Section::None;
    let mut ascii_url = None;
    let mut unicode_url = None;

    while let Some(raw) = lines.next_line()? {
        let line = decode_ansi_line(raw);

        if let Some(next) = section_for_header(&line) {
            trace!("entered section {next:?}");
            section = next;
            continue;
        }
        if grammar::is_blank_or_comment(&line, COMMENT_MARKER) {
            continue;
        }
        let Some(kv) = grammar::key_value(&line) else {
            continue;
        };
        if kv.key != Some("URL") || kv.value.is_empty() {
            continue;
        }

        match section {
            Section::InternetShortcut => ascii_url = Some(kv.value.to_string()),
            Section::InternetShortcutW => {
                unicode_url = Some(utf7::decode(kv.value.as_bytes())?);
            }
            Section::None | Section::Other => {}
        }
    }

    unicode_url.or(ascii_url).ok_or(ShortcutError::MissingUrl)
}

fn section_for_header(line: &str) -> Option<Section> {
    if INTERNET_SHORTCUT_HEADER.is_match(line) {
        Some(Section::InternetShortcut)
    } else if INTERNET_SHORTCUT_W_HEADER.is_match(line) {
        Some(Section::InternetShortcutW)
    } else if grammar::is_header(line) {
        Some(Section::Other)
    } else {
        None
    }
}

/// Internet shortcuts are written in the system ANSI code page. Lines that are not valid UTF-8
/// are read as Latin-1 so that no byte is lost.
fn decode_ansi_line(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(line) => line,
        Err(err) => {
            debug!("line is not valid UTF-8, reading it as Latin-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
