use log::{debug, trace};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

use crate::error::{EncodingError, Result, ShortcutError};
use crate::grammar::{self, Lines};

/// `[Desktop Entry]`, or the historical `[KDE Desktop Entry]` alias.
static DESKTOP_ENTRY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[(KDE )?Desktop Entry\]\s*$").expect("desktop entry header pattern is valid")
});

const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingHeader,
    InEntry,
}

/// Read the URL of a FreeDesktop link (`.desktop`) shortcut.
///
/// Desktop entry files are always UTF-8. The first `URL` key inside the `[Desktop Entry]` group
/// wins; scanning stops at the end of that group.
pub fn parse<R: BufRead>(mut reader: R) -> Result<String> {
    super::sniff_first_char(&mut reader, COMMENT_MARKER)?;

    let mut lines = Lines::new(reader);
    let mut state = State::SeekingHeader;

    while let Some(raw) = lines.next_line()? {
        let line = std::str::from_utf8(&raw).map_err(EncodingError::from)?;

        match state {
            State::SeekingHeader => {
                if DESKTOP_ENTRY_HEADER.is_match(line) {
                    trace!("found desktop entry header");
                    state = State::InEntry;
                } else if !grammar::is_blank_or_comment(line, COMMENT_MARKER) {
                    debug!("non-comment line before desktop entry header");
                    break;
                }
            }
            State::InEntry => {
                if grammar::is_header(line) {
                    trace!("desktop entry group ended at {line:?}");
                    break;
                }
                if grammar::is_blank_or_comment(line, COMMENT_MARKER) {
                    continue;
                }
                let Some(kv) = grammar::key_value(line) else {
                    continue;
                };
                if kv.key == Some("URL") {
                    if kv.value.is_empty() {
                        return Err(ShortcutError::MissingUrl);
                    }
                    return Ok(kv.value.to_string());
                }
            }
        }
    }

    match state {
        State::SeekingHeader => Err(ShortcutError::MissingEntry("Desktop Entry")),
        State::InEntry => Err(ShortcutError::MissingUrl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingReader;
    use std::io::{BufReader, Cursor};

    fn parse_str(input: &str) -> Result<String> {
        parse(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_simple_entry() {
        let url = parse_str("[Desktop Entry]\nURL=http://example.com\n").unwrap();
        assert_eq!(url, "http://example.com");
    }

    #[test]
    fn test_full_link_entry_with_comments() {
        let input = "# written by hand\n\n\
                     [Desktop Entry]\n\
                     Encoding=UTF-8\n\
                     # URL=http://commented.out\n\
                     Name=Example\n\
                     Name[de]=Beispiel\n\
                     Type=Link\n\
                     URL = http://example.com/a?b=c \n\
                     Icon=text-html\n";
        assert_eq!(parse_str(input).unwrap(), "http://example.com/a?b=c");
    }

    #[test]
    fn test_kde_alias_and_crlf() {
        let input = "[KDE Desktop Entry]\r\nURL=http://kde.org\r\n";
        assert_eq!(parse_str(input).unwrap(), "http://kde.org");
    }

    #[test]
    fn test_first_url_wins() {
        let input = "[Desktop Entry]\nURL=http://first.com\nURL=http://second.com\n";
        assert_eq!(parse_str(input).unwrap(), "http://first.com");
    }

    #[test]
    fn test_unicode_url() {
        let input = "[Desktop Entry]\nURL=http://导航.中国/\n";
        assert_eq!(parse_str(input).unwrap(), "http://导航.中国/");
    }

    #[test]
    fn test_missing_url() {
        let err = parse_str("[Desktop Entry]\nName=Nothing here\n").unwrap_err();
        assert!(matches!(err, ShortcutError::MissingUrl));

        let err = parse_str("[Desktop Entry]\nURL=\n").unwrap_err();
        assert!(matches!(err, ShortcutError::MissingUrl));
    }

    #[test]
    fn test_url_outside_entry_group_is_ignored() {
        let input = "[Desktop Entry]\nName=x\n[Desktop Action open]\nURL=http://action.com\n";
        let err = parse_str(input).unwrap_err();
        assert!(matches!(err, ShortcutError::MissingUrl));
    }

    #[test]
    fn test_missing_entry_when_other_content_comes_first() {
        let input = "[Other Group]\nURL=http://example.com\n[Desktop Entry]\nURL=http://x.com\n";
        let err = parse_str(input).unwrap_err();
        assert!(matches!(err, ShortcutError::MissingEntry(_)));

        let err = parse_str("# only a comment\n").unwrap_err();
        assert!(matches!(err, ShortcutError::MissingEntry(_)));
    }

    #[test]
    fn test_fails_fast_on_unexpected_first_character() {
        let err = parse_str("URL=http://example.com\n").unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidFormat(_)));

        let err = parse_str("").unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidFormat(_)));
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let err = parse(Cursor::new(&b"[Desktop Entry]\nURL=http://\xff.com\n"[..])).unwrap_err();
        assert!(matches!(
            err,
            ShortcutError::Encoding(EncodingError::Utf8(_))
        ));
    }

    #[test]
    fn test_stops_reading_after_url() {
        let mut cursor = Cursor::new(&b"[Desktop Entry]\nURL=http://a.com\nName=rest\n"[..]);
        parse(&mut cursor).unwrap();
        assert!((cursor.position() as usize) < cursor.get_ref().len());
    }

    #[test]
    fn test_read_failure_is_an_io_error() {
        let reader = BufReader::new(FailingReader::new(b"[Desktop Entry]\n"));
        let err = parse(reader).unwrap_err();
        assert!(matches!(err, ShortcutError::Io(_)));
    }

    #[test]
    fn test_leading_ideographic_space() {
        let url = parse_str("\u{3000}[Desktop Entry]\nURL=http://example.com\n").unwrap();
        assert_eq!(url, "http://example.com");
    }
}
