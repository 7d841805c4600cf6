//! Building portable file names for new shortcuts.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, ShortcutError};

/// Default maximum length of a generated file name, extension included.
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 100;

/// Characters outside the allow-list. Every non-ASCII character is allowed; most modern file
/// systems accept them.
static INVALID_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^ !#$&'()+,\-.0-9;=@A-Z\[\]_`a-z{}~\x{80}-\x{10FFFF}]")
        .expect("invalid filename character pattern is valid")
});

/// Base name (no extension) for a shortcut called `name`.
///
/// Characters that some file systems reject (such as `?`, `:` and `/`) are removed, an empty
/// result becomes `_`, and the name is truncated so that `base + "." + extension` fits in
/// `max_length` characters.
pub fn create_base_filename(name: &str, extension: &str, max_length: usize) -> Result<String> {
    let ext_len = extension.chars().count();
    let minimum = ext_len + 2;
    if max_length < minimum {
        return Err(ShortcutError::FilenameLength {
            requested: max_length,
            minimum,
        });
    }

    let cleaned = INVALID_CHARS.replace_all(name, "");
    let cleaned: &str = if cleaned.is_empty() { "_" } else { &cleaned };

    let limit = max_length - ext_len - 1;
    Ok(cleaned.chars().take(limit).collect())
}

/// Full file name, `base.extension`, for a shortcut called `name`.
pub fn create_full_filename(name: &str, extension: &str, max_length: usize) -> Result<String> {
    let base = create_base_filename(name, extension, max_length)?;
    Ok(format!("{base}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_characters() {
        let max = DEFAULT_MAX_FILENAME_LENGTH;
        let name = create_full_filename("My Shortcut!", "url", max).unwrap();
        assert_eq!(name, "My Shortcut!.url");

        let name = create_full_filename("a(b)[c]{d}~e`f;g=h@i", "url", max).unwrap();
        assert_eq!(name, "a(b)[c]{d}~e`f;g=h@i.url");
    }

    #[test]
    fn test_strips_invalid_characters() {
        let name =
            create_full_filename("What? A: \"quote\" <tag>|*/\\", "desktop", 100).unwrap();
        assert_eq!(name, "What A quote tag.desktop");

        let name = create_full_filename("tab\there\nnewline", "url", 100).unwrap();
        assert_eq!(name, "tabherenewline.url");
    }

    #[test]
    fn test_keeps_non_ascii() {
        let name = create_full_filename("导航 Café 😀", "webloc", 100).unwrap();
        assert_eq!(name, "导航 Café 😀.webloc");
    }

    #[test]
    fn test_all_invalid_becomes_underscore() {
        assert_eq!(create_full_filename("?*:", "url", 100).unwrap(), "_.url");
        assert_eq!(
            create_full_filename("", "desktop", 100).unwrap(),
            "_.desktop"
        );
    }

    #[test]
    fn test_truncates_to_max_length() {
        let long = "x".repeat(200);
        let full = create_full_filename(&long, "url", 100).unwrap();
        assert_eq!(full.chars().count(), 100);
        assert!(full.ends_with("x.url"));

        let base = create_base_filename(&long, "url", 10).unwrap();
        assert_eq!(base, "xxxxxx");

        // counts characters, not bytes
        let wide = "导".repeat(20);
        let full = create_full_filename(&wide, "url", 10).unwrap();
        assert_eq!(full, "导导导导导导.url");
    }

    #[test]
    fn test_rejects_max_length_below_minimum() {
        assert_eq!(create_full_filename("a", "url", 5).unwrap(), "a.url");

        let err = create_full_filename("a", "url", 4).unwrap_err();
        assert!(matches!(
            err,
            ShortcutError::FilenameLength {
                requested: 4,
                minimum: 5
            }
        ));
    }
}
