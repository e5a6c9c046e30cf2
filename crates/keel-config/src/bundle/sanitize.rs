//! Filename sanitization for generated chunks and assets.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{DISALLOWED_FILE_NAME_CHARS, FILE_NAME_REPLACEMENT};
use crate::error::{ConfigError, Result};

static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DISALLOWED_FILE_NAME_CHARS).expect("file name character class is valid")
});

/// Replace every character outside `[A-Za-z0-9\-_~.]` with `_`.
///
/// Each disallowed Unicode scalar value becomes exactly one `_`.
///
/// # Example
///
/// ```
/// use keel_config::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("my file/ünï.js"), "my_file__n_.js");
/// assert_eq!(sanitize_file_name("already-ok_~.js"), "already-ok_~.js");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    sanitize(name).into_owned()
}

/// Borrowing variant of [`sanitize_file_name`]; allocates only when a
/// replacement happens.
pub fn sanitize(name: &str) -> Cow<'_, str> {
    DISALLOWED.replace_all(name, FILE_NAME_REPLACEMENT)
}

/// Serializable description of the sanitizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNameSanitizer {
    /// Character class of characters to replace
    pub disallowed: String,
    pub replacement: String,
}

impl FileNameSanitizer {
    pub fn regex(&self) -> Result<Regex> {
        Regex::new(&self.disallowed).map_err(|e| ConfigError::InvalidValue {
            field: "sanitizeFileName.disallowed".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Sanitize `name` with this sanitizer's character class and replacement.
    pub fn apply(&self, name: &str) -> Result<String> {
        let regex = self.regex()?;
        Ok(regex
            .replace_all(name, NoExpand(self.replacement.as_str()))
            .into_owned())
    }
}

impl Default for FileNameSanitizer {
    fn default() -> Self {
        Self {
            disallowed: DISALLOWED_FILE_NAME_CHARS.to_string(),
            replacement: FILE_NAME_REPLACEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_slashes_and_unicode() {
        assert_eq!(
            sanitize_file_name("src/pages/Über uns (draft) 🚀.tsx"),
            "src_pages__ber_uns__draft___.tsx"
        );
    }

    #[test]
    fn keeps_allowed_characters() {
        let allowed = "ABCxyz0189-_~.";
        assert_eq!(sanitize_file_name(allowed), allowed);
        assert!(matches!(sanitize(allowed), Cow::Borrowed(_)));
    }

    #[test]
    fn backslashes_and_colons_are_replaced() {
        assert_eq!(sanitize_file_name(r"C:\chunks\app.js"), "C__chunks_app.js");
    }

    #[test]
    fn one_underscore_per_character() {
        assert_eq!(sanitize_file_name("日本語"), "___");
        assert_eq!(sanitize_file_name(""), "");
    }

    #[test]
    fn sanitizer_apply_matches_free_function() {
        let sanitizer = FileNameSanitizer::default();
        for name in ["a b", "x/y\\z.js", "ünicode.css", "fine.js"] {
            assert_eq!(sanitizer.apply(name).unwrap(), sanitize_file_name(name), "{name}");
        }
    }

    #[test]
    fn replacement_is_literal() {
        let sanitizer = FileNameSanitizer {
            disallowed: "[ ]".to_string(),
            replacement: "$0".to_string(),
        };
        assert_eq!(sanitizer.apply("a b").unwrap(), "a$0b");
    }

    #[test]
    fn invalid_class_is_an_error() {
        let sanitizer = FileNameSanitizer {
            disallowed: "[".to_string(),
            replacement: "_".to_string(),
        };
        assert!(sanitizer.apply("x").is_err());
    }
}
