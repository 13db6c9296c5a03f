//! Field rules. Values are trimmed before every check.
//!
//! Whitespace follows the browser's definition (`String.prototype.trim`, regex `\s`),
//! and message length is measured in UTF-16 code units like `String.length`.

use std::fmt;
use strum_macros::{Display, IntoStaticStr};

/// How a form control is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// Any other `<input>`: must not be blank.
    Text,
    /// `<input type="email">`.
    Email,
    /// `<textarea>`: must reach the minimum length.
    Message,
}

impl FieldKind {
    /// Classifies a control by tag name and `type` attribute. The email rule wins
    /// over the textarea rule.
    #[must_use]
    pub fn classify(tag_name: &str, input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else if tag_name.eq_ignore_ascii_case("textarea") {
            Self::Message
        } else {
            Self::Text
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Empty,
    MalformedEmail,
    TooShort { min: usize },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("required"),
            Self::MalformedEmail => f.write_str("not an email address"),
            Self::TooShort { min } => write!(f, "shorter than {min} characters"),
        }
    }
}

/// Checks one field value.
///
/// # Errors
/// Returns the [`FieldIssue`] that rejected the value.
pub fn validate(kind: FieldKind, raw: &str, message_min_chars: usize) -> Result<(), FieldIssue> {
    let value = raw.trim_matches(is_page_whitespace);
    if value.is_empty() {
        return Err(FieldIssue::Empty);
    }
    match kind {
        FieldKind::Email if !is_email(value) => Err(FieldIssue::MalformedEmail),
        FieldKind::Message if value.encode_utf16().count() < message_min_chars => {
            Err(FieldIssue::TooShort { min: message_min_chars })
        },
        _ => Ok(()),
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot inside the domain
/// with at least one character on each side.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(is_page_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Unicode `White_Space` without NEL, plus the byte order mark.
fn is_page_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.c", "jane.doe@mail.example.org", "x@y..z", "a@.b.c"] {
            assert!(is_email(ok), "{ok}");
        }
        for bad in ["a@b", "@b.c", "a@b.", "a@.b", "a@@b.c", "a b@c.d", "a@b@c.d", "plain"] {
            assert!(!is_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_browser_whitespace_rules() {
        assert_eq!(validate(FieldKind::Text, "\u{feff} \u{feff}", 10), Err(FieldIssue::Empty));
        assert!(!is_email("jane\u{feff}@mail.com"));
        assert!(is_email("jane\u{85}@mail.com"));
        assert_eq!(validate(FieldKind::Text, "\u{85}", 10), Ok(()));
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        assert_eq!(validate(FieldKind::Message, "\u{1f600}".repeat(5).as_str(), 10), Ok(()));
        assert_eq!(
            validate(FieldKind::Message, "\u{e9}".repeat(9).as_str(), 10),
            Err(FieldIssue::TooShort { min: 10 })
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(FieldKind::classify("INPUT", "email"), FieldKind::Email);
        assert_eq!(FieldKind::classify("TEXTAREA", ""), FieldKind::Message);
        assert_eq!(FieldKind::classify("INPUT", "text"), FieldKind::Text);
        assert_eq!(FieldKind::classify("INPUT", ""), FieldKind::Text);
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(FieldIssue::Empty.to_string(), "required");
        assert_eq!(FieldIssue::TooShort { min: 10 }.to_string(), "shorter than 10 characters");
    }
}
