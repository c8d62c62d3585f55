//! Diary entry constants and validation functions.

use crate::error::ValidationError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Diary";

/// Maximum length of an entry title in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of an author name in characters.
pub const MAX_AUTHOR_LENGTH: usize = 50;

/// Wire format for entry dates (`YYYY-MM-DD HH:MM:SS`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render a timestamp in [`DATE_FORMAT`].
pub fn format_date(date: &Timestamp) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Check one text field for presence and, optionally, a maximum length.
///
/// A value made only of whitespace counts as missing. Length is measured in
/// characters, not bytes.
pub fn validate_text_field(
    value: Option<&str>,
    max_length: Option<usize>,
) -> Result<(), String> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err("is required".to_string()),
    };
    if let Some(max) = max_length {
        let len = value.chars().count();
        if len > max {
            return Err(format!("must be at most {max} characters (got {len})"));
        }
    }
    Ok(())
}

/// Validate the three editable fields of an entry, collecting every problem.
pub fn validate_entry(
    title: Option<&str>,
    author: Option<&str>,
    content: Option<&str>,
) -> Result<(), ValidationError> {
    let mut errors = ValidationError::default();
    if let Err(msg) = validate_text_field(title, Some(MAX_TITLE_LENGTH)) {
        errors.push("title", msg);
    }
    if let Err(msg) = validate_text_field(author, Some(MAX_AUTHOR_LENGTH)) {
        errors.push("author", msg);
    }
    if let Err(msg) = validate_text_field(content, None) {
        errors.push("content", msg);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn format_date_uses_space_separated_seconds_precision() {
        let date = chrono::Utc
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .unwrap();
        assert_eq!(format_date(&date), "2024-03-09 07:05:01");
    }

    #[test]
    fn missing_value_is_required() {
        assert_eq!(validate_text_field(None, None), Err("is required".into()));
    }

    #[test]
    fn blank_value_is_required() {
        assert_eq!(
            validate_text_field(Some("  \n\t"), Some(10)),
            Err("is required".into())
        );
    }

    #[test]
    fn length_limit_counts_characters() {
        // Five characters, fifteen bytes.
        assert_matches!(validate_text_field(Some("日記日記日"), Some(5)), Ok(()));
        assert_matches!(validate_text_field(Some("日記日記日記"), Some(5)), Err(_));
    }

    #[test]
    fn unbounded_field_accepts_long_text() {
        let long = "x".repeat(100_000);
        assert_matches!(validate_text_field(Some(&long), None), Ok(()));
    }

    #[test]
    fn valid_entry_passes() {
        assert_matches!(validate_entry(Some("A"), Some("B"), Some("C")), Ok(()));
    }

    #[test]
    fn entry_collects_every_failing_field() {
        let long_title = "t".repeat(MAX_TITLE_LENGTH + 1);
        let err = validate_entry(Some(&long_title), None, Some("")).unwrap_err();

        let fields: Vec<&str> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, ["title", "author", "content"]);
        assert_eq!(err.message_for("author"), Some("is required"));
        assert!(err
            .message_for("title")
            .unwrap()
            .starts_with("must be at most 100 characters"));
    }

    #[test]
    fn author_limit_is_fifty() {
        let ok = "a".repeat(MAX_AUTHOR_LENGTH);
        let too_long = "a".repeat(MAX_AUTHOR_LENGTH + 1);
        assert_matches!(validate_entry(Some("T"), Some(&ok), Some("C")), Ok(()));
        assert_matches!(
            validate_entry(Some("T"), Some(&too_long), Some("C")),
            Err(e) if e.message_for("author").is_some()
        );
    }

    #[test]
    fn validation_error_display_lists_fields() {
        let err = validate_entry(None, Some("B"), None).unwrap_err();
        assert_eq!(err.to_string(), "title is required; content is required");
    }
}
