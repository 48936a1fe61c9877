//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, comments, descriptions
//! - The in-memory store has no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, criterion, department, document title, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Comments, descriptions, reasons (overall comment, review comment, etc.)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: position, department name, file type, category labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / avatar and file references
pub const MAX_URL_LEN: usize = 2048;

// ── Score and weight bounds ─────────────────────────────────────────

/// Criterion scores and composite scores live on a 0-100 scale
pub const MAX_SCORE: u8 = 100;

/// Criterion weight bounds within a category
pub const MIN_CRITERION_WEIGHT: u32 = 5;
pub const MAX_CRITERION_WEIGHT: u32 = 30;

/// Per-category cap on the sum of criterion weights
pub const CATEGORY_WEIGHT_CAP: u32 = 100;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_is_rejected() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Budi", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn overlong_optional_text_is_rejected() {
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "comment", MAX_NOTE_LEN).is_err());
        assert!(validate_optional_text(&None, "comment", MAX_NOTE_LEN).is_ok());
    }

}
