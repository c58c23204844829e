//! Centralized validation and helper functions.

use crate::hints::scanner::DELIMITER;

/// Longest reference name a hint record may carry
pub const MAX_REFERENCE_NAME_LEN: usize = 1023;

/// Maximum number of references in one table (DOS protection)
pub const MAX_REFERENCES: usize = 10_000_000;

/// Check if adding another reference would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new reference.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_reference_limit(count: usize) -> Option<String> {
    if count >= MAX_REFERENCES {
        Some(format!(
            "Too many references: adding another would exceed maximum of {MAX_REFERENCES}"
        ))
    } else {
        None
    }
}

/// Reasons a reference name can never be named by a hint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty reference name")]
    EmptyName,
    #[error("Reference name exceeds {MAX_REFERENCE_NAME_LEN} characters")]
    NameTooLong,
    #[error("Reference name contains the hint delimiter '!'")]
    ContainsDelimiter,
}

/// Check that a reference name can be written into a hint record.
///
/// # Examples
///
/// ```
/// use read_hints::utils::validation::{validate_reference_name, ValidationError};
///
/// assert!(validate_reference_name("chr1").is_ok());
/// assert_eq!(validate_reference_name("chr!1"), Err(ValidationError::ContainsDelimiter));
/// ```
///
/// # Errors
///
/// Returns the `ValidationError` describing why the name cannot be hinted.
pub fn validate_reference_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_REFERENCE_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if name.as_bytes().contains(&DELIMITER) {
        return Err(ValidationError::ContainsDelimiter);
    }
    Ok(())
}
