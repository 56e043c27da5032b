//! Input Validation Helpers
//!
//! Small helpers the domain services use to run their ordered validation
//! chains. Each helper takes the error to raise so the caller controls
//! which variant fires.

use super::error::DomainError;

/// Require a field to be present and non-blank.
///
/// Absent and empty inputs are treated the same way, matching the
/// transport's "falsy field is missing" convention.
pub fn required(value: Option<&str>, missing: DomainError) -> Result<&str, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing),
    }
}

/// Parse an entity id from its wire representation.
///
/// A non-numeric id cannot reference any stored entity, so parse failures
/// surface as the entity's not-found error.
pub fn parse_id(value: &str, not_found: DomainError) -> Result<i64, DomainError> {
    value.trim().parse::<i64>().map_err(|_| not_found)
}
