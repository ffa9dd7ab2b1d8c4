//! Numbers-only validation for the search field.

use crate::types::ValidationError;

/// Accepts one or more ASCII digits, nothing else.
///
/// The empty string is rejected by this rule; the pipeline's reset
/// rule keeps that rejection out of user-visible state.
pub fn numbers_only(input: &str) -> Result<(), ValidationError> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::NumbersOnly)
    }
}
