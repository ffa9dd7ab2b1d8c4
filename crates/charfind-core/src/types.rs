//! Domain types shared by the validator, pipeline and lookup client.

use serde::{Deserialize, Serialize};

/// Opaque payload returned by the character service.
///
/// Passed through unshaped; the presentation layer decides what (if
/// anything) to pick out of it.
pub type CharacterRecord = serde_json::Value;

/// Reason code attached to a failed validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    /// The field accepts one or more ASCII digits and nothing else.
    #[serde(rename = "numbersOnly")]
    NumbersOnly,
}

/// Verdict for the current field value, recomputed on every edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ValidationState {
    /// The field has not been edited since creation or the last reset.
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

/// Result of one lookup attempt.
///
/// Superseded by the next settled query's outcome; there is no outcome
/// queue, latest wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SearchOutcome {
    /// The service returned a record for the settled query.
    Found(CharacterRecord),
    /// The service reported no record, or the attempt failed and was
    /// swallowed benignly.
    NotFound,
    /// The settled query was empty or not a finite number; no call was
    /// made.
    NotApplicable,
}
