//! Field control state and its pure transitions.
//!
//! The reactive form control is abstracted as plain data: the raw
//! value, the validator's verdict for it, and whether the field has
//! been touched. The pipeline owns a single `ControlState` and
//! publishes snapshots; the presentation layer only reads them.

use serde::{Deserialize, Serialize};

use crate::types::{ValidationError, ValidationState};
use crate::validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ControlState {
    pub value: String,
    pub validation: ValidationState,
    pub dirty: bool,
}

impl ControlState {
    /// Pristine control: empty value, untouched, no error shown.
    pub fn pristine() -> Self {
        Self::default()
    }

    /// Transition for one raw edit.
    ///
    /// An empty value resets the control (clearing any `numbersOnly`
    /// error) instead of marking it dirty. This is the undebounced
    /// reset rule; it runs on every keystroke, not just settled ones.
    #[must_use]
    pub fn apply_input(&self, raw: &str) -> Self {
        if raw.is_empty() {
            return Self::pristine();
        }
        let validation = match validate::numbers_only(raw) {
            Ok(()) => ValidationState::Valid,
            Err(reason) => ValidationState::Invalid(reason),
        };
        Self {
            value: raw.to_string(),
            validation,
            dirty: true,
        }
    }

    /// True when the `numbersOnly` error should be rendered: the field
    /// has been edited and the current value failed validation.
    pub fn shows_numbers_only_error(&self) -> bool {
        self.dirty
            && matches!(
                self.validation,
                ValidationState::Invalid(ValidationError::NumbersOnly)
            )
    }
}
