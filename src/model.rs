use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Active form variant, fixed per page at `Initialize`.
    pub form: FormVariant,

    // Field state (mirrored from the shell's inputs)
    pub field_values: HashMap<String, String>,
    /// Per-field error text. Presence of a key is what marks the field's
    /// "empty" visual state in the shell.
    pub field_errors: HashMap<String, String>,

    // Feedback state
    pub status_message: String,
    pub submit_button: SubmitButton,

    /// True while a POST is in flight. `Submit` events are dropped while
    /// set; the shell also reads this to disable the trigger.
    pub is_submitting: bool,
    /// Classified result of the last completed submission attempt.
    pub last_outcome: Option<SubmissionOutcome>,
}

impl Model {
    /// Current value of a field; fields the shell never reported read as empty.
    pub fn field_value(&self, name: &str) -> &str {
        self.field_values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Reset the status line and button ahead of a new submission attempt.
    pub fn reset_feedback(&mut self) {
        self.status_message.clear();
        self.submit_button = SubmitButton::Label;
    }

    /// Record an outcome together with its user-visible feedback.
    pub fn present(&mut self, outcome: SubmissionOutcome, message: &str, button: SubmitButton) {
        self.last_outcome = Some(outcome);
        self.status_message = message.to_string();
        self.submit_button = button;
    }
}
