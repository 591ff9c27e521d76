use serde::{Deserialize, Serialize};

use crate::types::FormVariant;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize {
        form: FormVariant,
    },

    // Field interaction (mirrored from the shell's input events)
    FieldChanged {
        name: String,
        value: String,
    },
    FieldBlurred {
        name: String,
    },
    FieldFocused {
        name: String,
    },

    // Submission
    Submit,

    // HTTP response (internal event, skipped from serialization)
    #[serde(skip)]
    SubmitResponse(Result<u16, String>),
}
