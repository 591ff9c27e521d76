use serde::{Deserialize, Serialize};

/// Error text shown under a field that failed the non-empty check.
pub const MSG_EMPTY_FIELD: &str = "O campo não pode ser vazio";

/// Status line text after a 200 response.
pub const MSG_SUCCESS: &str = "Dados submetidos com sucesso";

/// Status line text after a validation failure or a 400 response.
pub const MSG_FILL_ALL_FIELDS: &str = "Preencha todos os campos";

/// Status line text after a 422 response.
pub const MSG_PROCESSING_PROBLEM: &str =
    "Obtivemos problemas ao processar os dados, tente novamente mais tarde.";

/// Classified result of one submission attempt.
///
/// Exactly one outcome is produced per submit. `NetworkError` and
/// `UnknownStatus` are recorded and logged but produce no user-visible
/// feedback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A required field was empty; no request was sent.
    ValidationFailed,
    /// Response status 200.
    Success,
    /// Response status 400.
    BadRequest,
    /// Response status 422.
    UnprocessableEntity,
    /// The request never produced a response.
    NetworkError,
    /// Any other response status.
    UnknownStatus,
}

/// Content of the submit button container.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitButton {
    /// Idle label.
    #[default]
    Label,
    /// Loading spinner while a request is in flight.
    Spinner,
    /// Positive icon after a successful submission.
    CheckIcon,
    /// Negative icon after a validation failure, 400 or 422.
    XIcon,
}
