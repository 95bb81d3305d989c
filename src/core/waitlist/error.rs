use thiserror::Error;

use super::types::MISSING_EMAIL_MESSAGE;

/// Failure of a signup attempt.
///
/// `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// Email left empty; no request was sent
    #[error("{message}", message = MISSING_EMAIL_MESSAGE)]
    MissingEmail,

    /// Non-2xx response, carrying the service's `detail` or the generic fallback
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body was not valid JSON
    #[error("{0}")]
    Decode(String),
}
