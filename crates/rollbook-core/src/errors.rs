use anyhow::Error;
use std::fmt;

/// Fallback shown to the user when the backend gave us nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Broad classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, timeout).
    Network,
    /// The response body could not be decoded into the expected shape.
    Decode,
    /// Local input failed schema validation before anything was sent.
    Validation,
    /// The backend answered 404 for the addressed resource.
    NotFound,
    /// The backend answered with any other non-success status.
    Backend { status: u16 },
    /// Required configuration is missing or malformed.
    Config,
    /// Anything else.
    Internal,
}

/// Application error carrying a classification, the underlying cause, and
/// an optional message fit to show the user.
///
/// Every failure is terminal for the action that produced it; there is no
/// retry machinery. The operator re-runs the command.
#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
    user_facing: Option<String>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
            user_facing: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn network<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Network, err)
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Decode, err)
    }

    pub fn config<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Config, err)
    }

    /// Local validation failure. The message is the per-field text the
    /// operator sees.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::Validation,
            error: anyhow::anyhow!("Validation failed: {}", message),
            user_facing: Some(message),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::NotFound,
            error: anyhow::anyhow!("{}", message),
            user_facing: Some(message),
        }
    }

    /// Non-success response from the backend. `message` is whatever could
    /// be extracted from the response body, if anything.
    pub fn backend(status: u16, message: Option<String>) -> Self {
        let error = match &message {
            Some(msg) => anyhow::anyhow!("Backend returned {}: {}", status, msg),
            None => anyhow::anyhow!("Backend returned {}", status),
        };
        let kind = if status == 404 {
            ErrorKind::NotFound
        } else {
            ErrorKind::Backend { status }
        };
        Self {
            kind,
            error,
            user_facing: message,
        }
    }

    /// Message safe to print for the operator: the extracted backend or
    /// validation text when there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        self.user_facing
            .clone()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for AppError {}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_keeps_extracted_message() {
        let err = AppError::backend(422, Some("Name is required".to_string()));
        assert_eq!(err.kind, ErrorKind::Backend { status: 422 });
        assert_eq!(err.user_message(), "Name is required");
    }

    #[test]
    fn backend_error_without_body_falls_back() {
        let err = AppError::backend(500, None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn backend_404_classifies_as_not_found() {
        let err = AppError::backend(404, Some("Student not found".to_string()));
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn validation_message_is_user_facing() {
        let err = AppError::validation("email is invalid");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.user_message(), "email is invalid");
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn network_error_falls_back_to_generic_message() {
        let err = AppError::network(anyhow::anyhow!("connection refused"));
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
