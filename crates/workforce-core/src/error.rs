//! Error types shared by the client, the session layer and the UI.

use thiserror::Error;

use crate::validation::ValidationError;

/// Toast text used when nothing more specific is known.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Toast text for a rejected sign-in without a backend message.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Every failure an API action can end in.
///
/// All variants are terminal for the action that produced them: callers log
/// the error, show [`ApiError::user_message`] and leave their state alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// `message` from the error body envelope, when present.
        message: Option<String>,
    },

    /// 401: the access token is missing, expired or revoked.
    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    /// A 2xx response whose envelope reported failure.
    #[error("Rejected by server: {message}")]
    Rejected { message: String },

    /// The response body did not match the expected schema.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// No admin could be resolved for the current session.
    #[error("No admin selected")]
    NoTenant,

    /// There is no access token in the session.
    #[error("Not signed in")]
    NotSignedIn,

    /// Client-side validation rejected the form before any request.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Human-readable text for a toast.
    ///
    /// The backend's own `message` wins; otherwise a short per-variant text,
    /// falling back to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(m), .. }
            | ApiError::Unauthorized { message: Some(m) }
            | ApiError::Rejected { message: m } => m.clone(),
            ApiError::Unauthorized { message: None } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::NoTenant => "Please select an admin to continue.".to_string(),
            ApiError::NotSignedIn => "Please sign in to continue.".to_string(),
            ApiError::Validation(v) => v.message.clone(),
            ApiError::Status { message: None, .. } | ApiError::Network(_) | ApiError::Decode(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// True when the user has to sign in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::NotSignedIn)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_preferred() {
        let err = ApiError::Status { status: 400, message: Some("Phone already exists".into()) };
        assert_eq!(err.user_message(), "Phone already exists");
    }

    #[test]
    fn test_generic_fallback() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ApiError::Network("offline".into()).user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: ApiError = ValidationError::new("title", "Please enter a visit title").into();
        assert_eq!(err.user_message(), "Please enter a visit title");
        assert!(!err.requires_login());
    }

    #[test]
    fn test_unauthorized_requires_login() {
        assert!(ApiError::Unauthorized { message: None }.requires_login());
        assert!(ApiError::NotSignedIn.requires_login());
    }
}
