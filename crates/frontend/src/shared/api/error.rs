use thiserror::Error;

/// Failure of a call to the admin API.
///
/// Validation errors never get here, they are caught by the form before a
/// request is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Server error {status}: {message}")]
    Http { status: u16, message: String },

    /// `status: false` inside a 200 response
    #[error("{0}")]
    Rejected(String),

    /// Response body is not the envelope the screen expects
    #[error("Unexpected response: {0}")]
    Shape(String),

    #[error("Failed to build request: {0}")]
    Request(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_qs::Error> for ApiError {
    fn from(e: serde_qs::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}
