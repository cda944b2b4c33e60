use thiserror::Error;

/// Failures surfaced by backend gateway ports.
///
/// `Rejected` carries a backend-reported refusal (e.g. an invalid recovery
/// key); the other variants are transport or protocol failures.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("request rejected: {message}")]
    Rejected { message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Operator-facing message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network(_) => "Cannot reach the backend".to_string(),
            GatewayError::Timeout => "The backend took too long to respond".to_string(),
            GatewayError::Status { message, .. } => message.clone(),
            GatewayError::Rejected { message } => message.clone(),
            GatewayError::Decode(_) => "The backend sent an unexpected response".to_string(),
        }
    }
}
