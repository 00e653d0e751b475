use thiserror::Error;

/// Shown when the server gives no usable reason.
pub const GENERIC_SERVER_MESSAGE: &str = "Something went wrong. Please try again.";

pub const NETWORK_MESSAGE: &str =
    "Unable to reach the server. Check your connection and tap Retry.";

pub const MALFORMED_MESSAGE: &str = "Server configuration error. Please contact support.";

/// Failures talking to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure or timeout; nothing usable came back.
    #[error("Network unavailable: {reason}")]
    NetworkUnavailable { reason: String },

    /// Non-2xx status, or a 2xx body with `success: false`.
    #[error("Server rejected the request: {message}")]
    ServerRejected { status: u16, message: String },

    /// 2xx body that is not the expected JSON shape.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl ApiError {
    /// Text safe to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NetworkUnavailable { .. } => NETWORK_MESSAGE.to_string(),
            ApiError::ServerRejected { message, .. } => message.clone(),
            ApiError::MalformedResponse { .. } => MALFORMED_MESSAGE.to_string(),
        }
    }

    /// The user can reasonably try the same thing again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::NetworkUnavailable { .. })
    }
}
