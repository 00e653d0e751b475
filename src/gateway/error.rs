use thiserror::Error;

use crate::api::ApiError;
use crate::mode::DEMO_BLOCKED_MESSAGE;

use super::request::InFlightKey;

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Demo mode is on; no request was sent.
    #[error("Blocked in demo mode")]
    BlockedByDemoMode,

    /// The same entity/operation is already being submitted.
    #[error("Submission already in flight: {key}")]
    DuplicateInFlight { key: InFlightKey },

    #[error("Network unavailable: {reason}")]
    NetworkUnavailable { reason: String },

    #[error("Server rejected the request: {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl From<ApiError> for SubmissionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NetworkUnavailable { reason } => SubmissionError::NetworkUnavailable { reason },
            ApiError::ServerRejected { status, message } => {
                SubmissionError::ServerRejected { status, message }
            }
            ApiError::MalformedResponse { reason } => SubmissionError::MalformedResponse { reason },
        }
    }
}

impl SubmissionError {
    /// Text safe to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::BlockedByDemoMode => DEMO_BLOCKED_MESSAGE.to_string(),
            SubmissionError::DuplicateInFlight { .. } => {
                "This request is already being processed.".to_string()
            }
            SubmissionError::NetworkUnavailable { reason } => ApiError::NetworkUnavailable {
                reason: reason.clone(),
            }
            .user_message(),
            SubmissionError::ServerRejected { message, .. } => message.clone(),
            SubmissionError::MalformedResponse { reason } => ApiError::MalformedResponse {
                reason: reason.clone(),
            }
            .user_message(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::NetworkUnavailable { .. })
    }
}
