//! Mode-gated, duplicate-suppressing submission of mutations.

mod error;
mod request;
mod submit;

pub use crate::api::SubmitSuccess;
pub use error::SubmissionError;
pub use submit::SubmissionGateway;
pub use request::{InFlightKey, Operation, SubmissionRequest};
