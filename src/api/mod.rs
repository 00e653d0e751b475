//! HTTP collaborator: request plumbing and response decoding.

mod client;
mod envelope;
mod error;

pub use client::ApiClient;
pub use envelope::{decode_list, decode_mutation, RawResponse, SubmitSuccess};
pub use error::{ApiError, GENERIC_SERVER_MESSAGE, MALFORMED_MESSAGE, NETWORK_MESSAGE};
