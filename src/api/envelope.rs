//! Response envelope decoding.
//!
//! Every endpoint answers `{ "success": bool, "message"?: string, ... }`.
//! Mutations carry the record in `data`; list endpoints put the array in
//! `data` or under the plural resource name.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::entity::EntityKind;

use super::error::{ApiError, GENERIC_SERVER_MESSAGE};

/// Status and body as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Decoded body of an accepted create/update/delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitSuccess {
    pub message: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Best-effort reason out of an error body.
fn server_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].into_iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string())
}

fn parse_envelope(response: &RawResponse) -> Result<Envelope, ApiError> {
    let envelope: Envelope = serde_json::from_slice(&response.body).map_err(|e| {
        tracing::error!(status = response.status, error = %e, "Unexpected response body");
        ApiError::MalformedResponse {
            reason: e.to_string(),
        }
    })?;

    if !envelope.success {
        return Err(ApiError::ServerRejected {
            status: response.status,
            message: envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string()),
        });
    }

    Ok(envelope)
}

fn reject_non_success(response: &RawResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::ServerRejected {
        status: response.status,
        message: server_message(&response.body),
    })
}

/// Decode the answer to a create/update/delete.
///
/// An empty 2xx body is accepted (deletes often return nothing).
pub fn decode_mutation(response: &RawResponse) -> Result<SubmitSuccess, ApiError> {
    reject_non_success(response)?;

    if response.is_empty() {
        return Ok(SubmitSuccess::default());
    }

    let envelope = parse_envelope(response)?;
    Ok(SubmitSuccess {
        message: envelope.message,
        data: envelope.data.filter(|d| !d.is_null()),
    })
}

/// Decode a list endpoint into raw records.
pub fn decode_list(kind: EntityKind, response: &RawResponse) -> Result<Vec<Value>, ApiError> {
    reject_non_success(response)?;

    let mut envelope = parse_envelope(response)?;
    let items = envelope
        .data
        .take()
        .or_else(|| envelope.rest.remove(kind.resource()))
        .or_else(|| envelope.rest.remove(&format!("{}s", kind.as_str())));

    match items {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => {
            tracing::error!(entity = %kind, "List payload is not an array: {}", other);
            Err(ApiError::MalformedResponse {
                reason: format!("expected an array of {}", kind.resource()),
            })
        }
        None => {
            tracing::error!(entity = %kind, "List payload missing");
            Err(ApiError::MalformedResponse {
                reason: format!("no {} in response", kind.resource()),
            })
        }
    }
}
