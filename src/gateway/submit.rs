use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{decode_mutation, ApiClient, SubmitSuccess};
use crate::mode::ModeController;

use super::error::SubmissionError;
use super::request::{InFlightKey, SubmissionRequest};

/// Every create/update/delete goes through here.
///
/// A submission is refused in demo mode, refused while an identical one
/// (same entity, operation and id) is still running, and otherwise makes
/// exactly one HTTP call. The in-flight key is released on every outcome,
/// including when the caller drops the future mid-request. Nothing is
/// retried automatically.
#[derive(Clone)]
pub struct SubmissionGateway {
    mode: ModeController,
    client: ApiClient,
    in_flight: Arc<Mutex<HashSet<InFlightKey>>>,
}

impl SubmissionGateway {
    pub fn new(mode: ModeController, client: ApiClient) -> Self {
        Self {
            mode,
            client,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn mode(&self) -> &ModeController {
        &self.mode
    }

    pub fn is_in_flight(&self, key: &InFlightKey) -> bool {
        self.in_flight.lock().contains(key)
    }

    /// Keys currently being submitted, for disabling save buttons.
    pub fn in_flight(&self) -> Vec<InFlightKey> {
        self.in_flight.lock().iter().cloned().collect()
    }

    pub async fn submit(&self, request: SubmissionRequest) -> Result<SubmitSuccess, SubmissionError> {
        let request_id = request.request_id();

        if self.mode.is_demo_mode() {
            tracing::info!(%request_id, key = %request.key(), "Submission blocked in demo mode");
            self.mode.notify_blocked_in_demo();
            return Err(SubmissionError::BlockedByDemoMode);
        }

        let key = request.key();
        if !self.in_flight.lock().insert(key.clone()) {
            tracing::debug!(%request_id, %key, "Duplicate submission ignored");
            return Err(SubmissionError::DuplicateInFlight { key });
        }

        let in_flight = Arc::clone(&self.in_flight);
        let _release = scopeguard::guard(key.clone(), move |key| {
            in_flight.lock().remove(&key);
        });

        let method = request.operation().method();
        let path = request.path();
        tracing::debug!(%request_id, %key, %method, %path, "Submitting");

        let result = self
            .client
            .send(method, &path, request.body())
            .await
            .and_then(|response| decode_mutation(&response))
            .map_err(SubmissionError::from);

        match &result {
            Ok(_) => tracing::info!(%request_id, %key, "Submission accepted"),
            Err(err) => tracing::warn!(%request_id, %key, error = %err, "Submission failed"),
        }

        result
    }
}

impl std::fmt::Debug for SubmissionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionGateway")
            .field("mode", &self.mode)
            .field("client", &self.client)
            .field("in_flight", &self.in_flight.lock().len())
            .finish()
    }
}
