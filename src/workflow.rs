//! Form submission for one entity screen, end to end:
//! validate, gate on mode, submit, then reconcile the list.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::collection::CollectionViewModel;
use crate::entity::Entity;
use crate::gateway::{SubmissionError, SubmissionGateway, SubmissionRequest, SubmitSuccess};
use crate::session::{SessionStore, MISSING_SESSION_MESSAGE};
use crate::validation::{EntityFormValidator, FormDraft, ValidationReport};

/// Field carrying the owner id on create.
pub const CREATOR_FIELD: &str = "createdBy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Shown inline per field; nothing was sent.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationReport),

    #[error("No logged-in user")]
    MissingSession,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl WorkflowError {
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::ValidationFailed(_) => "Please correct the highlighted fields.".to_string(),
            WorkflowError::MissingSession => MISSING_SESSION_MESSAGE.to_string(),
            WorkflowError::Submission(err) => err.user_message(),
        }
    }
}

pub struct EntityWorkflow<E: Entity> {
    validator: Arc<EntityFormValidator>,
    gateway: SubmissionGateway,
    session: SessionStore,
    collection: CollectionViewModel<E>,
}

impl<E: Entity> EntityWorkflow<E> {
    pub fn new(
        validator: Arc<EntityFormValidator>,
        gateway: SubmissionGateway,
        session: SessionStore,
        collection: CollectionViewModel<E>,
    ) -> Self {
        Self {
            validator,
            gateway,
            session,
            collection,
        }
    }

    pub fn collection(&self) -> &CollectionViewModel<E> {
        &self.collection
    }

    pub fn validate(&self, draft: &FormDraft) -> ValidationReport {
        self.validator.validate(E::KIND, draft)
    }

    /// Create (`existing_id == None`) or update a record from a form draft.
    ///
    /// The list is only touched once the server has accepted the change.
    pub async fn save(&self, draft: &FormDraft, existing_id: Option<&str>) -> Result<E, WorkflowError> {
        let report = self.validate(draft);
        if !report.is_valid() {
            tracing::debug!(entity = %E::KIND, errors = report.errors().len(), "Draft rejected");
            return Err(WorkflowError::ValidationFailed(report));
        }

        let mut payload = self.validator.build_payload(E::KIND, draft);

        match existing_id {
            None => {
                // Demo mode is refused by the gateway; don't demand a login first.
                if !self.gateway.mode().is_demo_mode() {
                    let owner = self.session.current_user_id().map_err(|e| {
                        tracing::warn!(error = %e, "Session unavailable for create");
                        WorkflowError::MissingSession
                    })?;
                    payload.insert(CREATOR_FIELD.to_string(), Value::String(owner.to_string()));
                }

                let success = self
                    .gateway
                    .submit(SubmissionRequest::create(E::KIND, payload))
                    .await?;
                let entity = created_entity::<E>(success)?;
                self.collection.apply_created(entity.clone());
                Ok(entity)
            }
            Some(id) => {
                let success = self
                    .gateway
                    .submit(SubmissionRequest::update(E::KIND, id, payload.clone()))
                    .await?;
                let entity = updated_entity::<E>(success, id, payload)?;
                self.collection.apply_updated(entity.clone());
                Ok(entity)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), WorkflowError> {
        self.gateway
            .submit(SubmissionRequest::delete(E::KIND, id))
            .await?;
        self.collection.apply_removed(id);
        Ok(())
    }
}

fn decode_entity<E: Entity>(value: Value) -> Result<E, SubmissionError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(entity = %E::KIND, error = %e, "Saved record does not match schema");
        SubmissionError::MalformedResponse {
            reason: e.to_string(),
        }
    })
}

fn created_entity<E: Entity>(success: SubmitSuccess) -> Result<E, SubmissionError> {
    match success.data {
        Some(data) => decode_entity(data),
        None => {
            tracing::error!(entity = %E::KIND, "Create response carried no record");
            Err(SubmissionError::MalformedResponse {
                reason: "create response has no data".to_string(),
            })
        }
    }
}

/// Servers often answer an update with just `{ success: true }`; rebuild
/// the record from what was sent in that case.
fn updated_entity<E: Entity>(
    success: SubmitSuccess,
    id: &str,
    mut payload: Map<String, Value>,
) -> Result<E, SubmissionError> {
    match success.data {
        Some(data) => decode_entity(data),
        None => {
            payload.insert("id".to_string(), Value::String(id.to_string()));
            decode_entity(Value::Object(payload))
        }
    }
}
