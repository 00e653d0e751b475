use std::fmt;

use reqwest::Method;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::entity::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Identity of a submission for duplicate suppression:
/// entity type + operation + entity id (`"new"` for creates).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InFlightKey {
    pub kind: EntityKind,
    pub operation: Operation,
    pub entity_id: String,
}

impl InFlightKey {
    pub fn new(kind: EntityKind, operation: Operation, entity_id: Option<&str>) -> Self {
        Self {
            kind,
            operation,
            entity_id: entity_id.unwrap_or("new").to_string(),
        }
    }
}

impl fmt::Display for InFlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.operation, self.entity_id)
    }
}

/// One user-initiated save or delete. Consumed by a single `submit`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    request_id: Uuid,
    kind: EntityKind,
    operation: Operation,
    entity_id: Option<String>,
    payload: Value,
}

impl SubmissionRequest {
    pub fn create(kind: EntityKind, payload: Map<String, Value>) -> Self {
        Self::build(kind, Operation::Create, None, Value::Object(payload))
    }

    pub fn update(kind: EntityKind, id: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self::build(kind, Operation::Update, Some(id.into()), Value::Object(payload))
    }

    pub fn delete(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::build(kind, Operation::Delete, Some(id.into()), Value::Null)
    }

    fn build(kind: EntityKind, operation: Operation, entity_id: Option<String>, payload: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            kind,
            operation,
            entity_id,
            payload,
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn key(&self) -> InFlightKey {
        InFlightKey::new(self.kind, self.operation, self.entity_id())
    }

    /// `/{resource}` for creates, `/{resource}/{id}` otherwise.
    pub fn path(&self) -> String {
        self.kind.item_path(self.entity_id())
    }

    /// Request body; deletes send none.
    pub fn body(&self) -> Option<&Value> {
        match self.operation {
            Operation::Delete => None,
            Operation::Create | Operation::Update => Some(&self.payload),
        }
    }
}
