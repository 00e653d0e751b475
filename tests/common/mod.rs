//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use loomkeeper::api::ApiClient;
use loomkeeper::config::ApiConfig;
use loomkeeper::mode::{ModeController, NoticeQueue};
use loomkeeper::session::{SessionStore, SessionUser, UserId};
use loomkeeper::validation::FormDraft;
use serde_json::{Map, Value};
use std::net::TcpListener;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL where nothing is listening.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&api_config(base_url)).expect("Failed to build client")
}

/// Mode controller whose notices can be inspected.
pub fn mode(demo: bool) -> (ModeController, NoticeQueue) {
    let notices = NoticeQueue::new();
    let mode = ModeController::with_sink(demo, Arc::new(notices.clone()));
    (mode, notices)
}

/// Session file in a temp dir, optionally pre-populated.
pub fn temp_session(user_id: Option<&str>) -> (TempDir, SessionStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::new(temp_dir.path().join("session.json"));
    if let Some(id) = user_id {
        store
            .save(&SessionUser {
                id: UserId::new(id),
                name: Some("Test Owner".to_string()),
                extra: Map::new(),
            })
            .expect("Failed to write session");
    }
    (temp_dir, store)
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub fn draft(pairs: &[(&str, &str)]) -> FormDraft {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
