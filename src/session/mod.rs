//! Persisted login, read when a screen mounts.
//!
//! The session file looks like `{ "user": { "id": 4, "name": "Asha", ... } }`.
//! Only the user id matters to the core: it scopes list and create calls.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const MISSING_SESSION_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No logged-in user")]
    MissingSession,

    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Opaque user id; the backend sends either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(UserId(s)),
            Value::Number(n) => Ok(UserId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "user id must be a string or number, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    /// Everything else the login endpoint returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    user: Option<SessionUser>,
}

/// File-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored user, or `None` when nobody is logged in.
    pub fn load_user(&self) -> Result<Option<SessionUser>, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let file: SessionFile =
            serde_json::from_str(&content).map_err(|e| SessionError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(file.user)
    }

    pub fn current_user_id(&self) -> Result<UserId, SessionError> {
        self.load_user()?
            .map(|user| user.id)
            .filter(|id| !id.as_str().trim().is_empty())
            .ok_or(SessionError::MissingSession)
    }

    pub fn save(&self, user: &SessionUser) -> Result<(), SessionError> {
        let write_error = |source| SessionError::WriteError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let file = SessionFile {
            user: Some(user.clone()),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| write_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, content).map_err(write_error)?;

        tracing::info!(user_id = %user.id, "Session saved");
        Ok(())
    }

    /// Log out. Succeeds when there is nothing to remove.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
