//! TOML configuration for the client core.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, ModeConfig, SessionConfig};
