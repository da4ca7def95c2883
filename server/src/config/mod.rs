//! Server configuration.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (read & deserialize, defaults for anything missing)
//!     → PORT / CLI overrides (main.rs)
//!     → validation.rs (semantic checks, all errors reported)
//!     → ServerConfig (immutable for the process lifetime)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, LogFormat, LoggingConfig, ServerConfig, StoreConfig};
pub use validation::{validate_config, ValidationError};
