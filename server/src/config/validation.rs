//! Semantic checks that serde cannot express.
//!
//! Returns every problem found, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::loader::ConfigError;
use crate::config::schema::ServerConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("logging.level {0:?} is not a valid filter")]
    LogLevel(String),
}

pub fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if EnvFilter::try_new(&config.logging.level).is_err() {
        errors.push(ValidationError::LogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn reports_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.logging.level = "todo=loud".to_string();

        match validate_config(&config) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        ValidationError::BindAddress("localhost".to_string()),
                        ValidationError::LogLevel("todo=loud".to_string()),
                    ]
                );
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }
}
