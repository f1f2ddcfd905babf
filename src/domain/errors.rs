//! Errors raised while resolving agent configuration.

use thiserror::Error;

/// Startup configuration errors.
///
/// Every variant aborts agent startup: the inputs must be fixed externally
/// before the process is restarted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host runtime is older than the agent supports.
    #[error("Unsupported runtime version {found}: requires {required} or newer")]
    UnsupportedRuntime {
        /// Version the runtime reported.
        found: String,
        /// Minimum version required.
        required: String,
    },

    /// The configured port is not a valid TCP port.
    #[error("Invalid port: {0}. Must be an integer between 0 and 65535")]
    InvalidPort(String),

    /// A computed automatic attribute names an unregistered function.
    #[error("Unknown automatic attribute function: {0}")]
    UnknownAttributeFunction(String),

    /// A store key was published a second time.
    #[error("Configuration key already published: {0}")]
    AlreadyPublished(String),

    /// The static manifest could not be read or parsed.
    #[error("Failed to load manifest: {0}")]
    Manifest(String),

    /// A value could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Manifest(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}
