//! Errors for snapshot loading and config generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The snapshot describes a project no valid config can be generated for.
    #[error("{message}")]
    Validation { message: String },

    /// The Jetpack Compose section of the snapshot could not be read.
    #[error(
        "Could not read Jetpack Compose configuration, likely plugin version incompatibility? \
         If you're using Compose 1.1 or below, try upgrading to Compose 1.2 or higher."
    )]
    ComposeImport {
        #[source]
        source: serde_json::Error,
    },

    /// The JavaFX section of the snapshot could not be read.
    #[error("Could not read JavaFX configuration, possible version incompatibility?")]
    JavaFxImport {
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot document itself is not valid JSON.
    #[error("Failed to parse project snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for config generation.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create a validation error with a human-readable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
