//! Error types for gameliftctl

use gamelift_core::{ActivateStatus, ConfigError, CoreError};
use thiserror::Error;

/// Main error type for the gameliftctl application
#[derive(Error, Debug)]
pub enum GameLiftCtlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Activation was refused before anything was sent
    #[error("{operation} was not submitted: {status}")]
    Refused {
        operation: &'static str,
        status: ActivateStatus,
    },

    /// The backend reported a failure
    #[error("{operation} failed: {message}")]
    OperationFailed {
        operation: &'static str,
        message: String,
    },

    /// The completion task ended without calling either delegate
    #[error("{operation} finished without a result")]
    NoCompletion { operation: &'static str },

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameLiftCtlError>;
