//! Unified error handling for gamelift-core
//!
//! Two layers of errors live here:
//!
//! - [`BackendError`] is the outcome of a single backend call. Proxies never
//!   return it to the caller; they relay [`BackendError::message`] to the
//!   failure delegate.
//! - [`CoreError`] covers constructing a client handle.
//!
//! # Example
//!
//! ```rust
//! use gamelift_core::BackendError;
//!
//! let err = BackendError::NotFound {
//!     message: "Game session not found".to_string(),
//! };
//! assert!(err.is_not_found());
//! assert_eq!(err.message(), "Game session not found");
//! ```

use thiserror::Error;

use crate::config::ConfigError;

/// Outcome error of one backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Requested resource does not exist (NotFoundException)
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Credentials rejected (UnauthorizedException)
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Request was throttled by the backend
    #[error("Throttled: {message}")]
    Throttled { message: String },

    /// Request failed validation (InvalidRequestException)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Resource is in a conflicting state (ConflictException, InvalidGameSessionStatusException)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Account or fleet limit reached (LimitExceededException, GameSessionFullException)
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// Any other service-side error, keyed by its exception name
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Request never reached the backend or the connection broke
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a body this client cannot use
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Human-readable message, without the classification prefix
    pub fn message(&self) -> &str {
        match self {
            BackendError::NotFound { message }
            | BackendError::Unauthorized { message }
            | BackendError::Throttled { message }
            | BackendError::InvalidRequest { message }
            | BackendError::Conflict { message }
            | BackendError::LimitExceeded { message }
            | BackendError::Service { message, .. } => message,
            BackendError::Transport(message) | BackendError::MalformedResponse(message) => message,
        }
    }

    /// Classify a backend exception name into a variant
    ///
    /// Accepts both the bare name (`NotFoundException`) and the qualified
    /// form the JSON protocol uses (`com.amazonaws.gamelift#NotFoundException`).
    pub fn from_exception(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let name = code.rsplit('#').next().unwrap_or(code);
        match name {
            "NotFoundException" => BackendError::NotFound { message },
            "UnauthorizedException" | "AccessDeniedException" | "UnrecognizedClientException" => {
                BackendError::Unauthorized { message }
            }
            "ThrottlingException" | "TooManyRequestsException" => {
                BackendError::Throttled { message }
            }
            "InvalidRequestException" | "ValidationException" => {
                BackendError::InvalidRequest { message }
            }
            "ConflictException"
            | "InvalidGameSessionStatusException"
            | "InvalidFleetStatusException"
            | "TerminalRoutingStrategyException" => BackendError::Conflict { message },
            "LimitExceededException"
            | "GameSessionFullException"
            | "FleetCapacityExceededException" => BackendError::LimitExceeded { message },
            other => BackendError::Service {
                code: other.to_string(),
                message,
            },
        }
    }

    /// Returns true if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound { .. })
    }

    /// Returns true if the backend rejected the caller's identity
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BackendError::Unauthorized { .. })
    }

    /// Returns true if this is a throttling error
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, BackendError::Throttled { .. })
    }

    /// Returns true if the request itself was rejected
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, BackendError::InvalidRequest { .. })
    }

    /// Returns true if a caller-driven retry could succeed
    ///
    /// Informational only: nothing in this crate retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            BackendError::Throttled { .. } | BackendError::Transport(_) => true,
            BackendError::Service { code, .. } => code == "InternalServiceException",
            _ => false,
        }
    }
}

/// Error building a client handle
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP backend could not be constructed
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Called outside a tokio runtime
    #[error("No tokio runtime available: {0}")]
    NoRuntime(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
