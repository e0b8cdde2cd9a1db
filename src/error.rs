//! Error types for scheduling engine operations.
//!
//! The engine distinguishes exactly two caller-visible failure kinds: requests
//! that were rejected before scheduling began, and internal faults indicating
//! a contract violation by a collaborator. Validation failures are not errors
//! at this level; they trigger fallback inside the orchestrator and surface
//! through the returned `ValidationResult`.

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The request was malformed or incomplete and scheduling never began.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal failure. Rare; indicates a collaborator broke its
    /// contract rather than a core-logic defect.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EngineError {
    /// Create an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check whether this error rejects the caller's input (as opposed to an
    /// internal fault).
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        EngineError::internal(err.to_string())
    }
}
