//! Error types for the itinerary core.

use thiserror::Error;

/// Comprehensive error type for all itinerary-core operations.
///
/// Search failures deliberately have no variant here: the orchestrator
/// recovers them silently into an empty suggestion list (they are
/// frequently retried background calls), so they never cross this boundary.
#[derive(Error, Debug)]
pub enum WanderError {
    /// Required external credentials are absent; surfaced once, blocking
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Itinerary generation failed (transport, empty, or malformed result)
    #[error("Generation failed: {message}")]
    Generation { message: String },

    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Spot not found for the given ID
    #[error("Spot with ID {id} not found")]
    SpotNotFound { id: u64 },

    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },

    /// Calendar or timestamp arithmetic errors
    #[error("Calendar error: {source}")]
    Calendar {
        #[from]
        source: jiff::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl WanderError {
    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        WanderError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a generation-pipeline error from a message.
    pub fn generation(message: impl Into<String>) -> Self {
        WanderError::Generation {
            message: message.into(),
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WanderError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for itinerary-core operations
pub type Result<T> = std::result::Result<T, WanderError>;
