//! Provider credential configuration.

use std::env;

use crate::error::{Result, WanderError};

/// Environment variable holding the generation provider credential.
pub const API_KEY_VAR: &str = "WANDERPLAN_API_KEY";

/// Credentials required to reach the generation provider.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    api_key: String,
}

impl GenerationConfig {
    /// Reads the configuration from the environment.
    ///
    /// An absent or empty credential is a blocking configuration error,
    /// surfaced once with no retry; search has no credential requirement and
    /// keeps working without one.
    ///
    /// # Errors
    ///
    /// * `WanderError::Configuration` - when the credential is absent
    pub fn from_env() -> Result<Self> {
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(WanderError::configuration(format!(
                "Set {API_KEY_VAR} in the environment to use AI itinerary generation"
            ))),
        }
    }

    /// The provider credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
