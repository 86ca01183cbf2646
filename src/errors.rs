// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for infrastructure operations

use thiserror::Error;

/// Errors that can occur while computing chart values or infrastructure status
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Malformed serialized configuration
    #[error("Configuration decode error: {0}")]
    ConfigDecode(String),

    /// No keystone URL could be resolved for the region
    #[error("Cannot find keystone URL for region {region:?}")]
    ConfigResolution {
        /// Region that was looked up
        region: String,
    },

    /// Chart rendering failed
    #[error("Chart render error: {0}")]
    Render(String),

    /// The Terraform state could not be read
    #[error("Terraform state access error: {0}")]
    StateAccess(String),
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl InfrastructureError {
    /// Create a state access error for output variables absent from the state
    pub fn missing_outputs<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        InfrastructureError::StateAccess(format!(
            "output variables not found in state: {}",
            keys.join(", ")
        ))
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::ConfigDecode(err.to_string())
    }
}
