//! Error types for configuration, pattern assets and remote store operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for every cycle operation
#[derive(Debug, Error)]
pub enum GraphArtError {
    /// Required setting is absent or empty after decryption
    #[error("Expected value for environment variable \"{key}\"")]
    Configuration {
        /// Environment variable name
        key: &'static str,
    },

    /// Setting is present but cannot be used
    #[error("Invalid value for \"{key}\" = '{value}': {reason}")]
    InvalidSetting {
        /// Environment variable or field name
        key: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Key service could not decrypt an enveloped value
    #[error("Failed to decrypt \"{key}\": {reason}")]
    Decryption {
        /// Environment variable name
        key: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// State file could not be fetched or had an unexpected shape
    #[error("Failed to read state file from {url}: {reason}")]
    RemoteRead {
        /// Contents endpoint that was queried
        url: String,
        /// Description of what was wrong with the response
        reason: String,
    },

    /// State file contents are not a valid state document
    #[error("Failed to decode state file: {source}")]
    StateDecode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Commit request failed or returned an unexpected shape
    #[error("Failed to write state file to {url}: {reason}")]
    RemoteWrite {
        /// Contents endpoint that was written
        url: String,
        /// Description of what was wrong with the response
        reason: String,
    },

    /// Write was rejected because the revision token is stale
    #[error("Revision '{revision}' is no longer current for the state file")]
    RevisionConflict {
        /// Token the rejected write was based on
        revision: String,
    },

    /// Contribution graph position could not be resolved
    #[error("Failed to resolve contribution graph position: {reason}")]
    BootstrapResolution {
        /// Description of the failure
        reason: String,
    },

    /// Pattern asset is unusable
    #[error("Invalid pattern '{}': {reason}", path.display())]
    PatternLoad {
        /// Path to the pattern asset
        path: PathBuf,
        /// Description of what's wrong with the asset
        reason: String,
    },

    /// Failed to decode a pattern image
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for cycle results
pub type Result<T> = std::result::Result<T, GraphArtError>;

impl From<serde_json::Error> for GraphArtError {
    fn from(source: serde_json::Error) -> Self {
        Self::StateDecode { source }
    }
}

/// Create an invalid setting error
pub fn invalid_setting(
    key: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GraphArtError {
    GraphArtError::InvalidSetting {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a bootstrap resolution error
pub fn bootstrap_error(reason: &impl ToString) -> GraphArtError {
    GraphArtError::BootstrapResolution {
        reason: reason.to_string(),
    }
}
