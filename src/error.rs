//! Error types for SDK bundle generation.
//!
//! Every failure kind surfaces to the process boundary unhandled; nothing in
//! this crate retries or suppresses an error. Graceful cancellation is not an
//! error at all; it is a [`RunOutcome`](crate::lifecycle::RunOutcome).

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for all generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The running machine's CPU architecture could not be determined
    #[error("cannot detect host CPU architecture: '{arch}' is not a supported architecture")]
    HostDetection {
        /// The unrecognized architecture string reported by the platform
        arch: String,
    },

    /// A distribution name/version combination outside the compatibility table
    #[error(
        "unsupported version '{version}' for Linux distribution '{name}' (supported: {supported})"
    )]
    DistributionValidation {
        /// Distribution name
        name: String,
        /// The rejected version string
        version: String,
        /// Comma-separated list of versions valid for this name
        supported: String,
    },

    /// An invalid combination of recipe inputs
    #[error("invalid recipe configuration: {reason}")]
    RecipeConstruction {
        /// Reason for the error
        reason: String,
    },

    /// Failure reported by the bundle generator during assembly
    #[error("bundle generation failed: {0}")]
    GeneratorExecution(#[source] anyhow::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
