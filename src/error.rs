//! Error types for the Tameng library.
//!
//! All errors are represented by the [`TamengError`] enum. Errors fall in two
//! groups: recoverable input errors (an empty message) that a caller reports
//! back to the user, and fatal configuration errors (unreadable or
//! mismatched model artifacts) that must stop the detector from serving.
//!
//! # Examples
//!
//! ```
//! use tameng::error::{Result, TamengError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TamengError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tameng operations.
#[derive(Error, Debug)]
pub enum TamengError {
    /// The raw message was empty or whitespace-only.
    #[error("Input text is empty")]
    EmptyInput,

    /// A model artifact was missing, unreadable or structurally invalid.
    #[error("Failed to load artifact {path}: {message}")]
    ArtifactLoad { path: String, message: String },

    /// Vectorizer output does not match the classifier's feature space.
    #[error("Feature dimension mismatch: classifier expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenizer construction, filters, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TamengError.
pub type Result<T> = std::result::Result<T, TamengError>;

impl TamengError {
    /// Create a new artifact load error.
    pub fn artifact_load<P: Into<String>, S: Into<String>>(path: P, msg: S) -> Self {
        TamengError::ArtifactLoad {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a new dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        TamengError::DimensionMismatch { expected, actual }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TamengError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TamengError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TamengError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TamengError::Other(msg.into())
    }

    /// Whether the error means the detector must not serve requests.
    ///
    /// Artifact and dimension errors indicate a broken deployment. An empty
    /// message is reported to the user and the caller carries on.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            TamengError::EmptyInput | TamengError::InvalidArgument(_)
        )
    }
}
