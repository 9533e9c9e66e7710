//! Detector configuration.
//!
//! A configuration names the two artifact files and, optionally, their
//! encoding. It can be read from a JSON file; missing fields fall back to
//! the defaults (`tfidf.json` and `model_svm.json` in the working
//! directory, format inferred from each file extension).
//!
//! ```json
//! {
//!   "vectorizer_path": "/srv/models/tfidf.bin",
//!   "classifier_path": "/srv/models/model_svm.bin",
//!   "format": "bincode"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TamengError};
use crate::ml::artifact::{ArtifactFormat, DEFAULT_CLASSIFIER_FILE, DEFAULT_VECTORIZER_FILE};

/// Locations of the artifacts a detector is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path to the vectorizer artifact.
    pub vectorizer_path: PathBuf,
    /// Path to the classifier artifact.
    pub classifier_path: PathBuf,
    /// Encoding of both artifacts; `None` infers it per file.
    pub format: Option<ArtifactFormat>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_FILE),
            classifier_path: PathBuf::from(DEFAULT_CLASSIFIER_FILE),
            format: None,
        }
    }
}

impl DetectorConfig {
    pub fn new<V: Into<PathBuf>, C: Into<PathBuf>>(vectorizer_path: V, classifier_path: C) -> Self {
        Self {
            vectorizer_path: vectorizer_path.into(),
            classifier_path: classifier_path.into(),
            format: None,
        }
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TamengError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: DetectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_format(mut self, format: ArtifactFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Reject configurations that cannot name a file.
    pub fn validate(&self) -> Result<()> {
        if self.vectorizer_path.as_os_str().is_empty() {
            return Err(TamengError::config("vectorizer_path is empty"));
        }
        if self.classifier_path.as_os_str().is_empty() {
            return Err(TamengError::config("classifier_path is empty"));
        }
        Ok(())
    }
}
