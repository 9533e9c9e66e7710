//! Persisted model artifacts.
//!
//! The vectorizer table and the linear model are produced by an external
//! training job and loaded here as frozen data. Both are plain serde
//! structs stored either as JSON or as bincode; the format is inferred from
//! the file extension unless given explicitly.
//!
//! A minimal vectorizer artifact in JSON:
//!
//! ```json
//! {
//!   "vocabulary": { "tagihan": 0, "denda": 1 },
//!   "idf": [1.6931, 2.0986],
//!   "norm": "l2",
//!   "sublinear_tf": false,
//!   "tokenizer": "whitespace",
//!   "ngram_range": [1, 1]
//! }
//! ```
//!
//! and a classifier artifact:
//!
//! ```json
//! { "coef": [1.2, 0.8], "intercept": -0.25, "classes": ["ham", "spam"] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tokenizer::TokenizerKind;
use crate::error::{Result, TamengError};
use crate::ml::tfidf::Norm;

/// Default vectorizer artifact file name.
pub const DEFAULT_VECTORIZER_FILE: &str = "tfidf.json";

/// Default classifier artifact file name.
pub const DEFAULT_CLASSIFIER_FILE: &str = "model_svm.json";

/// On-disk encoding of an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    #[default]
    Json,
    Bincode,
}

impl ArtifactFormat {
    /// Infer the format from a file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("bin") | Some("bincode") => ArtifactFormat::Bincode,
            _ => ArtifactFormat::Json,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Bincode => "bin",
        }
    }
}

/// Serialize/deserialize helpers shared by both artifact kinds.
pub trait Artifact: Serialize + DeserializeOwned + Sized {
    /// Decode an artifact from memory.
    fn from_bytes(bytes: &[u8], format: ArtifactFormat) -> Result<Self> {
        decode(bytes, format, "<bytes>")
    }

    /// Read and decode an artifact file.
    ///
    /// A missing, unreadable or undecodable file is an `ArtifactLoad` error.
    fn load<P: AsRef<Path>>(path: P, format: Option<ArtifactFormat>) -> Result<Self> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| ArtifactFormat::from_path(path));
        debug!(path = %path.display(), ?format, "reading artifact");

        let bytes = fs::read(path)
            .map_err(|e| TamengError::artifact_load(path.display().to_string(), e.to_string()))?;
        decode(&bytes, format, &path.display().to_string())
    }

    /// Encode the artifact.
    fn to_bytes(&self, format: ArtifactFormat) -> Result<Vec<u8>> {
        match format {
            ArtifactFormat::Json => Ok(serde_json::to_vec_pretty(self)?),
            ArtifactFormat::Bincode => bincode::serialize(self)
                .map_err(|e| TamengError::other(format!("bincode encoding failed: {e}"))),
        }
    }

    /// Encode the artifact and write it to `path`.
    fn save<P: AsRef<Path>>(&self, path: P, format: Option<ArtifactFormat>) -> Result<()> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| ArtifactFormat::from_path(path));
        fs::write(path, self.to_bytes(format)?)?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8], format: ArtifactFormat, origin: &str) -> Result<T> {
    match format {
        ArtifactFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| TamengError::artifact_load(origin, format!("invalid JSON: {e}"))),
        ArtifactFormat::Bincode => bincode::deserialize(bytes)
            .map_err(|e| TamengError::artifact_load(origin, format!("invalid bincode: {e}"))),
    }
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_classes() -> Vec<String> {
    vec!["ham".to_string(), "spam".to_string()]
}

/// Pre-fit term-weighting table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term to feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
    /// Vector normalization applied after weighting; `null` disables it.
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    /// Replace term frequency `tf` with `1 + ln(tf)`.
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Tokenizer the vocabulary was built with.
    #[serde(default)]
    pub tokenizer: TokenizerKind,
    /// Smallest and largest word n-gram length in the vocabulary.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
}

impl Artifact for VectorizerArtifact {}

/// Parameters of a pre-trained linear decision function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// One weight per feature.
    pub coef: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
    /// Class labels; a positive margin means `classes[1]`.
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

impl Artifact for ClassifierArtifact {}
