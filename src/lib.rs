//! # Tameng
//!
//! Spam SMS detection for PayLater billing scams.
//!
//! A message is normalized, turned into TF-IDF features with a frozen
//! vocabulary, scored by a pre-trained linear model and reported as a label
//! with a sigmoid confidence.
//!
//! ## Features
//!
//! - Deterministic, idempotent text normalization
//! - Sparse TF-IDF features from JSON or bincode artifacts
//! - Linear decision function with label and margin from one call
//! - Command line front end
//!
//! ```no_run
//! use tameng::detector::SpamDetector;
//!
//! # fn main() -> tameng::error::Result<()> {
//! let detector = SpamDetector::load("tfidf.json", "model_svm.json")?;
//! let prediction = detector.classify("Tagihan PayLater Anda belum dibayar.")?;
//! println!("{} ({:.2}%)", prediction.label, prediction.confidence_percent());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::normalizer::{TextNormalizer, normalize};
    pub use crate::config::DetectorConfig;
    pub use crate::detector::SpamDetector;
    pub use crate::error::{Result, TamengError};
    pub use crate::ml::{
        Classifier, FeatureVector, Label, LinearClassifier, Prediction, TfIdfVectorizer,
        Vectorizer,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
