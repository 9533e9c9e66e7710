//! Feature extraction and scoring for spam detection.
//!
//! - [`Vectorizer`] / [`tfidf::TfIdfVectorizer`]: normalized text to sparse TF-IDF features
//! - [`Classifier`] / [`linear::LinearClassifier`]: features to a label and a margin
//! - [`confidence`]: margin to a confidence in (0, 1)
//! - [`artifact`]: the frozen model files both are loaded from

pub mod artifact;
pub mod classifier;
pub mod confidence;
pub mod feature_vector;
pub mod linear;
pub mod tfidf;
pub mod types;
pub mod vectorizer;

pub use artifact::{Artifact, ArtifactFormat, ClassifierArtifact, VectorizerArtifact};
pub use classifier::Classifier;
pub use feature_vector::FeatureVector;
pub use linear::LinearClassifier;
pub use tfidf::{Norm, TfIdfVectorizer};
pub use types::{Decision, DecisionScore, Label, Prediction};
pub use vectorizer::Vectorizer;
