//! The classification pipeline.
//!
//! [`SpamDetector`] is the immutable context that holds the loaded
//! artifacts. It is built once at startup and passed to whatever serves
//! requests; every call to [`SpamDetector::classify`] runs
//!
//! ```text
//! raw text → empty check → normalize → transform → decide → confidence
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tameng::detector::SpamDetector;
//! use tameng::ml::{Label, LinearClassifier, TfIdfVectorizer, VectorizerArtifact};
//!
//! # fn main() -> tameng::error::Result<()> {
//! let vectorizer = TfIdfVectorizer::from_artifact(VectorizerArtifact {
//!     vocabulary: [("denda".to_string(), 0), ("lunas".to_string(), 1)].into(),
//!     idf: vec![1.5, 1.5],
//!     norm: None,
//!     sublinear_tf: false,
//!     tokenizer: Default::default(),
//!     ngram_range: (1, 1),
//! })?;
//! let classifier = LinearClassifier::new(vec![2.0, -2.0], -0.1)?;
//! let detector = SpamDetector::new(Arc::new(vectorizer), Arc::new(classifier))?;
//!
//! let prediction = detector.classify("DENDA 500rb!")?;
//! assert_eq!(prediction.label, Label::Spam);
//! assert!(prediction.confidence > 0.5 && prediction.confidence < 1.0);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::analysis::char_filter::whitespace::is_separator;
use crate::analysis::normalizer::TextNormalizer;
use crate::config::DetectorConfig;
use crate::error::{Result, TamengError};
use crate::ml::classifier::Classifier;
use crate::ml::confidence::confidence;
use crate::ml::linear::LinearClassifier;
use crate::ml::tfidf::TfIdfVectorizer;
use crate::ml::types::Prediction;
use crate::ml::vectorizer::Vectorizer;

/// Spam detector built from a vectorizer and a classifier.
#[derive(Clone)]
pub struct SpamDetector {
    normalizer: TextNormalizer,
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
}

impl SpamDetector {
    /// Create a detector with the standard normalizer.
    ///
    /// Fails with `DimensionMismatch` when the vectorizer and classifier do
    /// not share a feature space, so a mismatched pair never serves.
    pub fn new(vectorizer: Arc<dyn Vectorizer>, classifier: Arc<dyn Classifier>) -> Result<Self> {
        if vectorizer.dimension() != classifier.n_features() {
            return Err(TamengError::dimension_mismatch(
                classifier.n_features(),
                vectorizer.dimension(),
            ));
        }

        Ok(Self {
            normalizer: TextNormalizer::standard(),
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from disk.
    pub fn load<V: AsRef<Path>, C: AsRef<Path>>(vectorizer_path: V, classifier_path: C) -> Result<Self> {
        Self::from_config(&DetectorConfig::new(
            vectorizer_path.as_ref(),
            classifier_path.as_ref(),
        ))
    }

    /// Load the artifacts a configuration names.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        config.validate()?;

        let vectorizer = TfIdfVectorizer::load_with_format(&config.vectorizer_path, config.format)?;
        let classifier = LinearClassifier::load_with_format(&config.classifier_path, config.format)?;
        let detector = Self::new(Arc::new(vectorizer), Arc::new(classifier))?;

        info!(
            features = detector.vectorizer.dimension(),
            vectorizer = detector.vectorizer.name(),
            classifier = detector.classifier.name(),
            "spam detector ready"
        );
        Ok(detector)
    }

    /// Replace the normalizer.
    ///
    /// The normalizer must match the one the vocabulary was built with.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &Arc<dyn Vectorizer> {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    /// Classify one raw message.
    ///
    /// Fails with `EmptyInput` when the message is empty or whitespace-only.
    /// The check runs on the raw text, so `"123 !!!"` is classified (as a
    /// message with no known terms) rather than rejected.
    pub fn classify(&self, raw_text: &str) -> Result<Prediction> {
        self.classify_normalized(raw_text)
            .map(|(_, prediction)| prediction)
    }

    /// Like [`classify`](Self::classify), also returning the normalized text
    /// that was vectorized.
    pub fn classify_normalized(&self, raw_text: &str) -> Result<(String, Prediction)> {
        if raw_text.chars().all(is_separator) {
            return Err(TamengError::EmptyInput);
        }

        let normalized = self.normalizer.normalize(raw_text);
        let features = self.vectorizer.transform(&normalized)?;
        let decision = self.classifier.decide(&features)?;

        let prediction = Prediction {
            label: decision.label,
            confidence: confidence(&decision),
            decision_score: decision.score,
        };
        Ok((normalized, prediction))
    }
}

impl std::fmt::Debug for SpamDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpamDetector")
            .field("normalizer", &self.normalizer)
            .field("vectorizer", &self.vectorizer.name())
            .field("classifier", &self.classifier.name())
            .field("features", &self.vectorizer.dimension())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::confidence::sigmoid;
    use crate::ml::feature_vector::FeatureVector;
    use crate::ml::types::{Decision, Label};
    use std::sync::Mutex;

    /// Records what it was given and returns a fixed vector.
    struct RecordingVectorizer {
        seen: Mutex<Vec<String>>,
        dimension: usize,
    }

    impl Vectorizer for RecordingVectorizer {
        fn transform(&self, text: &str) -> Result<FeatureVector> {
            self.seen.lock().unwrap().push(text.to_string());
            FeatureVector::from_entries(self.dimension, vec![(0, 1.0)])
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    /// Returns a fixed margin.
    struct FixedClassifier {
        score: f64,
        n_features: usize,
    }

    impl Classifier for FixedClassifier {
        fn decide(&self, vector: &FeatureVector) -> Result<Decision> {
            if vector.dimension() != self.n_features {
                return Err(TamengError::dimension_mismatch(
                    self.n_features,
                    vector.dimension(),
                ));
            }
            let label = if self.score >= 0.0 {
                Label::Spam
            } else {
                Label::Ham
            };
            Ok(Decision {
                label,
                score: self.score,
            })
        }

        fn n_features(&self) -> usize {
            self.n_features
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn detector(score: f64) -> (SpamDetector, Arc<RecordingVectorizer>) {
        let vectorizer = Arc::new(RecordingVectorizer {
            seen: Mutex::new(Vec::new()),
            dimension: 4,
        });
        let classifier = Arc::new(FixedClassifier {
            score,
            n_features: 4,
        });
        let detector = SpamDetector::new(vectorizer.clone(), classifier).unwrap();
        (detector, vectorizer)
    }

    #[test]
    fn test_empty_input_rejected_before_vectorizing() {
        let (detector, vectorizer) = detector(1.0);
        for text in ["", "   ", "\t\n", "\u{3000}", "\u{1c}", " \u{1f}\u{1d} "] {
            assert!(matches!(detector.classify(text), Err(TamengError::EmptyInput)));
        }
        assert!(vectorizer.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_vectorizer_receives_normalized_text() {
        let (detector, vectorizer) = detector(1.0);
        detector.classify("  Segera BAYAR: Rp.500.000!! ").unwrap();
        assert_eq!(
            vectorizer.seen.lock().unwrap().as_slice(),
            &["segera bayar rp".to_string()]
        );
    }

    #[test]
    fn test_classify_normalized_returns_vectorized_text() {
        let (detector, vectorizer) = detector(-1.0);
        let (normalized, prediction) = detector
            .classify_normalized("Terima KASIH, 100%")
            .unwrap();
        assert_eq!(normalized, "terima kasih");
        assert_eq!(vectorizer.seen.lock().unwrap().as_slice(), &[normalized]);
        assert_eq!(prediction.label, Label::Ham);
    }

    #[test]
    fn test_spam_confidence_uses_sigmoid() {
        let (detector, _) = detector(1.5);
        let prediction = detector.classify("tagihan").unwrap();
        assert_eq!(prediction.label, Label::Spam);
        assert_eq!(prediction.decision_score, 1.5);
        assert_eq!(prediction.confidence, sigmoid(1.5));
    }

    #[test]
    fn test_ham_confidence_uses_complement() {
        let (detector, _) = detector(-2.0);
        let prediction = detector.classify("terima kasih").unwrap();
        assert_eq!(prediction.label, Label::Ham);
        assert_eq!(prediction.confidence, 1.0 - sigmoid(-2.0));
    }

    #[test]
    fn test_punctuation_only_input_is_classified() {
        let (detector, vectorizer) = detector(-0.25);
        let prediction = detector.classify("12345!!!").unwrap();
        assert_eq!(prediction.label, Label::Ham);
        assert_eq!(vectorizer.seen.lock().unwrap().as_slice(), &[String::new()]);
    }

    #[test]
    fn test_mismatched_artifacts_rejected() {
        let vectorizer = Arc::new(RecordingVectorizer {
            seen: Mutex::new(Vec::new()),
            dimension: 4,
        });
        let classifier = Arc::new(FixedClassifier {
            score: 0.0,
            n_features: 5,
        });
        match SpamDetector::new(vectorizer, classifier) {
            Err(TamengError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 4);
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_custom_normalizer() {
        let (detector, vectorizer) = detector(1.0);
        let detector = detector.with_normalizer(TextNormalizer::new());
        detector.classify("Apa Adanya!").unwrap();
        assert_eq!(
            vectorizer.seen.lock().unwrap().as_slice(),
            &["Apa Adanya!".to_string()]
        );
    }
}
