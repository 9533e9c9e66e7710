//! Pre-trained linear classifier.
//!
//! The decision function is `margin = w · x + b`. Internally the margin is
//! always oriented so that positive values mean spam; artifacts that list
//! their classes as `["spam", "ham"]` are flipped at load time.

use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::{Result, TamengError};
use crate::ml::artifact::{Artifact, ArtifactFormat, ClassifierArtifact};
use crate::ml::classifier::Classifier;
use crate::ml::feature_vector::FeatureVector;
use crate::ml::types::{Decision, Label};

/// Linear decision function over a fixed feature space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    /// Spam-oriented weights, one per feature.
    weights: Vec<f64>,
    /// Spam-oriented bias.
    intercept: f64,
}

impl LinearClassifier {
    /// Create a classifier from spam-oriented weights and bias.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Result<Self> {
        Self::from_artifact(ClassifierArtifact {
            coef: weights,
            intercept,
            classes: vec![Label::Ham.to_string(), Label::Spam.to_string()],
        })
    }

    /// Build a classifier from an in-memory artifact.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        Self::build(artifact, "<memory>")
    }

    /// Load a classifier artifact, inferring the format from the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_format(path, None)
    }

    /// Load a classifier artifact in the given format.
    pub fn load_with_format<P: AsRef<Path>>(
        path: P,
        format: Option<ArtifactFormat>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let classifier = Self::build(
            ClassifierArtifact::load(path, format)?,
            &path.display().to_string(),
        )?;
        info!(
            path = %path.display(),
            n_features = classifier.n_features(),
            intercept = classifier.intercept,
            "loaded classifier"
        );
        Ok(classifier)
    }

    /// Decode a classifier artifact from memory.
    pub fn from_bytes(bytes: &[u8], format: ArtifactFormat) -> Result<Self> {
        Self::build(ClassifierArtifact::from_bytes(bytes, format)?, "<bytes>")
    }

    fn build(artifact: ClassifierArtifact, origin: &str) -> Result<Self> {
        let fail = |message: String| TamengError::artifact_load(origin, message);

        if artifact.coef.is_empty() {
            return Err(fail("coefficient vector is empty".to_string()));
        }
        if let Some(index) = artifact.coef.iter().position(|w| !w.is_finite()) {
            return Err(fail(format!("coef[{index}] is not a finite number")));
        }
        if !artifact.intercept.is_finite() {
            return Err(fail("intercept is not a finite number".to_string()));
        }

        let classes = artifact
            .classes
            .iter()
            .map(|class| class.parse::<Label>())
            .collect::<Result<Vec<_>>>()
            .map_err(|e| fail(e.to_string()))?;

        let (mut weights, mut intercept) = (artifact.coef, artifact.intercept);
        match classes.as_slice() {
            [Label::Ham, Label::Spam] => {}
            [Label::Spam, Label::Ham] => {
                debug!(origin, "classes listed as [spam, ham], negating margin");
                weights.iter_mut().for_each(|w| *w = -*w);
                intercept = -intercept;
            }
            _ => {
                return Err(fail(format!(
                    "expected two distinct classes 'ham' and 'spam', got {:?}",
                    artifact.classes
                )));
            }
        }

        Ok(Self { weights, intercept })
    }

    /// Export the model as a spam-oriented artifact.
    pub fn to_artifact(&self) -> ClassifierArtifact {
        ClassifierArtifact {
            coef: self.weights.clone(),
            intercept: self.intercept,
            classes: vec![Label::Ham.to_string(), Label::Spam.to_string()],
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Classifier for LinearClassifier {
    fn decide(&self, vector: &FeatureVector) -> Result<Decision> {
        if vector.dimension() != self.weights.len() {
            return Err(TamengError::dimension_mismatch(
                self.weights.len(),
                vector.dimension(),
            ));
        }

        let score = vector.dot(&self.weights)? + self.intercept;
        let label = if score >= self.threshold() {
            Label::Spam
        } else {
            Label::Ham
        };
        trace!(score, %label, active_features = vector.nnz(), "scored message");

        Ok(Decision { label, score })
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
