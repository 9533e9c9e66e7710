//! Classifier trait definition.

use crate::error::Result;
use crate::ml::feature_vector::FeatureVector;
use crate::ml::types::{Decision, DecisionScore, Label};

/// Binary spam classifier over a fixed feature space.
///
/// [`decide`](Self::decide) is the only scoring entry point. The label and
/// the margin of a [`Decision`] come from the same evaluation, and
/// [`predict`](Self::predict) and
/// [`decision_function`](Self::decision_function) are derived from it.
pub trait Classifier: Send + Sync {
    /// Score the vector and assign a label.
    ///
    /// Fails with `DimensionMismatch` when the vector does not live in the
    /// classifier's feature space.
    fn decide(&self, vector: &FeatureVector) -> Result<Decision>;

    /// Predicted label for the vector.
    fn predict(&self, vector: &FeatureVector) -> Result<Label> {
        Ok(self.decide(vector)?.label)
    }

    /// Raw margin for the vector.
    fn decision_function(&self, vector: &FeatureVector) -> Result<DecisionScore> {
        Ok(self.decide(vector)?.score)
    }

    /// Number of features the classifier expects.
    fn n_features(&self) -> usize;

    /// Margin at or above which a message is labelled spam.
    fn threshold(&self) -> DecisionScore {
        0.0
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &'static str;
}
