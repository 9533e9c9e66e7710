//! Vectorizer trait definition.

use crate::error::Result;
use crate::ml::feature_vector::FeatureVector;

/// Maps normalized text to a feature vector over a fixed feature space.
///
/// Implementations are frozen after construction: `dimension` never changes
/// and `transform` is a pure function of its input.
pub trait Vectorizer: Send + Sync {
    /// Convert normalized text into a feature vector of length `dimension()`.
    fn transform(&self, text: &str) -> Result<FeatureVector>;

    /// Size of the feature space.
    fn dimension(&self) -> usize;

    /// Get the name of this vectorizer for debugging and logging.
    fn name(&self) -> &'static str;
}
