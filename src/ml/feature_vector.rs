//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TamengError};

/// A sparse vector over a fixed feature space.
///
/// Entries are kept sorted by index and zero values are never stored, so a
/// message with no known terms is represented by an empty entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureVector")]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

/// Unchecked wire form; decoding goes through [`FeatureVector::from_entries`].
#[derive(Deserialize)]
struct RawFeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl TryFrom<RawFeatureVector> for FeatureVector {
    type Error = TamengError;

    fn try_from(raw: RawFeatureVector) -> Result<Self> {
        FeatureVector::from_entries(raw.dimension, raw.entries)
    }
}

impl FeatureVector {
    /// The all-zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        FeatureVector {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(index, value)` pairs.
    ///
    /// Values for a repeated index are summed. Fails if an index is outside
    /// the feature space.
    pub fn from_entries<I>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut entries: Vec<(usize, f64)> = entries.into_iter().collect();
        if let Some(&(index, _)) = entries.iter().find(|(index, _)| *index >= dimension) {
            return Err(TamengError::invalid_argument(format!(
                "feature index {index} out of range for dimension {dimension}"
            )));
        }

        entries.sort_unstable_by_key(|(index, _)| *index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            match merged.last_mut() {
                Some((last, sum)) if *last == index => *sum += value,
                _ => merged.push((index, value)),
            }
        }
        merged.retain(|(_, value)| *value != 0.0);

        Ok(FeatureVector {
            dimension,
            entries: merged,
        })
    }

    /// Build a vector from a dense slice.
    pub fn from_dense(values: &[f64]) -> Self {
        FeatureVector {
            dimension: values.len(),
            entries: values
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, value)| *value != 0.0)
                .collect(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `index`, zero when absent or out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Iterate over the non-zero entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &(index, value) in &self.entries {
            if let Some(slot) = dense.get_mut(index) {
                *slot = value;
            }
        }
        dense
    }

    /// Dot product with a dense weight vector of the same dimension.
    pub fn dot(&self, weights: &[f64]) -> Result<f64> {
        if weights.len() != self.dimension {
            return Err(TamengError::dimension_mismatch(
                weights.len(),
                self.dimension,
            ));
        }
        self.entries
            .iter()
            .map(|&(index, value)| {
                weights
                    .get(index)
                    .map(|weight| value * weight)
                    .ok_or_else(|| TamengError::dimension_mismatch(weights.len(), index + 1))
            })
            .sum()
    }

    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value.abs()).sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Multiply every entry by `factor`.
    pub(crate) fn scale(&mut self, factor: f64) {
        for (_, value) in &mut self.entries {
            *value *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_merges_and_sorts() {
        let vector = FeatureVector::from_entries(5, vec![(3, 1.0), (1, 2.0), (3, 0.5)]).unwrap();
        assert_eq!(vector.dimension(), 5);
        assert_eq!(vector.nnz(), 2);
        assert_eq!(vector.iter().collect::<Vec<_>>(), vec![(1, 2.0), (3, 1.5)]);
        assert_eq!(vector.get(3), 1.5);
        assert_eq!(vector.get(0), 0.0);
        assert_eq!(vector.get(99), 0.0);
    }

    #[test]
    fn test_from_entries_drops_cancelled_values() {
        let vector = FeatureVector::from_entries(2, vec![(0, 1.0), (0, -1.0)]).unwrap();
        assert!(vector.is_zero());
    }

    #[test]
    fn test_from_entries_out_of_range() {
        assert!(FeatureVector::from_entries(2, vec![(2, 1.0)]).is_err());
    }

    #[test]
    fn test_dense_round_trip() {
        let dense = vec![0.0, 0.25, 0.0, 4.0];
        let vector = FeatureVector::from_dense(&dense);
        assert_eq!(vector.nnz(), 2);
        assert_eq!(vector.to_dense(), dense);
    }

    #[test]
    fn test_zeros() {
        let vector = FeatureVector::zeros(7);
        assert!(vector.is_zero());
        assert_eq!(vector.to_dense(), vec![0.0; 7]);
        assert_eq!(vector.l2_norm(), 0.0);
    }

    #[test]
    fn test_dot_product() {
        let vector = FeatureVector::from_dense(&[1.0, 0.0, 2.0]);
        assert_eq!(vector.dot(&[0.5, 100.0, -1.0]).unwrap(), -1.5);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let vector = FeatureVector::zeros(3);
        match vector.dot(&[1.0, 2.0]) {
            Err(TamengError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_validates_entries() {
        let result = serde_json::from_str::<FeatureVector>(r#"{"dimension":2,"entries":[[5,1.0]]}"#);
        assert!(result.is_err());

        let vector: FeatureVector =
            serde_json::from_str(r#"{"dimension":4,"entries":[[3,1.0],[1,2.0],[3,0.5],[0,0.0]]}"#)
                .unwrap();
        assert_eq!(vector.iter().collect::<Vec<_>>(), vec![(1, 2.0), (3, 1.5)]);
        assert_eq!(vector.get(3), 1.5);
    }

    #[test]
    fn test_deserialized_vector_scores_without_panic() {
        let vector: FeatureVector =
            serde_json::from_str(r#"{"dimension":2,"entries":[[1,4.0]]}"#).unwrap();
        assert_eq!(vector.dot(&[0.5, 0.25]).unwrap(), 1.0);
        assert!(vector.dot(&[0.5]).is_err());
    }

    #[test]
    fn test_norms() {
        let vector = FeatureVector::from_dense(&[3.0, -4.0]);
        assert_eq!(vector.l1_norm(), 7.0);
        assert_eq!(vector.l2_norm(), 5.0);
    }
}
