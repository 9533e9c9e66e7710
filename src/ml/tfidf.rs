//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer never learns. Its vocabulary and inverse document
//! frequencies are read from a [`VectorizerArtifact`] and stay fixed for
//! the lifetime of the value.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::tokenizer::{Tokenizer, TokenizerKind};
use crate::error::{Result, TamengError};
use crate::ml::artifact::{Artifact, ArtifactFormat, VectorizerArtifact};
use crate::ml::feature_vector::FeatureVector;
use crate::ml::vectorizer::Vectorizer;

/// Vector normalization applied after term weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute values.
    L1,
    /// Divide by the Euclidean length.
    L2,
}

/// TF-IDF vectorizer backed by a frozen vocabulary.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each index.
    idf: Vec<f64>,
    norm: Option<Norm>,
    sublinear_tf: bool,
    ngram_range: (usize, usize),
    tokenizer_kind: TokenizerKind,
    /// Tokenizer built from `tokenizer_kind`.
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("norm", &self.norm)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("ngram_range", &self.ngram_range)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Build a vectorizer from an in-memory artifact.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        Self::build(artifact, "<memory>")
    }

    /// Load a vectorizer artifact, inferring the format from the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_format(path, None)
    }

    /// Load a vectorizer artifact in the given format.
    pub fn load_with_format<P: AsRef<Path>>(
        path: P,
        format: Option<ArtifactFormat>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let vectorizer = Self::build(
            VectorizerArtifact::load(path, format)?,
            &path.display().to_string(),
        )?;
        info!(
            path = %path.display(),
            vocabulary_size = vectorizer.vocabulary_size(),
            tokenizer = %vectorizer.tokenizer_kind,
            "loaded vectorizer"
        );
        Ok(vectorizer)
    }

    /// Decode a vectorizer artifact from memory.
    pub fn from_bytes(bytes: &[u8], format: ArtifactFormat) -> Result<Self> {
        Self::build(VectorizerArtifact::from_bytes(bytes, format)?, "<bytes>")
    }

    fn build(artifact: VectorizerArtifact, origin: &str) -> Result<Self> {
        Self::validate(&artifact, origin)?;

        let tokenizer = artifact
            .tokenizer
            .build()
            .map_err(|e| TamengError::artifact_load(origin, e.to_string()))?;

        Ok(Self {
            vocabulary: artifact.vocabulary.into_iter().collect(),
            idf: artifact.idf,
            norm: artifact.norm,
            sublinear_tf: artifact.sublinear_tf,
            ngram_range: artifact.ngram_range,
            tokenizer_kind: artifact.tokenizer,
            tokenizer,
        })
    }

    fn validate(artifact: &VectorizerArtifact, origin: &str) -> Result<()> {
        let fail = |message: String| -> Result<()> {
            Err(TamengError::artifact_load(origin, message))
        };

        if artifact.vocabulary.is_empty() {
            return fail("vocabulary is empty".to_string());
        }
        if artifact.idf.len() != artifact.vocabulary.len() {
            return fail(format!(
                "idf table has {} entries but vocabulary has {} terms",
                artifact.idf.len(),
                artifact.vocabulary.len()
            ));
        }

        // Indices must cover 0..len exactly once.
        let mut seen = vec![false; artifact.idf.len()];
        for (term, &index) in &artifact.vocabulary {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => return fail(format!("index {index} is assigned twice ('{term}')")),
                None => return fail(format!("index {index} of '{term}' is out of range")),
            }
        }

        if let Some(index) = artifact.idf.iter().position(|w| !w.is_finite()) {
            return fail(format!("idf[{index}] is not a finite number"));
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return fail(format!("invalid ngram_range ({min_n}, {max_n})"));
        }

        Ok(())
    }

    /// Export the table this vectorizer was built from.
    pub fn to_artifact(&self) -> VectorizerArtifact {
        VectorizerArtifact {
            vocabulary: self
                .vocabulary
                .iter()
                .map(|(term, &index)| (term.clone(), index))
                .collect::<HashMap<_, _>>(),
            idf: self.idf.clone(),
            norm: self.norm,
            sublinear_tf: self.sublinear_tf,
            tokenizer: self.tokenizer_kind.clone(),
            ngram_range: self.ngram_range,
        }
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary.
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|index| self.idf[index])
    }

    pub fn norm(&self) -> Option<Norm> {
        self.norm
    }

    pub fn sublinear_tf(&self) -> bool {
        self.sublinear_tf
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    pub fn tokenizer_kind(&self) -> &TokenizerKind {
        &self.tokenizer_kind
    }

    /// Tokenize and expand into the configured word n-grams.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.tokenizer.tokenize(text)?.map(|t| t.text).collect();

        let (min_n, max_n) = self.ngram_range;
        if (min_n, max_n) == (1, 1) {
            return Ok(tokens);
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        Ok(terms)
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn transform(&self, text: &str) -> Result<FeatureVector> {
        // Count term frequencies
        let mut tf: AHashMap<usize, f64> = AHashMap::new();
        for term in self.terms(text)? {
            if let Some(&index) = self.vocabulary.get(&term) {
                *tf.entry(index).or_insert(0.0) += 1.0;
            }
        }

        // Apply IDF
        let weighted = tf.into_iter().map(|(index, count)| {
            let count = if self.sublinear_tf {
                1.0 + count.ln()
            } else {
                count
            };
            (index, count * self.idf[index])
        });
        let mut vector = FeatureVector::from_entries(self.dimension(), weighted)?;

        let length = match self.norm {
            Some(Norm::L1) => vector.l1_norm(),
            Some(Norm::L2) => vector.l2_norm(),
            None => 0.0,
        };
        if length > 0.0 {
            vector.scale(1.0 / length);
        }

        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}
