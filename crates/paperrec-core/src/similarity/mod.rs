//! Similarity engine for scoring every article against a chosen one

use serde::Serialize;

use crate::error::{RecommendError, Result};
use crate::vectorize::{SparseVector, VectorSpace};

/// Cosine similarity between two non-negative vectors, clamped to `[0, 1]`.
///
/// Returns 0.0 when either vector has no weight.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores of every corpus article against one chosen article, index-aligned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityScores {
    /// Corpus index of the chosen article, if the query came from the corpus
    pub chosen: Option<usize>,
    values: Vec<f64>,
}

impl SimilarityScores {
    pub fn new(chosen: Option<usize>, values: Vec<f64>) -> Self {
        SimilarityScores { chosen, values }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Similarity Engine over a fitted vector space
pub struct SimilarityEngine<'a> {
    space: &'a VectorSpace,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new Similarity Engine
    pub fn new(space: &'a VectorSpace) -> Self {
        SimilarityEngine { space }
    }

    /// Score every article against the article at `index` (itself included).
    pub fn scores_for(&self, index: usize) -> Result<SimilarityScores> {
        let vector = self
            .space
            .vector(index)
            .ok_or(RecommendError::InvalidSelection {
                index,
                len: self.space.len(),
            })?;
        let mut scores = self.scores_against(vector);
        scores.chosen = Some(index);
        Ok(scores)
    }

    /// Score every article against an arbitrary vector from the same space.
    pub fn scores_against(&self, query: &SparseVector) -> SimilarityScores {
        let values = self
            .space
            .vectors()
            .iter()
            .map(|v| cosine_similarity(query, v))
            .collect();
        SimilarityScores::new(None, values)
    }
}
