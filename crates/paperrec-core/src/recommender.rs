//! Recommender facade: corpus, fitted vector space and ranking settings

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::RecommenderConfig;
use crate::corpus::{Article, Corpus};
use crate::error::{RecommendError, Result};
use crate::ranking::{rank, RankingConfig, RankingResult};
use crate::similarity::{SimilarityEngine, SimilarityScores};
use crate::trace_time;
use crate::vectorize::VectorSpace;

/// A listed article with its score against the chosen one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredIndex {
    pub index: usize,
    pub score: f64,
}

/// Result of one recommendation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub chosen: usize,
    pub ranking: RankingResult,
    /// Scores for `ranking.most_similar`, same order
    pub most_similar_scores: Vec<ScoredIndex>,
    /// Scores for `ranking.least_similar`, same order
    pub least_similar_scores: Vec<ScoredIndex>,
}

/// Corpus plus the vector space fitted over it. Read-only after `build`.
#[derive(Debug)]
pub struct Recommender {
    corpus: Corpus,
    space: VectorSpace,
    ranking: RankingConfig,
}

impl Recommender {
    /// Fit the vector space over the corpus abstracts.
    pub fn build(corpus: Corpus, config: &RecommenderConfig) -> Result<Self> {
        let start = Instant::now();
        config.validate()?;
        if corpus.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let space = VectorSpace::fit(&corpus.abstracts(), &config.vectorizer)?;
        debug!(
            articles = corpus.len(),
            features = space.dimension(),
            "build_recommender"
        );
        trace_time!(start, "build_recommender");

        Ok(Recommender {
            corpus,
            space,
            ranking: config.ranking.clone(),
        })
    }

    /// Similarity of every article to the one at `index`
    pub fn scores(&self, index: usize) -> Result<SimilarityScores> {
        SimilarityEngine::new(&self.space).scores_for(index)
    }

    /// Rank the corpus against the article at 0-based `index`.
    pub fn recommend(&self, index: usize) -> Result<Recommendation> {
        let scores = self.scores(index)?;
        debug!(
            chosen = index,
            terms = self.space.vector(index).map_or(0, |v| v.nnz()),
            "recommend"
        );
        let ranking = rank(&scores, &self.ranking);

        let scored = |indices: &[usize]| -> Vec<ScoredIndex> {
            indices
                .iter()
                .map(|&i| ScoredIndex {
                    index: i,
                    score: scores.get(i).unwrap_or(0.0),
                })
                .collect()
        };

        Ok(Recommendation {
            chosen: index,
            most_similar_scores: scored(&ranking.most_similar),
            least_similar_scores: scored(&ranking.least_similar),
            ranking,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    /// Article at 0-based `index`
    pub fn article(&self, index: usize) -> Result<&Article> {
        self.corpus
            .get(index)
            .ok_or(RecommendError::InvalidSelection {
                index,
                len: self.corpus.len(),
            })
    }
}
