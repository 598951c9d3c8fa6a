//! Ranking selector: picks the most and least similar articles from a score vector
//!
//! Both selections are repeated linear scans over the scores. Ties go to the
//! lowest index because a candidate only replaces the running best on a
//! strict comparison.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::similarity::SimilarityScores;

/// Default size of the "most similar" list
pub const DEFAULT_MOST_SIMILAR: usize = 8;
/// Default size of the "least similar" list
pub const DEFAULT_LEAST_SIMILAR: usize = 3;
/// Scores at or above this are near-duplicates of the query
pub const DEFAULT_NEAR_DUPLICATE_THRESHOLD: f64 = 0.97;

/// Largest list size accepted from configuration
pub const MAX_LIST_LEN: usize = 1000;

/// Starting value for the minimum scan, above any cosine score
const LEAST_SENTINEL: f64 = 2.0;

/// What the most-similar scan does once no positive candidate is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortfallPolicy {
    /// Fill the remaining rounds with index 0
    #[default]
    PadWithFirst,
    /// Stop and return fewer results
    Truncate,
}

/// Sizes and thresholds for ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub most_similar: usize,
    pub least_similar: usize,
    pub near_duplicate_threshold: f64,
    pub shortfall: ShortfallPolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            most_similar: DEFAULT_MOST_SIMILAR,
            least_similar: DEFAULT_LEAST_SIMILAR,
            near_duplicate_threshold: DEFAULT_NEAR_DUPLICATE_THRESHOLD,
            shortfall: ShortfallPolicy::default(),
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.near_duplicate_threshold) {
            bail_invalid!("near_duplicate_threshold", self.near_duplicate_threshold);
        }
        if self.most_similar > MAX_LIST_LEN {
            bail_invalid!("most_similar", self.most_similar);
        }
        if self.least_similar > MAX_LIST_LEN {
            bail_invalid!("least_similar", self.least_similar);
        }
        Ok(())
    }
}

/// Indices picked for display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RankingResult {
    /// Ascending corpus indices
    pub most_similar: Vec<usize>,
    /// Corpus indices in selection order (lowest score first)
    pub least_similar: Vec<usize>,
}

/// Run both selections over `scores`
pub fn rank(scores: &SimilarityScores, config: &RankingConfig) -> RankingResult {
    let values = scores.as_slice();
    let result = RankingResult {
        most_similar: select_most_similar(
            values,
            config.most_similar,
            config.near_duplicate_threshold,
            config.shortfall,
        ),
        least_similar: select_least_similar(values, config.least_similar),
    };
    debug!(
        chosen = ?scores.chosen,
        most = ?result.most_similar,
        least = ?result.least_similar,
        "rank"
    );
    result
}

/// Pick up to `k` indices with the highest scores strictly between 0 and
/// `threshold`, returned in ascending index order.
///
/// Each round takes the highest remaining score that is above zero, below
/// `threshold`, and not already picked. When a round finds nothing, the
/// `shortfall` policy decides: `PadWithFirst` records index 0 for that round
/// (so index 0 may repeat), `Truncate` stops early.
pub fn select_most_similar(
    scores: &[f64],
    k: usize,
    threshold: f64,
    shortfall: ShortfallPolicy,
) -> Vec<usize> {
    let mut selected: Vec<usize> = Vec::with_capacity(k.min(scores.len()));

    for _ in 0..k {
        let mut best_value = 0.0;
        let mut best_index = None;

        for (index, &score) in scores.iter().enumerate() {
            if selected.contains(&index) || score >= threshold {
                continue;
            }
            if score > best_value {
                best_value = score;
                best_index = Some(index);
            }
        }

        match (best_index, shortfall) {
            (Some(index), _) => selected.push(index),
            (None, ShortfallPolicy::PadWithFirst) => selected.push(0),
            (None, ShortfallPolicy::Truncate) => break,
        }
    }

    selected.sort_unstable();
    selected
}

/// Pick `m` indices with the lowest scores, in selection order.
///
/// No threshold applies, so the query's own index is a candidate like any
/// other. Once every index has been picked, further rounds record index 0.
pub fn select_least_similar(scores: &[f64], m: usize) -> Vec<usize> {
    let mut selected: Vec<usize> = Vec::with_capacity(m.min(scores.len()));

    for _ in 0..m {
        let mut lowest_value = LEAST_SENTINEL;
        let mut lowest_index = 0;

        for (index, &score) in scores.iter().enumerate() {
            if selected.contains(&index) {
                continue;
            }
            if score < lowest_value {
                lowest_value = score;
                lowest_index = index;
            }
        }

        selected.push(lowest_index);
    }

    selected
}
