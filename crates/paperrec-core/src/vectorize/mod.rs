//! TF-IDF vector space over article abstracts
//!
//! The space is fit once over the whole corpus. Terms are unigrams and
//! bigrams after stop-word removal, pruned by document frequency, weighted by
//! raw count times smoothed IDF and L2-normalized per document.

mod sparse;

pub use sparse::SparseVector;

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RecommendError, Result};
use crate::text::{ngrams, tokenize_with_stemming, StopWords};
use crate::{bail_invalid, trace_time};

/// Parameters of the term-weighting model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorizerConfig {
    /// Drop terms found in fewer than this fraction of documents
    pub min_df: f64,
    /// Drop terms found in more than this fraction of documents
    pub max_df: f64,
    /// Inclusive n-gram lengths
    pub ngram_range: (usize, usize),
    pub stop_words: StopWords,
    pub stemming: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            min_df: 0.03,
            max_df: 0.33,
            ngram_range: (1, 2),
            stop_words: StopWords::English,
            stemming: false,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_df) {
            bail_invalid!("min_df", self.min_df);
        }
        if !(0.0..=1.0).contains(&self.max_df) {
            bail_invalid!("max_df", self.max_df);
        }
        if self.max_df < self.min_df {
            bail_invalid!(
                "max_df",
                format!("{} (below min_df {})", self.max_df, self.min_df)
            );
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || max_n < min_n {
            bail_invalid!("ngram_range", format!("({min_n}, {max_n})"));
        }
        Ok(())
    }

    /// Terms of one document, in token order
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens = tokenize_with_stemming(text, self.stop_words, self.stemming);
        ngrams(&tokens, self.ngram_range)
    }
}

/// Fitted feature space plus one vector per document
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
    config: VectorizerConfig,
}

impl VectorSpace {
    /// Fit the model over `documents` and vectorize each of them, preserving order.
    pub fn fit<S: AsRef<str>>(documents: &[S], config: &VectorizerConfig) -> Result<Self> {
        let start = Instant::now();
        config.validate()?;

        if documents.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| term_counts(config.terms(doc.as_ref())))
            .collect();

        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len() as f64;
        let min_count = config.min_df * total_docs;
        let max_count = config.max_df * total_docs;

        let kept: BTreeMap<&str, usize> = df
            .iter()
            .filter_map(|(&term, &n)| {
                let count = n as f64;
                (count >= min_count && count <= max_count).then_some((term, n))
            })
            .collect();

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (feature, (term, n)) in kept.iter().enumerate() {
            vocabulary.insert(term.to_string(), feature);
            idf.push(smoothed_idf(total_docs, *n as f64));
        }

        debug!(
            documents = documents.len(),
            candidate_terms = df.len(),
            features = vocabulary.len(),
            "fit_vocabulary"
        );
        if vocabulary.is_empty() {
            warn!(
                documents = documents.len(),
                "No terms survive document-frequency pruning; every vector is zero"
            );
        }

        let vectors = counts
            .iter()
            .map(|doc| weigh(doc, &vocabulary, &idf))
            .collect();

        trace_time!(start, "fit_vector_space", features = idf.len());

        Ok(VectorSpace {
            vocabulary,
            idf,
            vectors,
            config: config.clone(),
        })
    }

    /// Project a new text into the fitted space without refitting.
    pub fn transform(&self, text: &str) -> SparseVector {
        let counts = term_counts(self.config.terms(text));
        weigh(&counts, &self.vocabulary, &self.idf)
    }

    /// Number of features shared by every vector
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Number of vectors (equals the corpus length)
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }
}

fn term_counts(terms: Vec<String>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn smoothed_idf(total_docs: f64, df: f64) -> f64 {
    ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0
}

fn weigh(
    counts: &HashMap<String, usize>,
    vocabulary: &BTreeMap<String, usize>,
    idf: &[f64],
) -> SparseVector {
    let pairs = counts
        .iter()
        .filter_map(|(term, &count)| {
            vocabulary
                .get(term)
                .map(|&feature| (feature, count as f64 * idf[feature]))
        })
        .collect();
    SparseVector::from_pairs(pairs).normalized()
}
