//! Corpus loading and deduplication
//!
//! The corpus is an ordered list of articles. An article's position in that
//! list is its identity for every later stage (vectors, scores, rankings).

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::trace_time;

/// Column holding article titles
pub const TITLE_FIELD: &str = "titles";
/// Column holding article abstracts
pub const ABSTRACT_FIELD: &str = "abstracts";

/// One row of the record source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub titles: String,
    pub abstracts: String,
}

/// A research paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Article {
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }
}

impl From<RawRecord> for Article {
    fn from(record: RawRecord) -> Self {
        Article::new(record.titles, record.abstracts)
    }
}

/// Ordered, deduplicated, immutable list of articles
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    articles: Vec<Article>,
}

impl Corpus {
    /// Build a corpus from records, keeping the first occurrence of each
    /// `(title, abstract)` pair.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut articles = Vec::new();
        let mut duplicates = 0usize;

        for record in records {
            let key = (record.titles.clone(), record.abstracts.clone());
            if seen.insert(key) {
                articles.push(Article::from(record));
            } else {
                duplicates += 1;
            }
        }

        debug!(articles = articles.len(), duplicates, "build_corpus");
        Corpus { articles }
    }

    /// Load a UTF-8 CSV file with a header row containing `titles` and `abstracts`.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let file = File::open(path)
            .map_err(|e| RecommendError::io_operation("open", path.display(), e))?;
        let corpus = Self::read_csv(file, path)?;
        trace_time!(start, "load_csv", articles = corpus.len());
        Ok(corpus)
    }

    /// Read CSV records from any reader; `path` is used only for error messages.
    pub fn read_csv<R: std::io::Read>(reader: R, path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for field in [TITLE_FIELD, ABSTRACT_FIELD] {
            if !headers.iter().any(|h| h == field) {
                return Err(RecommendError::MissingField {
                    field: field.to_string(),
                    path: PathBuf::from(path),
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<RawRecord>() {
            let record = row.map_err(|e| csv_parse_error(path, &e))?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    /// Abstract texts in corpus order
    pub fn abstracts(&self) -> Vec<&str> {
        self.articles
            .iter()
            .map(|a| a.abstract_text.as_str())
            .collect()
    }
}

fn csv_parse_error(path: &Path, error: &csv::Error) -> RecommendError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    RecommendError::CsvParse {
        path: PathBuf::from(path),
        line,
        reason: error.to_string(),
    }
}
