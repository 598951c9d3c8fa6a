//! Text processing utilities for tokenization and n-gram extraction

mod stopwords;

pub use stopwords::StopWords;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::sync::OnceLock;
use tracing::warn;

/// Tokens are runs of two or more word characters
static TOKEN_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn token_pattern() -> Option<&'static Regex> {
    TOKEN_PATTERN
        .get_or_init(|| match Regex::new(r"\b\w\w+\b") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile token regex");
                None
            }
        })
        .as_ref()
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Lowercase `text`, split it into word tokens and drop stop words.
pub fn tokenize(text: &str, stop_words: StopWords) -> Vec<String> {
    let Some(pattern) = token_pattern() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !stop_words.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming
pub fn tokenize_with_stemming(text: &str, stop_words: StopWords, stem: bool) -> Vec<String> {
    let tokens = tokenize(text, stop_words);
    if !stem {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// Contiguous n-grams for every `n` in `min_n..=max_n`, joined by a single space.
///
/// Unigrams come first, then bigrams, and so on; within one `n` the order
/// follows the token stream.
pub fn ngrams(tokens: &[String], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let min_n = min_n.max(1);
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}
