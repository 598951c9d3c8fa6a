//! Paperrec Core Library
//!
//! Content-based recommendation over a fixed corpus of research papers:
//! corpus loading, TF-IDF vectorization, cosine similarity and ranking.

pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod ranking;
pub mod recommender;
pub mod records;
pub mod similarity;
pub mod text;
pub mod vectorize;
