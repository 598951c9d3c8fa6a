//! Rendering of articles and recommendations in each output format
//!
//! Article numbers shown to users start from 1; corpus indices start from 0.

use std::io::Write;

use colored::Colorize;
use paperrec_core::corpus::{Article, Corpus};
use paperrec_core::error::Result;
use paperrec_core::recommender::{Recommendation, Recommender, ScoredIndex};
use paperrec_core::records::{escape_quotes, single_line};

use crate::cli::OutputFormat;

/// 1-based article number for a corpus index
pub fn article_number(index: usize) -> usize {
    index + 1
}

fn title_line(index: usize, article: &Article) -> String {
    format!("{}) {}", article_number(index), article.title)
        .blue()
        .to_string()
}

fn article_json(index: usize, article: &Article) -> serde_json::Value {
    serde_json::json!({
        "number": article_number(index),
        "title": article.title,
        "abstract": article.abstract_text,
    })
}

/// Print one article (title and abstract)
pub fn write_article<W: Write>(
    out: &mut W,
    format: OutputFormat,
    index: usize,
    article: &Article,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out)?;
            writeln!(out, "{}", title_line(index, article))?;
            writeln!(out)?;
            writeln!(out, "{}", article.abstract_text)?;
        }
        OutputFormat::Json => {
            writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&article_json(index, article))?
            )?;
        }
        OutputFormat::Records => {
            writeln!(out, "H paperrec=1 records=1 mode=show")?;
            write_article_records(out, index, article)?;
        }
    }
    Ok(())
}

fn write_article_records<W: Write>(out: &mut W, index: usize, article: &Article) -> Result<()> {
    writeln!(
        out,
        "A {} \"{}\"",
        article_number(index),
        escape_quotes(&single_line(&article.title))
    )?;
    writeln!(out, "B {}", single_line(&article.abstract_text))?;
    Ok(())
}

/// Print the chosen article followed by both recommendation lists
pub fn write_recommendation<W: Write>(
    out: &mut W,
    format: OutputFormat,
    recommender: &Recommender,
    recommendation: &Recommendation,
) -> Result<()> {
    let chosen = recommender.article(recommendation.chosen)?;

    match format {
        OutputFormat::Human => {
            write_article(out, format, recommendation.chosen, chosen)?;
            writeln!(out)?;
            writeln!(out, "Here are some similar papers you should look at: ")?;
            writeln!(out)?;
            for entry in &recommendation.most_similar_scores {
                let article = recommender.article(entry.index)?;
                writeln!(out, "{}", title_line(entry.index, article))?;
            }
            writeln!(out)?;
            writeln!(out, "Here are some NOT so similar papers: ")?;
            writeln!(out)?;
            for entry in &recommendation.least_similar_scores {
                let article = recommender.article(entry.index)?;
                writeln!(out, "{}", title_line(entry.index, article))?;
            }
        }
        OutputFormat::Json => {
            let listed = |entries: &[ScoredIndex]| -> Result<Vec<serde_json::Value>> {
                entries
                    .iter()
                    .map(|entry| -> Result<serde_json::Value> {
                        let article = recommender.article(entry.index)?;
                        Ok(serde_json::json!({
                            "number": article_number(entry.index),
                            "title": article.title,
                            "score": entry.score,
                        }))
                    })
                    .collect()
            };
            let output = serde_json::json!({
                "chosen": article_json(recommendation.chosen, chosen),
                "most_similar": listed(&recommendation.most_similar_scores)?,
                "least_similar": listed(&recommendation.least_similar_scores)?,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(
                out,
                "H paperrec=1 records=1 mode=recommend chosen={} articles={} features={}",
                article_number(recommendation.chosen),
                recommender.corpus().len(),
                recommender.space().dimension()
            )?;
            write_article_records(out, recommendation.chosen, chosen)?;
            for (kind, entries) in [
                ("most", &recommendation.most_similar_scores),
                ("least", &recommendation.least_similar_scores),
            ] {
                for entry in entries {
                    let article = recommender.article(entry.index)?;
                    writeln!(
                        out,
                        "S {} {} score={:.4} \"{}\"",
                        kind,
                        article_number(entry.index),
                        entry.score,
                        escape_quotes(&single_line(&article.title))
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Print every article number and title
pub fn write_list<W: Write>(out: &mut W, format: OutputFormat, corpus: &Corpus) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (index, article) in corpus.iter().enumerate() {
                writeln!(out, "{}", title_line(index, article))?;
            }
        }
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = corpus
                .iter()
                .enumerate()
                .map(|(index, article)| {
                    serde_json::json!({
                        "number": article_number(index),
                        "title": article.title,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        }
        OutputFormat::Records => {
            writeln!(
                out,
                "H paperrec=1 records=1 mode=list articles={}",
                corpus.len()
            )?;
            for (index, article) in corpus.iter().enumerate() {
                writeln!(
                    out,
                    "A {} \"{}\"",
                    article_number(index),
                    escape_quotes(&single_line(&article.title))
                )?;
            }
        }
    }
    Ok(())
}
