//! `paperrec show <number>` - display one article

use std::io::Write;

use paperrec_core::corpus::Corpus;
use paperrec_core::error::{RecommendError, Result};

use crate::cli::Cli;
use crate::commands::format::write_article;
use crate::commands::interactive::selection::require_article;

/// Execute the show command
pub fn execute<W: Write>(out: &mut W, cli: &Cli, corpus: &Corpus, number: &str) -> Result<()> {
    let index = require_article(number, corpus.len())?;
    let article = corpus.get(index).ok_or(RecommendError::InvalidSelection {
        index,
        len: corpus.len(),
    })?;
    write_article(out, cli.format, index, article)
}
