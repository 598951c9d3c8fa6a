//! `paperrec recommend <number>` - one-shot recommendation for an article

use std::io::Write;

use paperrec_core::error::Result;
use paperrec_core::recommender::Recommender;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::format::write_recommendation;
use crate::commands::interactive::selection::require_article;

/// Execute the recommend command
pub fn execute<W: Write>(
    out: &mut W,
    cli: &Cli,
    recommender: &Recommender,
    number: &str,
) -> Result<()> {
    let index = require_article(number, recommender.corpus().len())?;
    let recommendation = recommender.recommend(index)?;
    debug!(index, "recommend");
    write_recommendation(out, cli.format, recommender, &recommendation)
}
