//! `paperrec list` - every article number and title

use std::io::Write;

use paperrec_core::corpus::Corpus;
use paperrec_core::error::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::write_list;

/// Execute the list command
pub fn execute<W: Write>(out: &mut W, cli: &Cli, corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() && cli.format == OutputFormat::Human {
        if !cli.quiet {
            writeln!(out, "No articles found")?;
        }
        return Ok(());
    }
    write_list(out, cli.format, corpus)
}
