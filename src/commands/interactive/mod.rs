//! `paperrec interactive` - pick articles by number until `-1` or end of input
//!
//! One selection is fully answered before the next line is read. Prompts and
//! the banner are shown only in human format; in json/records formats the
//! status messages go to stderr so stdout stays machine-readable.

pub mod selection;

use std::io::{self, BufRead, Write};

use colored::Colorize;
use paperrec_core::error::Result;
use paperrec_core::recommender::Recommender;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::write_recommendation;
use selection::{parse_selection, Selection};

const RULE: &str = "==============================================================";

/// Execute the interactive session on stdin/stdout
pub fn execute(cli: &Cli, recommender: &Recommender) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(recommender, cli.format, cli.quiet, stdin.lock(), &mut out)
}

/// Read selections from `input` and answer each on `out`
pub fn run_session<R: BufRead, W: Write>(
    recommender: &Recommender,
    format: OutputFormat,
    quiet: bool,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let human = format == OutputFormat::Human;
    let len = recommender.corpus().len();

    if human && !quiet {
        write_banner(out, len)?;
    }

    let mut buf = Vec::new();
    loop {
        if human {
            write!(out, "\nPick an article:\n    > ")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            break;
        }

        // Undecodable bytes become U+FFFD, which never parses as a number
        let line = String::from_utf8_lossy(&buf);
        let selection = parse_selection(&line, len);
        debug!(?selection, "selection");

        match selection {
            Selection::Article(index) => {
                let recommendation = recommender.recommend(index)?;
                write_recommendation(out, format, recommender, &recommendation)?;
            }
            other => {
                if let Some(message) = other.message(len) {
                    if human {
                        writeln!(out)?;
                        writeln!(out, "{}", message)?;
                    } else if !quiet {
                        eprintln!("{}", message);
                    }
                }
                if other == Selection::Exit {
                    break;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, len: usize) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "{}",
        format!("Loaded {} articles from cool computer scientists", len).blue()
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "The numbers before each title indicate the article ID.")?;
    writeln!(
        out,
        "You can type the id to get the abstract details of the article."
    )?;
    writeln!(
        out,
        "You can also enter '-1' to exit the recommender system whenever you want."
    )?;
    Ok(())
}
