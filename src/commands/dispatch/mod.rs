//! Command dispatch logic for paperrec

use std::time::Instant;

use crate::cli::Cli;
use paperrec_core::error::Result;
use tracing::debug;

mod command;

use command::{Command, CommandContext, DefaultCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        None => DefaultCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
