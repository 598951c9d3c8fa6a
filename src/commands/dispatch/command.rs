//! Command trait and context for dispatching commands

use std::io;
use std::time::Instant;

use paperrec_core::config::RecommenderConfig;
use paperrec_core::corpus::Corpus;
use paperrec_core::error::Result;
use paperrec_core::recommender::Recommender;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{config, interactive, list, recommend, show};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Effective configuration: config file (if any) with `--data` applied
    pub fn load_config(&self) -> Result<RecommenderConfig> {
        let mut config = RecommenderConfig::resolve(self.cli.config.as_deref())?;
        if let Some(data) = &self.cli.data {
            config.data_path = data.clone();
        }
        Ok(config)
    }

    /// Load the corpus without fitting the vector space
    pub fn load_corpus(&self) -> Result<Corpus> {
        let config = self.load_config()?;
        self.read_corpus(&config)
    }

    /// Load the corpus and fit the recommender once
    pub fn build_recommender(&self) -> Result<Recommender> {
        let config = self.load_config()?;
        let corpus = self.read_corpus(&config)?;
        let recommender = Recommender::build(corpus, &config)?;
        debug!(elapsed = ?self.start.elapsed(), "build_recommender");
        Ok(recommender)
    }

    fn read_corpus(&self, config: &RecommenderConfig) -> Result<Corpus> {
        let corpus = Corpus::load_csv(&config.data_path)?;
        debug!(elapsed = ?self.start.elapsed(), articles = corpus.len(), "load_corpus");
        Ok(corpus)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Runs the interactive session when no subcommand is given
pub struct DefaultCommand;

impl Command for DefaultCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let recommender = ctx.build_recommender()?;
        interactive::execute(ctx.cli, &recommender)
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut stdout = io::stdout().lock();
        match self {
            Commands::Interactive => DefaultCommand.execute(ctx),
            Commands::Recommend { number } => {
                let recommender = ctx.build_recommender()?;
                recommend::execute(&mut stdout, ctx.cli, &recommender, number)
            }
            Commands::Show { number } => {
                let corpus = ctx.load_corpus()?;
                show::execute(&mut stdout, ctx.cli, &corpus, number)
            }
            Commands::List => {
                let corpus = ctx.load_corpus()?;
                list::execute(&mut stdout, ctx.cli, &corpus)
            }
            Commands::Config => {
                let config = ctx.load_config()?;
                config::execute(&mut stdout, &config)
            }
        }
    }
}
