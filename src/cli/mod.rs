//! Terminal front end for the Kaddex dashboard (`kdxdash`)
//!
//! # Commands
//!
//! - `tokens` - Liquidity table per token, from the live services or a fixture
//! - `vote` - Proposal vote results and the Yes/No controls
//! - `chart` - Stacked bar chart of volume shares

use crate::logging::{LogFormat, LoggingConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod utils;

/// Kaddex dashboard CLI
#[derive(Parser)]
#[command(name = "kdxdash")]
#[command(version)]
#[command(about = "Kaddex liquidity and governance dashboard", long_about = None)]
#[command(after_help = concat!("Source: ", env!("CARGO_PKG_REPOSITORY")))]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Network to read from (mainnet, testnet, local)
    #[arg(short, long, global = true)]
    pub network: Option<String>,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log format (text, json, compact)
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Logging settings from the environment, raised by `--debug`
    pub fn logging_config(&self) -> LoggingConfig {
        let config = LoggingConfig::from_env().with_format(self.log_format);
        if self.debug {
            config.with_debug(true)
        } else {
            config
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Liquidity per token
    #[command(alias = "t")]
    Tokens(commands::tokens::TokensCommand),

    /// Proposal vote results
    #[command(alias = "v")]
    Vote(commands::vote::VoteCommand),

    /// Stacked volume chart
    #[command(alias = "c")]
    Chart(commands::chart::ChartCommand),
}

/// Run an already parsed command line
pub async fn run_with(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Tokens(cmd) => commands::tokens::execute(cmd.clone(), &cli).await,
        Commands::Vote(cmd) => commands::vote::execute(cmd.clone(), &cli).await,
        Commands::Chart(cmd) => commands::chart::execute(cmd.clone(), &cli).await,
    }
}

/// Parse the process arguments and run the CLI application
pub async fn run() -> anyhow::Result<()> {
    run_with(Cli::parse()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["kdxdash", "vote", "--approved", "3", "--debug", "--log-format", "json"]);
        assert!(cli.debug);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.logging_config().debug);
        assert!(matches!(cli.command, Commands::Vote(_)));
    }

    #[test]
    fn test_help_links_repository() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("https://github.com/kaddex/kaddex-dashboard"));
        assert!(include_str!("../../README.md").contains("kdxdash tokens"));
    }

    #[test]
    fn test_rejects_bad_log_format() {
        assert!(Cli::try_parse_from(["kdxdash", "--log-format", "xml", "tokens"]).is_err());
    }
}
