//! Kaddex dashboard binary entrypoint.
//!
//! Renders the liquidity table, proposal vote results and volume chart in
//! the terminal.

use clap::Parser;
use kaddex_dashboard::cli::{self, Cli};
use kaddex_dashboard::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, rendered output to stdout
    init_logging(&cli.logging_config());

    cli::run_with(cli).await
}
