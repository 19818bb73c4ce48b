//! Liquidity table command.

use crate::catalog::{default_catalog, TokenCatalog};
use crate::cli::utils::{print_error, print_info, print_success, resolve_config, spinner};
use crate::cli::Cli;
use crate::components::{LiquidityTokensTable, TableState};
use crate::core::constants::TABLE_LOADING_LABEL;
use crate::navigation::HistoryNavigator;
use crate::render::TerminalTableRenderer;
use crate::services::{DataService, FetchPolicy, HttpDataService, StaticDataService};
use clap::Args;
use std::path::PathBuf;

/// Show liquidity, volume and APR per token
#[derive(Args, Clone)]
pub struct TokensCommand {
    /// Read pairs and volumes from a JSON fixture instead of the network
    #[arg(short, long)]
    pub fixture: Option<PathBuf>,

    /// Token catalog JSON (defaults to the built-in list)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Override the pair list endpoint
    #[arg(long)]
    pub pairs_url: Option<String>,

    /// Override the stats endpoint
    #[arg(long)]
    pub stats_url: Option<String>,

    /// Trigger the add-liquidity action on this row (0-based)
    #[arg(short, long)]
    pub select: Option<usize>,
}

/// Execute the tokens command
pub async fn execute(cmd: TokensCommand, cli: &Cli) -> anyhow::Result<()> {
    let mut config = resolve_config(cli)?;
    if let Some(url) = &cmd.pairs_url {
        config = config.with_pairs_endpoint(url);
    }
    if let Some(url) = &cmd.stats_url {
        config = config.with_stats_endpoint(url);
    }

    let catalog = match &cmd.catalog {
        Some(path) => TokenCatalog::load(path)?,
        None => default_catalog(),
    };
    let policy = config.fetch_policy();

    match &cmd.fixture {
        Some(path) => {
            let service = StaticDataService::load(path)?;
            show_table(service, catalog, policy, cmd.select).await
        }
        None => {
            let service = HttpDataService::from_config(&config.services)?;
            show_table(service, catalog, policy, cmd.select).await
        }
    }
}

async fn show_table<S: DataService>(
    service: S,
    catalog: TokenCatalog,
    policy: FetchPolicy,
    select: Option<usize>,
) -> anyhow::Result<()> {
    let mut table = LiquidityTokensTable::new(service, catalog).with_policy(policy);

    let pb = spinner(TABLE_LOADING_LABEL);
    let state = table.mount().await.clone();
    pb.finish_and_clear();

    if let TableState::Failed(err) = state {
        print_error(&format!("Failed to load liquidity data: {}", err));
        return Err(err.into());
    }

    if table.rows().is_some_and(|rows| rows.is_empty()) {
        print_info("No tokens listed");
    }
    println!("{}", table.render(&TerminalTableRenderer));

    if let Some(index) = select {
        let mut navigator = HistoryNavigator::new();
        let request = table.select_row(index, &mut navigator)?;
        print_success(&format!("Navigate to {}", request.href()));
    }

    Ok(())
}
