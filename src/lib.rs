//! Kaddex dashboard view-models
//!
//! Three independent components, each a plain Rust value that can be
//! rendered to the terminal:
//!
//! - [`VoteResultsContainer`]: Yes/No vote controls with tally bars
//! - [`LiquidityTokensTable`]: liquidity, volume and APR per token, fetched
//!   from a [`DataService`]
//! - [`StackedBarChart`]: one horizontal bar split into named shares

pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod navigation;
pub mod render;
pub mod services;
pub mod session;
pub mod types;
pub mod utils;

pub use catalog::{default_catalog, TokenCatalog};
pub use config::{Config, DisplayConfig, ServiceConfig};

pub use components::{
    LiquidityTokensTable, StackedBarChart, TableState, Tooltip, VoteHandler, VoteResultsContainer,
    VoteSide,
};

pub use logging::{
    init_default_logging, init_logging, is_initialized, CompactFormatter, DashboardFormatter,
    LogFormat, LoggingConfig,
};

pub use navigation::{HistoryNavigator, NavigationRequest, Navigator};

pub use services::{
    fetch_dashboard_data, fetch_with_policy, DashboardData, DataService, FetchPolicy,
    HttpDataService, StaticDataService,
};

pub use session::{Account, AccountSession};

pub use types::*;

pub use utils::balance::{human_readable_number, reduce_balance, PactDecimal};
pub use utils::token_utils::{
    aggregate_token_rows, compute_apr, get_all_pair_values, get_token_usd_price,
    resolve_token_prices, PairValues, TokenPrices,
};

// Re-export error types
pub use errors::{
    CatalogError, DashboardError, DashboardResult, InvalidAccount, InvalidResponse, RenderError,
    ServiceRequestError, ServiceTimeout, VoteDisabled,
};
