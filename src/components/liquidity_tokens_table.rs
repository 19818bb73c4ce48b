//! Liquidity overview per token.
//!
//! On mount the table fetches the pair list, then the daily volumes, and
//! derives one row per catalog token. Fetches run under a `FetchPolicy`; when
//! it is exhausted the table settles in `Failed` instead of loading forever.
//!
//! Dropping a pending `mount()` leaves the table in `Loading`. The next
//! `mount()` treats that as an abandoned load and fetches again.

use crate::catalog::TokenCatalog;
use crate::core::constants::{
    APR_BOOSTER_LABEL, FEES_LABEL, TABLE_COLUMN_WIDTH, TABLE_LOADING_LABEL,
};
use crate::errors::{DashboardError, DashboardResult, RenderError};
use crate::navigation::{
    NavigationRequest, Navigator, ROUTE_LIQUIDITY_ADD_LIQUIDITY_SINGLE_SIDED,
    ROUTE_LIQUIDITY_TOKENS,
};
use crate::render::{Column, RowAction, TableRenderer, TableView};
use crate::services::{fetch_dashboard_data, DataService, FetchPolicy};
use crate::types::TokenRow;
use crate::utils::balance::human_readable_number;
use crate::utils::token_utils::{aggregate_token_rows, resolve_token_prices};
use tracing::{error, info};

/// Lifecycle of the table's data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TableState {
    /// Not mounted yet
    #[default]
    Idle,
    Loading,
    Ready(Vec<TokenRow>),
    Failed(DashboardError),
}

impl TableState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableState::Loading)
    }
}

/// Navigation for the row action: single-sided add liquidity for the token
pub fn add_liquidity_request(row: &TokenRow) -> NavigationRequest {
    NavigationRequest::new(ROUTE_LIQUIDITY_ADD_LIQUIDITY_SINGLE_SIDED)
        .with_query("token0", row.name())
        .from_route(ROUTE_LIQUIDITY_TOKENS)
}

fn usd_or_raw(usd: Option<f64>, raw: f64) -> String {
    match usd {
        Some(value) if value != 0.0 => format!("$ {}", human_readable_number(value, 2)),
        _ => human_readable_number(raw, 2),
    }
}

/// Fixed columns: name, liquidity, 24h volume, fees, APR booster, APR
pub fn token_columns() -> Vec<Column<TokenRow>> {
    vec![
        Column::new("name", TABLE_COLUMN_WIDTH, |row: &TokenRow| {
            format!("{} {}", row.token.icon, row.name())
        }),
        Column::new("liquidity", TABLE_COLUMN_WIDTH, |row: &TokenRow| {
            usd_or_raw(row.liquidity_usd, row.liquidity)
        }),
        Column::new("24h Volume", TABLE_COLUMN_WIDTH, |row: &TokenRow| {
            usd_or_raw(row.volume_24h_usd, row.volume_24h)
        }),
        Column::new("Fees", TABLE_COLUMN_WIDTH, |_: &TokenRow| {
            format!("⛽ {}", FEES_LABEL)
        }),
        Column::new("APR Booster", TABLE_COLUMN_WIDTH, |_: &TokenRow| {
            APR_BOOSTER_LABEL.to_string()
        }),
        Column::new("APR", TABLE_COLUMN_WIDTH, |row: &TokenRow| {
            format!("{:.2} %", row.apr)
        }),
    ]
}

/// Token liquidity table bound to a data service.
pub struct LiquidityTokensTable<S: DataService> {
    service: S,
    catalog: TokenCatalog,
    policy: FetchPolicy,
    state: TableState,
}

impl<S: DataService> LiquidityTokensTable<S> {
    pub fn new(service: S, catalog: TokenCatalog) -> Self {
        Self {
            service,
            catalog,
            policy: FetchPolicy::default(),
            state: TableState::Idle,
        }
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Rows once loaded
    pub fn rows(&self) -> Option<&[TokenRow]> {
        match &self.state {
            TableState::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    /// First mount: fetch and aggregate. Later calls leave a settled state
    /// as is; a load that was dropped before settling starts over.
    pub async fn mount(&mut self) -> &TableState {
        if matches!(self.state, TableState::Idle | TableState::Loading) {
            self.load().await;
        }
        &self.state
    }

    /// Fetch again regardless of the current state
    pub async fn refresh(&mut self) -> &TableState {
        self.load().await;
        &self.state
    }

    async fn load(&mut self) {
        self.state = TableState::Loading;
        self.state = match self.fetch_rows().await {
            Ok(rows) => {
                info!(rows = rows.len(), "Liquidity table ready");
                TableState::Ready(rows)
            }
            Err(err) => {
                error!(error = %err, "Liquidity table failed to load");
                TableState::Failed(err)
            }
        };
    }

    async fn fetch_rows(&self) -> DashboardResult<Vec<TokenRow>> {
        let data = fetch_dashboard_data(&self.service, &self.policy).await?;
        let prices = resolve_token_prices(&data.pairs, &self.catalog);
        Ok(aggregate_token_rows(
            &self.catalog,
            &data.pairs,
            &data.volumes,
            &prices,
        ))
    }

    /// Table description for the loaded rows
    pub fn table_view(&self) -> Option<TableView<TokenRow>> {
        let rows = self.rows()?.to_vec();
        Some(
            TableView::new(rows, token_columns())
                .with_action(RowAction::new("+", "Add liquidity", add_liquidity_request)),
        )
    }

    /// Loading indicator, error line or the table, depending on the state
    pub fn render(&self, renderer: &dyn TableRenderer) -> String {
        match &self.state {
            TableState::Idle | TableState::Loading => TABLE_LOADING_LABEL.to_string(),
            TableState::Failed(err) => format!("Failed to load liquidity data: {}", err),
            TableState::Ready(_) => self
                .table_view()
                .map(|view| view.render(renderer))
                .unwrap_or_default(),
        }
    }

    /// Run the row action for row `index`
    pub fn select_row(
        &self,
        index: usize,
        navigator: &mut dyn Navigator,
    ) -> DashboardResult<NavigationRequest> {
        let view = self.table_view().ok_or_else(|| {
            RenderError::in_component("Table is not loaded", "liquidity_tokens_table")
        })?;
        view.trigger(0, index, navigator)
    }
}
