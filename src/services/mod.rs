//! External data services consumed by the liquidity components.
//!
//! The dashboard needs two datasets: the pair list (reserves per pair) and
//! the daily swap volumes. `DataService` abstracts where they come from;
//! `HttpDataService` talks to the live endpoints and `StaticDataService`
//! serves fixed data for fixtures and tests. Fetches go through
//! `fetch_with_policy`, which adds a per-attempt timeout and bounded
//! exponential-backoff retries.

pub mod fixture;
pub mod http;
pub mod policy;

use crate::errors::DashboardResult;
use crate::types::{PairRecord, VolumeDataset};
use async_trait::async_trait;

pub use fixture::{DashboardFixture, StaticDataService};
pub use http::HttpDataService;
pub use policy::{fetch_dashboard_data, fetch_with_policy, DashboardData, FetchPolicy};

/// Source of pair and volume data.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Every liquidity pair with its current reserves
    async fn get_pair_list(&self) -> DashboardResult<Vec<PairRecord>>;

    /// Daily swap volumes covering at least the last day
    async fn get_daily_volume(&self) -> DashboardResult<VolumeDataset>;
}
