//! HTTP client for the pair list and stats endpoints.

use super::DataService;
use crate::config::ServiceConfig;
use crate::errors::{DashboardResult, InvalidResponse, ServiceRequestError};
use crate::types::{PairRecord, VolumeDataset};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

/// Days of volume history requested, counted back from today
const VOLUME_WINDOW_DAYS: i64 = 2;

/// Fetches dashboard data from the live services.
#[derive(Debug, Clone)]
pub struct HttpDataService {
    client: Client,
    pairs_endpoint: String,
    stats_endpoint: String,
}

impl HttpDataService {
    /// Create a client for the given endpoints.
    ///
    /// `request_timeout` bounds each HTTP request; the fetch policy applies
    /// its own per-attempt timeout on top.
    pub fn new(
        pairs_endpoint: impl Into<String>,
        stats_endpoint: impl Into<String>,
        request_timeout: Duration,
    ) -> DashboardResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            client,
            pairs_endpoint: pairs_endpoint.into(),
            stats_endpoint: stats_endpoint.into(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> DashboardResult<Self> {
        Self::new(
            config.pairs_endpoint.clone(),
            config.stats_endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// URL and query for the daily volume window ending on `today`
    pub fn volume_request(&self, today: NaiveDate) -> (String, Vec<(&'static str, String)>) {
        let start = today - ChronoDuration::days(VOLUME_WINDOW_DAYS);
        let url = format!("{}/volume/daily", self.stats_endpoint.trim_end_matches('/'));
        let query = vec![
            ("dateStart", start.format("%Y-%m-%d").to_string()),
            ("dateEnd", today.format("%Y-%m-%d").to_string()),
        ];
        (url, query)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> DashboardResult<T> {
        debug!(url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceRequestError::with_status(
                format!("Unexpected status {}", status),
                url,
                status.as_u16(),
            )
            .into());
        }

        let body = response.text().await?;
        trace!(url, bytes = body.len(), "Received response");
        serde_json::from_str(&body)
            .map_err(|e| InvalidResponse::with_endpoint(e.to_string(), url).into())
    }
}

#[async_trait]
impl DataService for HttpDataService {
    async fn get_pair_list(&self) -> DashboardResult<Vec<PairRecord>> {
        self.get_json(&self.pairs_endpoint, &[]).await
    }

    async fn get_daily_volume(&self) -> DashboardResult<VolumeDataset> {
        let (url, query) = self.volume_request(Utc::now().date_naive());
        self.get_json(&url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_request_window() {
        let service = HttpDataService::new(
            "http://localhost/pairs",
            "http://localhost/stats/",
            Duration::from_secs(1),
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2022, 6, 3).unwrap();
        let (url, query) = service.volume_request(today);
        assert_eq!(url, "http://localhost/stats/volume/daily");
        assert_eq!(query[0], ("dateStart", "2022-06-01".to_string()));
        assert_eq!(query[1], ("dateEnd", "2022-06-03".to_string()));
    }
}
