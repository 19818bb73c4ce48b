//! In-memory data service backed by fixed data.

use super::DataService;
use crate::errors::{DashboardResult, ServiceRequestError};
use crate::types::{PairRecord, VolumeDataset};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// On-disk fixture format: `{"pairs": [...], "volumes": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardFixture {
    pub pairs: Vec<PairRecord>,
    #[serde(default)]
    pub volumes: VolumeDataset,
}

/// Serves a fixed pair list and volume dataset.
///
/// Calls are recorded in order so callers can check which requests were
/// issued. A service can also be told to fail every request, or to answer
/// each one only after a fixed delay.
#[derive(Debug, Default)]
pub struct StaticDataService {
    fixture: DashboardFixture,
    failing: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<&'static str>>,
}

impl StaticDataService {
    pub fn new(pairs: Vec<PairRecord>, volumes: VolumeDataset) -> Self {
        Self::from_fixture(DashboardFixture { pairs, volumes })
    }

    pub fn from_fixture(fixture: DashboardFixture) -> Self {
        Self {
            fixture,
            failing: false,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A service whose every request fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Answer every request only after `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Load a JSON fixture file
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let fixture: DashboardFixture = serde_json::from_str(&contents)?;
        debug!(path = %path.as_ref().display(), pairs = fixture.pairs.len(), "Loaded fixture");
        Ok(Self::from_fixture(fixture))
    }

    /// Requests served so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    async fn record(&self, call: &'static str) -> DashboardResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(ServiceRequestError::with_endpoint("Service unavailable", call).into());
        }
        Ok(())
    }
}

#[async_trait]
impl DataService for StaticDataService {
    async fn get_pair_list(&self) -> DashboardResult<Vec<PairRecord>> {
        self.record("pair_list").await?;
        Ok(self.fixture.pairs.clone())
    }

    async fn get_daily_volume(&self) -> DashboardResult<VolumeDataset> {
        self.record("daily_volume").await?;
        Ok(self.fixture.volumes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let service = StaticDataService::new(
            vec![PairRecord::new("KDA", "KDX", [1.0, 2.0])],
            VolumeDataset::default(),
        );
        assert_eq!(service.get_pair_list().await.unwrap().len(), 1);
        assert!(service.get_daily_volume().await.unwrap().is_empty());
        assert_eq!(service.calls(), vec!["pair_list", "daily_volume"]);
    }

    #[tokio::test]
    async fn test_failing_service() {
        let service = StaticDataService::failing();
        let err = service.get_pair_list().await.unwrap_err();
        assert!(err.is_service_error());
    }

    #[tokio::test]
    async fn test_delayed_service_answers_late() {
        let service = StaticDataService::new(vec![], VolumeDataset::default())
            .with_delay(Duration::from_millis(500));
        let early = tokio::time::timeout(Duration::from_millis(20), service.get_pair_list()).await;
        assert!(early.is_err());
        // The request is recorded even though it never answered
        assert_eq!(service.calls(), vec!["pair_list"]);
    }

    #[test]
    fn test_load_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pairs":[{{"token0":"KDA","token1":"KDX","reserves":[10,20]}}],"volumes":[]}}"#
        )
        .unwrap();
        let service = StaticDataService::load(file.path()).unwrap();
        assert_eq!(service.fixture.pairs[0].token1, "KDX");
    }
}
