//! Timeout and retry policy for data fetches.

use super::DataService;
use crate::config::ServiceConfig;
use crate::core::constants::{
    DEFAULT_MAX_FETCH_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, INITIAL_RETRY_DELAY_MS,
};
use crate::errors::{DashboardError, DashboardResult, ServiceTimeout};
use crate::types::{PairRecord, VolumeDataset};
use backoff::{future::retry, Error as BackoffError, ExponentialBackoffBuilder};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long to wait for each attempt and how hard to retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchPolicy {
    /// Upper bound for a single attempt
    pub attempt_timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// First backoff delay; later delays grow exponentially
    pub initial_interval: Duration,
    /// Stop retrying once this much time has passed
    pub max_elapsed: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: 3,
            initial_interval: Duration::from_millis(INITIAL_RETRY_DELAY_MS),
            max_elapsed: Duration::from_secs(DEFAULT_MAX_FETCH_SECS),
        }
    }
}

impl FetchPolicy {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            attempt_timeout: Duration::from_secs(config.request_timeout_secs),
            max_retries: config.max_retries,
            max_elapsed: Duration::from_secs(config.max_fetch_secs),
            ..Default::default()
        }
    }

    /// Single attempt, no retries
    pub fn no_retry(attempt_timeout: Duration) -> Self {
        Self {
            attempt_timeout,
            max_retries: 0,
            ..Default::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }
}

/// Run `operation` under `policy`.
///
/// Each attempt is bounded by `attempt_timeout`. Timeouts and retryable
/// service errors are retried with exponential backoff until `max_retries`
/// or `max_elapsed` is exhausted; other errors fail immediately.
pub async fn fetch_with_policy<T, F, Fut>(
    step: &str,
    policy: &FetchPolicy,
    mut operation: F,
) -> DashboardResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DashboardResult<T>>,
{
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_interval(policy.initial_interval)
        .with_max_elapsed_time(Some(policy.max_elapsed))
        .build();

    let mut attempt: u32 = 0;
    let timeout = policy.attempt_timeout;
    let max_retries = policy.max_retries;

    retry(backoff, || {
        attempt += 1;
        let current = attempt;
        let pending = operation();
        async move {
            debug!(step, attempt = current, "Fetching");
            let err = match tokio::time::timeout(timeout, pending).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(err)) => err,
                Err(_) => DashboardError::from(ServiceTimeout::for_step(
                    format!("No response within {:?}", timeout),
                    step,
                    timeout.as_secs_f64(),
                )),
            };

            if !err.is_retryable() || current > max_retries {
                warn!(step, attempt = current, error = %err, "Fetch failed");
                return Err(BackoffError::permanent(err));
            }
            warn!(step, attempt = current, error = %err, "Fetch failed, retrying");
            Err(BackoffError::transient(err))
        }
    })
    .await
}

/// Pair list and volume dataset fetched for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub pairs: Vec<PairRecord>,
    pub volumes: VolumeDataset,
}

/// Fetch the pair list, then the volumes; the second call only starts after
/// the first one succeeded.
pub async fn fetch_dashboard_data<S>(service: &S, policy: &FetchPolicy) -> DashboardResult<DashboardData>
where
    S: DataService + ?Sized,
{
    let pairs = fetch_with_policy("pair list", policy, || service.get_pair_list()).await?;
    let volumes = fetch_with_policy("daily volume", policy, || service.get_daily_volume()).await?;
    info!(
        pairs = pairs.len(),
        days = volumes.days.len(),
        "Fetched dashboard data"
    );
    Ok(DashboardData { pairs, volumes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ServiceRequestError, VoteDisabled};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(retries: u32) -> FetchPolicy {
        FetchPolicy::no_retry(Duration::from_millis(200))
            .with_max_retries(retries)
            .with_initial_interval(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = AtomicU32::new(0);
        let result = fetch_with_policy("test", &fast(3), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(DashboardError::from(ServiceRequestError::new("flaky")))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result: DashboardResult<()> = fetch_with_policy("test", &fast(2), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(DashboardError::from(ServiceRequestError::new("down"))) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_not_retried() {
        let calls = AtomicU32::new(0);
        let result: DashboardResult<()> = fetch_with_policy("test", &fast(5), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(DashboardError::from(VoteDisabled::new("not a service error"))) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_attempt_timeout() {
        let policy = FetchPolicy::no_retry(Duration::from_millis(20));
        let result: DashboardResult<()> = fetch_with_policy("slow", &policy, || async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(result.unwrap_err().is_timeout());
    }
}
