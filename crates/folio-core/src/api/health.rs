//! Health API
//!
//! Liveness reporting for the status indicator. Nothing here affects query
//! results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::PortfolioApi;

/// Health status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Result of a health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// Time since the api started, as "{h}h {m}m"
    pub uptime: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
}

impl HealthReport {
    /// A healthy report stamped with the current time
    pub fn healthy(uptime: Duration) -> Self {
        Self {
            status: HealthStatus::Healthy,
            uptime: format_uptime(uptime),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Format a duration as whole hours and minutes
pub fn format_uptime(uptime: Duration) -> String {
    let minutes = uptime.as_secs() / 60;
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// What the status indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// No probe has completed yet
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Checking",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Periodic liveness probe
pub struct HealthProbe {
    api: Arc<dyn PortfolioApi>,
    interval: Duration,
}

impl HealthProbe {
    pub fn new(api: Arc<dyn PortfolioApi>, interval: Duration) -> Self {
        Self { api, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run one check; any failed call reads as offline
    pub async fn probe(&self) -> ApiStatus {
        match self.api.check_health().await {
            Ok(report) => {
                debug!(uptime = %report.uptime, "health probe ok");
                ApiStatus::Online
            }
            Err(e) => {
                warn!(error = %e, "health probe failed");
                ApiStatus::Offline
            }
        }
    }

    /// Probe immediately and then once per interval, publishing each result
    ///
    /// The task ends when every receiver has been dropped. A zero interval
    /// is treated as one second.
    pub fn spawn(self) -> (watch::Receiver<ApiStatus>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(ApiStatus::Unknown);
        let period = self.interval.max(Duration::from_secs(1));
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let status = self.probe().await;
                if tx.send(status).is_err() {
                    break;
                }
            }
        });
        (rx, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SimulatedApi;
    use crate::config::LatencyConfig;
    use crate::error::{Error, Result};
    use crate::profile::{Profile, Project};
    use crate::search::SearchResult;
    use crate::store::{ProfileStore, SkillFilter, SkillUsage};
    use async_trait::async_trait;

    struct DownApi;

    #[async_trait]
    impl PortfolioApi for DownApi {
        async fn check_health(&self) -> Result<HealthReport> {
            Err(Error::ApiUnavailable("connection refused".to_string()))
        }
        async fn get_profile(&self) -> Result<Profile> {
            Err(Error::ApiUnavailable("connection refused".to_string()))
        }
        async fn get_projects_by_skill(&self, _filter: &SkillFilter) -> Result<Vec<Project>> {
            Err(Error::ApiUnavailable("connection refused".to_string()))
        }
        async fn get_top_skills(&self) -> Result<Vec<SkillUsage>> {
            Err(Error::ApiUnavailable("connection refused".to_string()))
        }
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>> {
            Err(Error::ApiUnavailable("connection refused".to_string()))
        }
    }

    fn up_api() -> Arc<dyn PortfolioApi> {
        Arc::new(
            SimulatedApi::new(Arc::new(ProfileStore::default()))
                .with_latency(LatencyConfig::disabled()),
        )
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0h 0m");
        assert_eq!(format_uptime(Duration::from_secs(59)), "0h 0m");
        assert_eq!(
            format_uptime(Duration::from_secs(12 * 3600 + 34 * 60 + 5)),
            "12h 34m"
        );
    }

    #[test]
    fn test_healthy_report_fields() {
        let report = HealthReport::healthy(Duration::from_secs(3600));
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.uptime, "1h 0m");
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "healthy");
    }

    #[test]
    fn test_api_status_labels() {
        assert_eq!(ApiStatus::default().label(), "Checking");
        assert_eq!(ApiStatus::Online.to_string(), "Online");
        assert_eq!(ApiStatus::Offline.to_string(), "Offline");
    }

    #[tokio::test]
    async fn test_probe_online_and_offline() {
        let probe = HealthProbe::new(up_api(), Duration::from_secs(30));
        assert_eq!(probe.probe().await, ApiStatus::Online);

        let probe = HealthProbe::new(Arc::new(DownApi), Duration::from_secs(30));
        assert_eq!(probe.probe().await, ApiStatus::Offline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_probe_publishes_and_stops() {
        let probe = HealthProbe::new(Arc::new(DownApi), Duration::from_secs(30));
        let (mut rx, handle) = probe.spawn();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ApiStatus::Offline);

        drop(rx);
        // Next tick fails to publish and the task exits
        tokio::time::advance(Duration::from_secs(31)).await;
        handle.await.unwrap();
    }
}
