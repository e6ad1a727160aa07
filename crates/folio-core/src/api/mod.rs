//! Api shim over the profile store
//!
//! Front ends talk to a [`PortfolioApi`] rather than the store directly.
//! The bundled [`SimulatedApi`] answers from an in-process
//! [`ProfileStore`] after a configurable delay, so a front end can exercise
//! its loading states. The delay is a property of this boundary only; the
//! store itself is synchronous.

pub mod health;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::Result;
use crate::config::{Config, LatencyConfig};
use crate::profile::{Profile, Project};
use crate::search::SearchResult;
use crate::store::{ProfileStore, SkillFilter, SkillUsage};

pub use health::{ApiStatus, HealthProbe, HealthReport, HealthStatus};

/// Async query surface consumed by front ends
///
/// Implementations return owned values so results can cross task
/// boundaries.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Liveness check for the status indicator
    async fn check_health(&self) -> Result<HealthReport>;

    /// The full profile
    async fn get_profile(&self) -> Result<Profile>;

    /// Projects passing a skill filter, in profile order
    async fn get_projects_by_skill(&self, filter: &SkillFilter) -> Result<Vec<Project>>;

    /// Skills ranked by project usage
    async fn get_top_skills(&self) -> Result<Vec<SkillUsage>>;

    /// Keyword search
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// In-process api with simulated latency
#[derive(Debug, Clone)]
pub struct SimulatedApi {
    store: Arc<ProfileStore>,
    latency: LatencyConfig,
    started: Instant,
}

impl SimulatedApi {
    /// Create an api over `store` with default latency
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            latency: LatencyConfig::default(),
            started: Instant::now(),
        }
    }

    /// Create an api over the bundled profile using configured latency
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(ProfileStore::default())).with_latency(config.latency.clone())
    }

    /// Replace the latency settings
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// The store behind this api
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Time since this api was created
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    async fn pause(&self, ms: u64) {
        let delay = self.latency.delay(ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PortfolioApi for SimulatedApi {
    async fn check_health(&self) -> Result<HealthReport> {
        self.pause(self.latency.health_ms).await;
        Ok(HealthReport::healthy(self.uptime()))
    }

    async fn get_profile(&self) -> Result<Profile> {
        self.pause(self.latency.profile_ms).await;
        debug!("get_profile");
        Ok(self.store.get_profile().clone())
    }

    async fn get_projects_by_skill(&self, filter: &SkillFilter) -> Result<Vec<Project>> {
        self.pause(self.latency.projects_ms).await;
        Ok(self
            .store
            .get_projects_by_skill(filter)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_top_skills(&self) -> Result<Vec<SkillUsage>> {
        self.pause(self.latency.top_skills_ms).await;
        Ok(self.store.get_top_skills())
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.pause(self.latency.search_ms).await;
        Ok(self.store.search(query))
    }
}
