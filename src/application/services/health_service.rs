//! Health probing for the durable store and the cache.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Probe outcome for a single backing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Connected,
    Error(String),
}

impl ServiceStatus {
    /// Wire representation used by the health endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Error(_) => "error",
        }
    }
}

/// Aggregate result of probing both backing services.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub database: ServiceStatus,
    pub redis: ServiceStatus,
}

impl HealthReport {
    /// True only when both probes succeeded.
    pub fn healthy(&self) -> bool {
        self.database == ServiceStatus::Connected && self.redis == ServiceStatus::Connected
    }

    /// Message of the first failed probe, database first.
    pub fn first_error(&self) -> Option<&str> {
        for status in [&self.database, &self.redis] {
            if let ServiceStatus::Error(message) = status {
                return Some(message.as_str());
            }
        }
        None
    }
}

/// Probes store and cache connectivity for the health endpoints.
///
/// Probes are read-only and never propagate errors: every failure is converted
/// into a [`ServiceStatus::Error`] carrying the triggering message.
pub struct HealthService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl HealthService {
    /// Creates a new health service.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Probes both backing services and reports each outcome individually.
    ///
    /// The database probe is a no-op query (`SELECT 1`), the cache probe a
    /// `PING`. Both run even when the first fails, so a degraded response
    /// names exactly the services that are down.
    pub async fn report(&self) -> HealthReport {
        let database = match self.repository.ping().await {
            Ok(()) => ServiceStatus::Connected,
            Err(e) => ServiceStatus::Error(e.to_string()),
        };

        let redis = match self.cache.ping().await {
            Ok(()) => ServiceStatus::Connected,
            Err(e) => ServiceStatus::Error(e.to_string()),
        };

        HealthReport { database, redis }
    }
}
