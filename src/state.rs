//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{HealthService, MappingService};

/// Handler-visible application state.
///
/// Services own the store and cache client handles; they are constructed once
/// at startup in [`crate::server::run`] and shared via `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(mapping_service: Arc<MappingService>, health_service: Arc<HealthService>) -> Self {
        Self {
            mapping_service,
            health_service,
        }
    }
}
