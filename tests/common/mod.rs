#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use shortlink::api::handlers::{
    health_handler, liveness_handler, readiness_handler, redirect_handler, shorten_handler,
};
use shortlink::application::services::{HealthService, MappingService};
use shortlink::domain::entities::{Mapping, NewMapping};
use shortlink::domain::repositories::UrlRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheError, CacheResult, CacheService};
use shortlink::state::AppState;

/// In-memory durable store double.
///
/// Counts `find_by_short_id` calls so tests can assert that cache hits never
/// reach the store. Can be switched into a failing mode to exercise the
/// `Storage` error paths.
pub struct MemoryRepository {
    mappings: Mutex<HashMap<String, Mapping>>,
    lookups: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            mappings: Mutex::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        })
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn contains(&self, short_id: &str) -> bool {
        self.mappings.lock().unwrap().contains_key(short_id)
    }

    fn check_failing(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("store is down"));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for MemoryRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        self.check_failing()?;

        let mut mappings = self.mappings.lock().unwrap();
        if mappings.contains_key(&new_mapping.short_id) {
            return Err(AppError::storage("duplicate key value"));
        }

        let mapping = Mapping::new(new_mapping.short_id, new_mapping.original_url, Utc::now());
        mappings.insert(mapping.short_id.clone(), mapping.clone());
        Ok(mapping)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;

        Ok(self.mappings.lock().unwrap().get(short_id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_failing()
    }
}

/// In-memory cache double with eviction and failure controls.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(HashMap::new()),
            failing: AtomicBool::new(false),
        })
    }

    pub fn contains(&self, short_id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(short_id)
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::Connection("cache is down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_id: &str) -> CacheResult<Option<String>> {
        self.check_failing()?;
        Ok(self.entries.lock().unwrap().get(short_id).cloned())
    }

    async fn set_url(&self, short_id: &str, original_url: &str) -> CacheResult<()> {
        self.check_failing()?;
        self.entries
            .lock()
            .unwrap()
            .insert(short_id.to_string(), original_url.to_string());
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        self.check_failing()
    }
}

pub fn create_test_state(
    repository: Arc<MemoryRepository>,
    cache: Arc<MemoryCache>,
) -> AppState {
    let mapping_service = Arc::new(MappingService::new(repository.clone(), cache.clone()));
    let health_service = Arc::new(HealthService::new(repository, cache));

    AppState::new(mapping_service, health_service)
}

/// Router with the full route table, minus outer middleware.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/health/liveness", get(liveness_handler))
        .route("/health/readiness", get(readiness_handler))
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
}
