//! Mapping creation and resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::NewMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::id_generator::generate_short_id;

/// Service orchestrating `shorten` and `resolve` over the durable store and
/// the cache, implementing cache-aside semantics.
///
/// The store is authoritative: within `shorten` it is written before the cache,
/// and within `resolve` the cache is consulted before the store. There are no
/// multi-store transactions; a mapping persisted without a cache entry is
/// repopulated lazily by the next resolve.
pub struct MappingService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Creates a new short id for the given URL.
    ///
    /// The URL is stored as-is: no validation of shape, emptiness, or
    /// reachability. Generates a random 7-character id, persists the mapping,
    /// then mirrors it into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store write fails (no mapping is
    /// created and the cache is never touched). Returns [`AppError::Cache`] if
    /// the cache write fails after a successful store write; the mapping then
    /// exists in the store and is repopulated by the next resolve.
    pub async fn shorten(&self, original_url: String) -> Result<String, AppError> {
        let short_id = generate_short_id();

        let mapping = self
            .repository
            .insert(NewMapping {
                short_id,
                original_url,
            })
            .await?;

        self.cache
            .set_url(&mapping.short_id, &mapping.original_url)
            .await?;

        debug!("Shortened {} -> {}", mapping.original_url, mapping.short_id);

        Ok(mapping.short_id)
    }

    /// Resolves a short id to its original URL, cache-aside.
    ///
    /// On a cache hit the store is never consulted. On a miss the store is
    /// queried and, when the mapping exists, the cache is repopulated
    /// synchronously before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no mapping exists for the id.
    /// Returns [`AppError::Cache`] on cache read or repopulation failure; an
    /// unreachable cache is not masked as a miss. Returns [`AppError::Storage`]
    /// on store read failure.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        if let Some(original_url) = self.cache.get_url(short_id).await? {
            return Ok(original_url);
        }

        let mapping = self
            .repository
            .find_by_short_id(short_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.cache
            .set_url(&mapping.short_id, &mapping.original_url)
            .await?;

        Ok(mapping.original_url)
    }
}
