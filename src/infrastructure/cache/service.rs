//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short URL mappings.
///
/// Implementations must be thread-safe. Operation failures are reported to the
/// caller rather than swallowed: an unreachable cache is an infrastructure
/// fault, not a miss, and masking it would hide outages from operators. A miss
/// is always `Ok(None)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short id from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Operation`] if the cache backend fails.
    async fn get_url(&self, short_id: &str) -> CacheResult<Option<String>>;

    /// Stores a URL mapping in cache.
    ///
    /// Entries are written without an explicit TTL; retention is left to the
    /// backend's configured eviction policy.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Operation`] if the cache backend fails.
    async fn set_url(&self, short_id: &str, original_url: &str) -> CacheResult<()>;

    /// Issues a liveness round-trip against the cache backend.
    ///
    /// Used by health check endpoints to report cache status.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the backend does not respond.
    async fn ping(&self) -> CacheResult<()>;
}
