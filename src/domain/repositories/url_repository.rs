//! Repository trait for URL mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the authoritative mapping store.
///
/// The store owns the `short_id` uniqueness invariant; there are no update or
/// delete operations because mappings are immutable once created.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors, including a unique-key
    /// violation when the generated short id collides with an existing one.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError>;

    /// Issues a trivial round-trip query to verify store connectivity.
    ///
    /// Used by health and readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
