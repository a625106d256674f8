//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// The persistent `short_id → original_url` record.
///
/// The durable store is the source of truth for mappings; the cache only holds
/// a possibly-stale reflection. Once created, a mapping is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_id: String,
    pub original_url: String,
    /// Retained by the store for auditing; never read on the resolve path.
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_id: String,
    pub original_url: String,
}
