//! Data-access contract for content resources, plus an in-memory reference
//! implementation.
//!
//! Handlers consume content through the narrow [`ContentStore`] trait and
//! distinguish failures only into "not found" and "everything else"; a real
//! deployment plugs in a database-backed implementation behind the same
//! trait.

pub mod memory;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::MemoryStore;

/// Failure modes a store can report.
///
/// Handlers map `NotFound` to 404 and any `Backend` failure to a sanitized
/// 500; no other distinction crosses the trait boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{resource} with id {id} not found")]
    NotFound { resource: String, id: String },

    #[error("storage failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

/// CRUD access to a named content collection.
///
/// `resource` selects the collection (e.g. `"articles"`); items are
/// schemaless JSON objects carrying an `id` field assigned on creation.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// One page of items plus the total count across all pages.
    ///
    /// `page` is 1-based; an out-of-range page yields an empty item list
    /// with the true total, never an error.
    async fn list(
        &self,
        resource: &str,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Value>, u64), StoreError>;

    async fn get(&self, resource: &str, id: &str) -> Result<Value, StoreError>;

    async fn create(&self, resource: &str, dto: Value) -> Result<Value, StoreError>;

    async fn update(&self, resource: &str, id: &str, dto: Value) -> Result<Value, StoreError>;

    async fn delete(&self, resource: &str, id: &str) -> Result<(), StoreError>;
}
