//! Persistence contract for stores

use crate::core::query::StoreFilter;
use crate::entities::Store;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage backend for [`Store`] records
///
/// Implementations are shared across requests behind an `Arc` and must be
/// safe to call concurrently. Concurrent saves of the same record are
/// last-writer-wins.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Get a store by ID
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Store>>;

    /// Insert or replace a store.
    ///
    /// A store without an id is inserted under a freshly generated one; a
    /// store with an id replaces the record stored under it (or is inserted
    /// under that id). Returns the record as stored.
    async fn save(&self, store: Store) -> Result<Store>;

    /// Case-insensitive substring search, in insertion order
    async fn find_by_filter(&self, filter: &StoreFilter) -> Result<Vec<Store>>;
}
