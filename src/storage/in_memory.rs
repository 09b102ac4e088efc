//! In-memory implementation of StoreRepository for testing and development

use crate::core::error::StorageError;
use crate::core::query::StoreFilter;
use crate::core::repository::StoreRepository;
use crate::entities::Store;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory store repository
///
/// Records keep their insertion position when replaced, so searches return
/// stores in the order they were first saved. Uses RwLock for thread-safe
/// access.
#[derive(Clone)]
pub struct InMemoryStoreRepository {
    stores: Arc<RwLock<IndexMap<Uuid, Store>>>,
}

impl InMemoryStoreRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            stores: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.read().map(|stores| stores.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<Uuid, Store>>> {
        self.stores.read().map_err(|_| {
            StorageError::Unavailable {
                backend: BACKEND.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<Uuid, Store>>> {
        self.stores.write().map_err(|_| {
            StorageError::Unavailable {
                backend: BACKEND.to_string(),
            }
            .into()
        })
    }
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Store>> {
        let stores = self.read()?;
        Ok(stores.get(id).cloned())
    }

    async fn save(&self, mut store: Store) -> Result<Store> {
        let id = *store.id.get_or_insert_with(Uuid::new_v4);
        let mut stores = self.write()?;
        stores.insert(id, store.clone());
        Ok(store)
    }

    async fn find_by_filter(&self, filter: &StoreFilter) -> Result<Vec<Store>> {
        let stores = self.read()?;
        Ok(stores
            .values()
            .filter(|store| filter.matches(store))
            .cloned()
            .collect())
    }
}
