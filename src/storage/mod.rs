//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStoreRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStoreRepository;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::repository::StoreRepository;
use crate::entities::Store;
use anyhow::Result;
use std::sync::Arc;

/// Open the backend selected by the configuration
pub async fn open_repository(config: &StorageConfig) -> Result<Arc<dyn StoreRepository>> {
    match config.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryStoreRepository::new())),
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                crate::core::error::ConfigError::MissingField {
                    field: "storage.database_url".to_string(),
                    context: "postgres storage".to_string(),
                }
            })?;
            let pool = postgres::connect(url, config.max_connections).await?;
            postgres::ensure_schema(&pool).await?;
            Ok(Arc::new(PostgresStoreRepository::new(pool)))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => Err(crate::core::error::ConfigError::InvalidValue {
            field: "storage.backend".to_string(),
            value: config.backend.to_string(),
            message: "this build does not include the postgres feature".to_string(),
        }
        .into()),
    }
}

/// Save every seed record, returning how many were written
pub async fn seed(repository: &dyn StoreRepository, stores: &[Store]) -> Result<usize> {
    for store in stores {
        let saved = repository.save(store.clone()).await?;
        tracing::debug!(id = ?saved.id, name = %saved.name, "seeded store");
    }
    Ok(stores.len())
}
