//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStoreRepository`, backed by a PostgreSQL database via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! acme-stores = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! `stores` is the only table the service reads and writes. `orders`,
//! `order_items`, `payments` and `refunds` are created with their foreign
//! keys so the database matches the wider retail schema.

use crate::core::error::StorageError;
use crate::core::query::{StoreFilter, like_pattern};
use crate::core::repository::StoreRepository;
use crate::entities::Store;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

const BACKEND: &str = "PostgreSQL";

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS stores (
        store_id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id UUID PRIMARY KEY,
        store_id UUID REFERENCES stores (store_id),
        address TEXT NOT NULL,
        confirmation_date TIMESTAMPTZ NULL,
        status VARCHAR(32) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        order_item_id UUID PRIMARY KEY,
        order_id UUID REFERENCES orders (id),
        description TEXT NOT NULL,
        unit_price DOUBLE PRECISION NOT NULL,
        quantity INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS payments (
        payment_id UUID PRIMARY KEY,
        order_id UUID UNIQUE REFERENCES orders (id),
        status VARCHAR(32) NOT NULL,
        credit_card BIGINT NULL,
        payment_date TIMESTAMPTZ NULL
    )",
    "CREATE TABLE IF NOT EXISTS refunds (
        refund_id UUID PRIMARY KEY,
        type VARCHAR(32) NOT NULL,
        order_id UUID REFERENCES orders (id),
        order_item_id UUID REFERENCES order_items (order_item_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_stores_name ON stores (lower(name))",
    "CREATE INDEX IF NOT EXISTS idx_stores_address ON stores (lower(address))",
];

/// Apply the required tables and indexes (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(query_error)?;
    }
    Ok(())
}

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| StorageError::ConnectionError {
            backend: BACKEND.to_string(),
            message: e.to_string(),
        })?;
    Ok(pool)
}

fn query_error(e: sqlx::Error) -> anyhow::Error {
    StorageError::QueryError {
        backend: BACKEND.to_string(),
        message: e.to_string(),
    }
    .into()
}

/// Store repository backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use acme::storage::postgres::{self, PostgresStoreRepository};
///
/// let pool = postgres::connect("postgres://localhost/acme", 5).await?;
/// postgres::ensure_schema(&pool).await?;
/// let repo = PostgresStoreRepository::new(pool);
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    /// Create a new `PostgresStoreRepository` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(
            "SELECT store_id AS id, name, address FROM stores WHERE store_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn save(&self, store: Store) -> Result<Store> {
        let id = store.id.unwrap_or_else(Uuid::new_v4);

        sqlx::query_as::<_, Store>(
            "INSERT INTO stores (store_id, name, address) VALUES ($1, $2, $3) \
             ON CONFLICT (store_id) DO UPDATE SET name = EXCLUDED.name, address = EXCLUDED.address \
             RETURNING store_id AS id, name, address",
        )
        .bind(id)
        .bind(&store.name)
        .bind(&store.address)
        .fetch_one(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_by_filter(&self, filter: &StoreFilter) -> Result<Vec<Store>> {
        // A NULL pattern never matches, which disables that side of the OR.
        let name = filter.name().map(like_pattern);
        let address = filter.address().map(like_pattern);

        sqlx::query_as::<_, Store>(
            "SELECT store_id AS id, name, address FROM stores \
             WHERE lower(name) LIKE lower($1) ESCAPE '\\' \
                OR lower(address) LIKE lower($2) ESCAPE '\\' \
             ORDER BY created_at, store_id",
        )
        .bind(name)
        .bind(address)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }
}
