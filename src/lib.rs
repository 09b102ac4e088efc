//! # acme-stores
//!
//! A REST service managing retail **Store** records.
//!
//! ## Features
//!
//! - **Store resource**: lookup by id, case-insensitive search by name or
//!   address, create, and merge-patch update
//! - **Uniform errors**: every rejection renders as `{ "status", "message" }`
//! - **Pluggable storage**: insertion-ordered in-memory backend, PostgreSQL
//!   behind the `postgres` feature
//! - **Configuration-Based**: YAML file with environment overrides and seed data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acme::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_repository(InMemoryStoreRepository::new())
//!     .with_cors(true)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{
            AcmeError, AcmeResult, ConfigError, EntityError, ErrorBody, StorageError,
            ValidationError,
        },
        query::{StoreFilter, StoreQuery},
        repository::StoreRepository,
    };

    // === Entities ===
    pub use crate::entities::{
        Order, OrderItem, OrderStatus, Payment, PaymentStatus, Refund, RefundType, Store,
        StorePayload,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStoreRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStoreRepository;

    // === Config ===
    pub use crate::config::{
        LoggingConfig, ServerConfig, ServiceConfig, StorageBackend, StorageConfig,
    };

    // === Server ===
    pub use crate::server::{ServerBuilder, StoreAppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
