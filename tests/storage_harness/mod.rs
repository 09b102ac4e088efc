//! Shared test harness for store repository backends
//!
//! Provides the fixture stores used across the suites and two macros that
//! any backend can invoke:
//!
//! - `store_repository_tests!` checks the `StoreRepository` contract directly
//! - `store_rest_tests!` drives the same backend through the HTTP layer
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! store_repository_tests!(InMemoryStoreRepository::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;
#[macro_use]
pub mod rest_tests;

use acme::core::repository::StoreRepository;
use acme::entities::Store;
use uuid::Uuid;

/// Id of the Aracaju fixture
pub const ARACAJU_ID: &str = "00acc00e-2745-4ffe-b2be-2c461278ba3e";

/// Id of the Vitória fixture
pub const VITORIA_ID: &str = "49fc24c8-d7e9-4b82-9bb9-cf476877a081";

/// An id no fixture uses
pub const UNKNOWN_ID: &str = "227a9218-214d-43df-a511-58d7e84d7ed2";

pub fn parse_uuid(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap()
}

pub fn aracaju() -> Store {
    Store::with_id(parse_uuid(ARACAJU_ID), "Aracaju", "Centro, Aracaju/SE")
}

pub fn vitoria() -> Store {
    Store::with_id(parse_uuid(VITORIA_ID), "Vitória", "Praia do Canto, Vitória/ES")
}

/// Save both fixtures, Aracaju first
pub async fn seed_fixtures(repository: &dyn StoreRepository) {
    repository.save(aracaju()).await.unwrap();
    repository.save(vitoria()).await.unwrap();
}
