//! Core module containing the domain contracts of the service

pub mod entity;
pub mod error;
pub mod query;
pub mod repository;
pub mod validation;

pub use entity::Entity;
pub use error::{
    AcmeError, AcmeResult, ConfigError, EntityError, ErrorBody, StorageError, ValidationError,
};
pub use query::{StoreFilter, StoreQuery};
pub use repository::StoreRepository;
