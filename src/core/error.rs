//! Typed error handling for the store service
//!
//! Every rejected request is translated into a single error body of the form
//! `{ "status": <http status>, "message": <text> }`. Handlers return
//! [`AcmeError`] and let [`IntoResponse`] do the mapping.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: missing or malformed input (400)
//! - [`EntityError`]: well-formed lookups that match nothing (404)
//! - [`StorageError`]: persistence backend failures (500)
//! - [`ConfigError`]: configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use acme::prelude::*;
//!
//! async fn fetch(repo: &dyn StoreRepository, id: Uuid) -> AcmeResult<Store> {
//!     repo.find_by_id(&id)
//!         .await?
//!         .ok_or_else(|| EntityError::not_found::<Store>(id).into())
//! }
//! ```

use crate::core::entity::Entity;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The main error type for the store service
#[derive(Debug)]
pub enum AcmeError {
    /// Missing or malformed client input
    Validation(ValidationError),

    /// Entity lookups that found nothing
    Entity(EntityError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Anything else that escaped a lower layer
    Internal(String),
}

impl fmt::Display for AcmeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcmeError::Validation(e) => write!(f, "{}", e),
            AcmeError::Entity(e) => write!(f, "{}", e),
            AcmeError::Storage(e) => write!(f, "{}", e),
            AcmeError::Config(e) => write!(f, "{}", e),
            AcmeError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AcmeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AcmeError::Validation(e) => Some(e),
            AcmeError::Entity(e) => Some(e),
            AcmeError::Storage(e) => Some(e),
            AcmeError::Config(e) => Some(e),
            AcmeError::Internal(_) => None,
        }
    }
}

/// Error body returned to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric HTTP status, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl AcmeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AcmeError::Validation(_) => StatusCode::BAD_REQUEST,
            AcmeError::Entity(e) => e.status_code(),
            AcmeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AcmeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AcmeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error, used for log correlation
    pub fn error_code(&self) -> &'static str {
        match self {
            AcmeError::Validation(e) => e.error_code(),
            AcmeError::Entity(e) => e.error_code(),
            AcmeError::Storage(_) => "STORAGE_ERROR",
            AcmeError::Config(_) => "CONFIG_ERROR",
            AcmeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to the client-facing error body
    pub fn to_response(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AcmeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), message = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors caused by missing or malformed client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Lookup path carried no id
    IdNotProvided,

    /// Update path carried no id
    IdRequired,

    /// The id is not a UUID
    InvalidId { value: String },

    /// Request body was `null`, not JSON, or could not be decoded
    MalformedBody { reason: Option<String> },

    /// Create request lacks `name` or `address`
    RequiredFields,

    /// Update request carries neither `name` nor `address`
    NothingToUpdate,

    /// Search request carries neither `name` nor `address`
    NoFilterParameter,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IdNotProvided => write!(f, "id not provided"),
            ValidationError::IdRequired => write!(f, "id is required"),
            ValidationError::InvalidId { value } => write!(f, "id is not valid: {}", value),
            ValidationError::MalformedBody { .. } => {
                write!(f, "information incomplete or malformed")
            }
            ValidationError::RequiredFields => write!(f, "name and address fields are required"),
            ValidationError::NothingToUpdate => write!(f, "at least one field required to update"),
            ValidationError::NoFilterParameter => write!(
                f,
                "no valid parameter informed; accepted parameters are name and address"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::IdNotProvided | ValidationError::IdRequired => "MISSING_ID",
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::MalformedBody { .. } => "MALFORMED_BODY",
            ValidationError::RequiredFields => "MISSING_FIELDS",
            ValidationError::NothingToUpdate => "NOTHING_TO_UPDATE",
            ValidationError::NoFilterParameter => "MISSING_PARAMETER",
        }
    }
}

impl From<ValidationError> for AcmeError {
    fn from(err: ValidationError) -> Self {
        AcmeError::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors for well-formed requests that match no record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// No entity stored under the given id
    NotFound { entity_type: String, id: String },

    /// A search matched nothing
    NoMatch {
        entity_type: String,
        name: String,
        address: String,
    },
}

impl EntityError {
    pub fn not_found<T: Entity>(id: impl ToString) -> Self {
        EntityError::NotFound {
            entity_type: T::display_name().to_string(),
            id: id.to_string(),
        }
    }

    pub fn no_match<T: Entity>(name: Option<&str>, address: Option<&str>) -> Self {
        EntityError::NoMatch {
            entity_type: T::display_name().to_string(),
            name: name.unwrap_or_default().to_string(),
            address: address.unwrap_or_default().to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::NoMatch { .. } => "NO_MATCH",
        }
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "no {} found for id {}", entity_type, id)
            }
            EntityError::NoMatch {
                entity_type,
                name,
                address,
            } => write!(
                f,
                "no {} found for parameters Name [{}] or Address [{}]",
                entity_type, name, address
            ),
        }
    }
}

impl std::error::Error for EntityError {}

impl From<EntityError> for AcmeError {
    fn from(err: EntityError) -> Self {
        AcmeError::Entity(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// Backend lock poisoned or otherwise unusable
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for AcmeError {
    fn from(err: StorageError) -> Self {
        AcmeError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Missing required field in configuration
    MissingField { field: String, context: String },

    /// Invalid value in configuration or environment
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::MissingField { field, context } => {
                write!(f, "Missing required field '{}' in {}", field, context)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for AcmeError {
    fn from(err: ConfigError) -> Self {
        AcmeError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for AcmeError {
    fn from(err: std::io::Error) -> Self {
        AcmeError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for AcmeError {
    fn from(err: serde_yaml::Error) -> Self {
        AcmeError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<uuid::Error> for AcmeError {
    fn from(err: uuid::Error) -> Self {
        AcmeError::Validation(ValidationError::InvalidId {
            value: err.to_string(),
        })
    }
}

/// Repository and config code speaks `anyhow`; typed errors survive the trip.
impl From<anyhow::Error> for AcmeError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => AcmeError::Storage(storage),
            Err(err) => match err.downcast::<ConfigError>() {
                Ok(config) => AcmeError::Config(config),
                Err(err) => AcmeError::Internal(format!("{:#}", err)),
            },
        }
    }
}

/// A specialized Result type for store service operations
pub type AcmeResult<T> = Result<T, AcmeError>;
