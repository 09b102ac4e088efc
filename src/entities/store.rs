//! The Store record and its request payload

use crate::core::entity::Entity;
use crate::core::validation::non_blank;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A retail location.
///
/// `id` is `None` until the record is saved; after that it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
}

impl Store {
    /// Create an unsaved store
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
        }
    }

    /// Create a store with a fixed id (seed data and tests)
    pub fn with_id(id: Uuid, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Overwrite every field the payload carries a non-blank value for.
    ///
    /// Blank or absent fields keep the stored value, so applying the same
    /// payload twice leaves the record unchanged the second time.
    pub fn merge(&mut self, payload: &StorePayload) {
        if let Some(name) = non_blank(payload.name.as_deref()) {
            self.name = name.to_string();
        }
        if let Some(address) = non_blank(payload.address.as_deref()) {
            self.address = address.to_string();
        }
    }
}

impl Entity for Store {
    fn resource_name() -> &'static str {
        "stores"
    }

    fn display_name() -> &'static str {
        "Store"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

/// JSON body accepted by create and update.
///
/// Unknown members, `id` included, are dropped during deserialization, so a
/// create request can never address an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl StorePayload {
    pub fn new(name: Option<&str>, address: Option<&str>) -> Self {
        Self {
            name: name.map(String::from),
            address: address.map(String::from),
        }
    }
}
