//! Order and OrderItem records
//!
//! These are schema-only: they are persisted alongside stores but no
//! endpoint reads or writes them.

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of an order, stored as an upper-case string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products sold by one store, with the delivery address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub store_id: Option<Uuid>,
    pub address: String,
    pub confirmation_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(store_id: Uuid, address: impl Into<String>) -> Self {
        Self {
            id: None,
            store_id: Some(store_id),
            address: address.into(),
            confirmation_date: None,
            status: OrderStatus::Pending,
            items: Vec::new(),
        }
    }

    /// Sum of `unit_price * quantity` over all items
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn display_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub description: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl Entity for OrderItem {
    fn resource_name() -> &'static str {
        "order_items"
    }

    fn display_name() -> &'static str {
        "OrderItem"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }
}
