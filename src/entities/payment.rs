//! Payment and Refund records (schema-only)

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Concluded,
    Refused,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Concluded => "CONCLUDED",
            PaymentStatus::Refused => "REFUSED",
        }
    }
}

/// Payment of a single order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub status: PaymentStatus,
    pub credit_card: Option<i64>,
    pub payment_date: Option<DateTime<Utc>>,
}

impl Entity for Payment {
    fn resource_name() -> &'static str {
        "payments"
    }

    fn display_name() -> &'static str {
        "Payment"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

/// Whether a refund covers a whole order or one of its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundType {
    Order,
    OrderItem,
}

impl RefundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundType::Order => "ORDER",
            RefundType::OrderItem => "ORDER_ITEM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "type")]
    pub refund_type: RefundType,
    pub order_id: Option<Uuid>,
    pub order_item_id: Option<Uuid>,
}

impl Entity for Refund {
    fn resource_name() -> &'static str {
        "refunds"
    }

    fn display_name() -> &'static str {
        "Refund"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }
}
