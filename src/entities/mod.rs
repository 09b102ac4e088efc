//! Record types persisted by the service
//!
//! Only [`Store`] is exposed over HTTP. Orders, payments and refunds exist as
//! schema so the database layout matches the rest of the retail system.

pub mod order;
pub mod payment;
pub mod store;

pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{Payment, PaymentStatus, Refund, RefundType};
pub use store::{Store, StorePayload};
