//! Server module for building the HTTP application
//!
//! `ServerBuilder` assembles the store routes, the health routes and any
//! custom routes into one axum `Router` with tracing and CORS layers.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::StoreAppState;
pub use router::{build_store_routes, health_routes};
