//! Router builder utilities for store and health routes

use super::handlers::{
    StoreAppState, create_store, get_store, search_stores, update_store, update_store_without_id,
};
use axum::{
    Json, Router,
    routing::{MethodRouter, get},
};
use serde_json::{Value, json};

/// Name reported by the health endpoints
pub const SERVICE_NAME: &str = "acme-stores";

/// Build the store routes
///
/// - GET /stores/{id} - Get a store by id
/// - GET /stores?name=..&address=.. - Search stores
/// - POST /stores - Create a store
/// - PUT /stores/{id} - Update a store
///
/// Collection routes answer with and without a trailing slash; `PUT /stores/`
/// is how an empty id reaches the update handler.
pub fn build_store_routes(state: StoreAppState) -> Router {
    let collection = || -> MethodRouter<StoreAppState> {
        get(search_stores)
            .post(create_store)
            .put(update_store_without_id)
    };

    Router::new()
        .route("/stores", collection())
        .route("/stores/", collection())
        .route("/stores/{id}", get(get_store).put(update_store))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}
