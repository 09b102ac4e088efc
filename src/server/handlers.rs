//! HTTP handlers for the store resource
//!
//! Each handler validates its input, makes the persistence calls the
//! operation needs and nothing else, and returns either the stored record or
//! an [`AcmeError`] that renders as `{ "status", "message" }`.

use axum::{
    Json,
    extract::{
        OriginalUri, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::core::error::{AcmeError, AcmeResult, EntityError, ValidationError};
use crate::core::query::{StoreFilter, StoreQuery};
use crate::core::repository::StoreRepository;
use crate::core::validation::{parse_id, validate_create, validate_update};
use crate::entities::{Store, StorePayload};

/// Application state shared across store handlers
#[derive(Clone)]
pub struct StoreAppState {
    pub repository: Arc<dyn StoreRepository>,
}

impl StoreAppState {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }
}

/// Request body as decoded by axum; `null` decodes to `None`
type StoreBody = Result<Json<Option<StorePayload>>, JsonRejection>;

fn decode_body(body: StoreBody) -> Result<Option<StorePayload>, ValidationError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ValidationError::MalformedBody {
            reason: Some(rejection.body_text()),
        }),
    }
}

/// Get a store by id
///
/// GET /stores/{id}
pub async fn get_store(
    State(state): State<StoreAppState>,
    Path(raw_id): Path<String>,
) -> AcmeResult<Json<Store>> {
    tracing::debug!(id = %raw_id, "get store");

    let id = parse_id(&raw_id, ValidationError::IdNotProvided)?;
    let store = state
        .repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| EntityError::not_found::<Store>(id))?;

    Ok(Json(store))
}

/// Search stores by name and/or address
///
/// GET /stores?name=...&address=...
pub async fn search_stores(
    State(state): State<StoreAppState>,
    query: Result<Query<StoreQuery>, QueryRejection>,
) -> AcmeResult<Json<Vec<Store>>> {
    let Query(query) = query.map_err(|rejection| ValidationError::MalformedBody {
        reason: Some(rejection.body_text()),
    })?;
    tracing::debug!(name = ?query.name, address = ?query.address, "search stores");

    let filter = StoreFilter::from_parts(query.name.as_deref(), query.address.as_deref())?;
    let stores = state.repository.find_by_filter(&filter).await?;

    if stores.is_empty() {
        return Err(
            EntityError::no_match::<Store>(query.name.as_deref(), query.address.as_deref()).into(),
        );
    }

    Ok(Json(stores))
}

/// Create a store; the id is always assigned by the repository
///
/// POST /stores
pub async fn create_store(
    State(state): State<StoreAppState>,
    OriginalUri(uri): OriginalUri,
    body: StoreBody,
) -> AcmeResult<impl IntoResponse> {
    let payload = decode_body(body)?;
    tracing::debug!(?payload, "create store");

    let store = validate_create(payload)?;
    let saved = state.repository.save(store).await?;
    let id = saved
        .id
        .ok_or_else(|| AcmeError::Internal("repository returned a store without id".to_string()))?;

    tracing::info!(%id, "store created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    ))
}

/// Update the fields of a store the body carries
///
/// PUT /stores/{id}
pub async fn update_store(
    State(state): State<StoreAppState>,
    Path(raw_id): Path<String>,
    body: StoreBody,
) -> AcmeResult<Json<Store>> {
    update(&state, &raw_id, body).await
}

/// `PUT /stores/`, reached when the client leaves the id empty
pub async fn update_store_without_id(
    State(state): State<StoreAppState>,
    body: StoreBody,
) -> AcmeResult<Json<Store>> {
    update(&state, "", body).await
}

async fn update(state: &StoreAppState, raw_id: &str, body: StoreBody) -> AcmeResult<Json<Store>> {
    let payload = decode_body(body)?;
    tracing::debug!(id = %raw_id, ?payload, "update store");

    let (id, patch) = validate_update(payload, raw_id)?;
    let mut store = state
        .repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| EntityError::not_found::<Store>(id))?;

    store.merge(&patch);
    let saved = state.repository.save(store).await?;

    tracing::info!(%id, "store updated");
    Ok(Json(saved))
}
