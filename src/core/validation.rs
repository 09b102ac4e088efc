//! Request validation for the store endpoints
//!
//! Blank strings (empty after trimming) count as absent everywhere.
//! Each function returns the first failing check in a fixed order so the
//! same bad request always produces the same error.

use crate::core::error::ValidationError;
use crate::entities::{Store, StorePayload};
use uuid::Uuid;

/// `true` when the value is absent or only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// The value, unless it is blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a path id; `missing` is returned when the id is blank
pub fn parse_id(raw: &str, missing: ValidationError) -> Result<Uuid, ValidationError> {
    if is_blank(Some(raw)) {
        return Err(missing);
    }
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidId {
        value: raw.to_string(),
    })
}

/// Validate a create request and turn it into an unsaved store.
///
/// The returned store never carries an id, whatever the client sent.
pub fn validate_create(payload: Option<StorePayload>) -> Result<Store, ValidationError> {
    let payload = payload.ok_or(ValidationError::MalformedBody { reason: None })?;

    match (
        non_blank(payload.name.as_deref()),
        non_blank(payload.address.as_deref()),
    ) {
        (Some(name), Some(address)) => Ok(Store::new(name, address)),
        _ => Err(ValidationError::RequiredFields),
    }
}

/// Validate an update request, returning the target id and the patch
pub fn validate_update(
    payload: Option<StorePayload>,
    raw_id: &str,
) -> Result<(Uuid, StorePayload), ValidationError> {
    let payload = payload.ok_or(ValidationError::MalformedBody { reason: None })?;

    if is_blank(Some(raw_id)) {
        return Err(ValidationError::IdRequired);
    }
    if is_blank(payload.name.as_deref()) && is_blank(payload.address.as_deref()) {
        return Err(ValidationError::NothingToUpdate);
    }

    let id = parse_id(raw_id, ValidationError::IdRequired)?;
    Ok((id, payload))
}
