//! Search parameters for the store collection endpoint

use crate::core::error::ValidationError;
use crate::core::validation::non_blank;
use crate::entities::Store;
use serde::Deserialize;

/// Raw query string of `GET /stores`
///
/// # Example
/// ```text
/// GET /stores?name=acaj
/// GET /stores?address=Centro
/// GET /stores?name=caju&address=Araca
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreQuery {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// A validated search: case-insensitive substring match on one or both fields.
///
/// When both fields are given a store matches if **either** matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFilter {
    Name(String),
    Address(String),
    NameOrAddress { name: String, address: String },
}

impl StoreFilter {
    /// Build a filter from optional parameters, ignoring blank ones
    pub fn from_parts(name: Option<&str>, address: Option<&str>) -> Result<Self, ValidationError> {
        match (non_blank(name), non_blank(address)) {
            (Some(name), Some(address)) => Ok(StoreFilter::NameOrAddress {
                name: name.to_string(),
                address: address.to_string(),
            }),
            (Some(name), None) => Ok(StoreFilter::Name(name.to_string())),
            (None, Some(address)) => Ok(StoreFilter::Address(address.to_string())),
            (None, None) => Err(ValidationError::NoFilterParameter),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StoreFilter::Name(name) | StoreFilter::NameOrAddress { name, .. } => Some(name),
            StoreFilter::Address(_) => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            StoreFilter::Address(address) | StoreFilter::NameOrAddress { address, .. } => {
                Some(address)
            }
            StoreFilter::Name(_) => None,
        }
    }

    /// Whether the store satisfies the filter
    pub fn matches(&self, store: &Store) -> bool {
        let name_hit = self
            .name()
            .is_some_and(|needle| contains_ignore_case(&store.name, needle));
        let address_hit = self
            .address()
            .is_some_and(|needle| contains_ignore_case(&store.address, needle));
        name_hit || address_hit
    }
}

impl TryFrom<StoreQuery> for StoreFilter {
    type Error = ValidationError;

    fn try_from(query: StoreQuery) -> Result<Self, Self::Error> {
        StoreFilter::from_parts(query.name.as_deref(), query.address.as_deref())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `%needle%` with LIKE wildcards in the needle escaped by `\`
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
