//! Entity trait shared by every persisted record type

use uuid::Uuid;

/// Base trait for all records the service persists.
///
/// Ids are optional on the type because a record that has not been saved
/// yet has none; the persistence layer assigns it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and table names (e.g., "stores")
    fn resource_name() -> &'static str;

    /// The name used in client-facing messages (e.g., "Store")
    fn display_name() -> &'static str;

    /// The identifier, if the record has been persisted
    fn id(&self) -> Option<Uuid>;

    /// Whether the persistence layer has assigned an id
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
