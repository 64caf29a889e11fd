//! Record - The trait every stored entity type implements.

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be stored in a [`Collection`](crate::Collection).
///
/// A record carries its own unique id (assigned by the store on creation),
/// is built from a [`Draft`](Record::Draft) plus a fresh id, and is updated
/// in place by shallow-merging a [`Patch`](Record::Patch): only fields the
/// patch supplies overwrite, everything else is left unchanged.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "users", "events").
    const COLLECTION: &'static str;

    /// Creation input: every field except the id.
    type Draft: DeserializeOwned + Send;

    /// Partial update: every field optional.
    type Patch: DeserializeOwned + Send;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;

    /// Builds a record from a store-assigned id and a draft.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Shallow-merges a patch into this record in place.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// The alternate natural key used by delete-by-alternate-field, if the
    /// entity has one (username, name, title, event_id).
    fn alt_key(&self) -> Option<&str> {
        None
    }
}
