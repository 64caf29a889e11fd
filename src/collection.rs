//! Collection - Ordered in-memory list of records of one entity type.

use crate::error::StoreError;
use crate::record::Record;

/// An insertion-order-preserving list of records with a unique-id invariant.
///
/// Every lookup is a linear scan; first match wins, ties broken by insertion
/// order. This is list semantics, not a set: order is observable through
/// [`records`](Collection::records) and [`filter`](Collection::filter).
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Remove all records, returning the prior length.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}

impl<T: Record> Collection<T> {
    /// Append a record. The id must be pre-populated; inserting an id that is
    /// already present fails with `DuplicateId` and leaves the list unchanged.
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        if self.find_by_id(record.id()).is_some() {
            return Err(StoreError::DuplicateId {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// First record with a matching id, or None.
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// First record matching the predicate, insertion-order tie-break.
    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|&record| predicate(record))
    }

    /// All records matching the predicate, in insertion order, as a snapshot
    /// copy rather than a live view.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect()
    }

    /// Shallow-merge a patch into the record with the given id, in place,
    /// returning the updated record. Fails closed: if the id is absent the
    /// collection is left untouched and `NotFound` is returned.
    pub fn update_at(&mut self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            })?;

        record.apply_patch(patch);
        Ok(record.clone())
    }

    /// Remove and return the first record matching the predicate.
    pub fn remove_matching(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.records.iter().position(|record| predicate(record))?;
        Some(self.records.remove(index))
    }
}
