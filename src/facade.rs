//! RecordSet - Typed CRUD façade over one collection.

use std::sync::RwLock;

use serde::Serialize;
use tracing::debug;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::id::IdGenerator;
use crate::record::Record;

/// Result shape for bulk deletion: the number of records removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub count: usize,
}

/// Uniform CRUD operations for one record type, borrowed from a
/// [`Store`](crate::Store) via [`Store::records`](crate::Store::records).
///
/// Every operation takes a lock for its full duration, so each call is
/// atomic with respect to other calls on the same collection.
pub struct RecordSet<'a, T: Record> {
    collection: &'a RwLock<Collection<T>>,
    ids: &'a dyn IdGenerator,
}

impl<'a, T: Record> RecordSet<'a, T> {
    pub(crate) fn new(collection: &'a RwLock<Collection<T>>, ids: &'a dyn IdGenerator) -> Self {
        Self { collection, ids }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'a, Collection<T>>, StoreError> {
        self.collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'a, Collection<T>>, StoreError> {
        self.collection
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }

    /// Create a record from a draft: generates a fresh id, appends, returns
    /// the new record. Foreign keys in the draft are not validated.
    pub fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        let id = self.ids.next();
        let record = T::from_draft(id, draft);
        self.write()?.insert(record.clone())?;
        debug!(collection = T::COLLECTION, id = record.id(), "record created");
        Ok(record)
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Result<T, StoreError> {
        self.read()?
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            })
    }

    /// All records, in insertion order, as a snapshot.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.read()?.records().to_vec())
    }

    /// Shallow-merge a patch into the record with the given id. Fails closed:
    /// an absent id returns `NotFound` and mutates nothing.
    pub fn update(&self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        let updated = self.write()?.update_at(id, patch)?;
        debug!(collection = T::COLLECTION, id, "record updated");
        Ok(updated)
    }

    /// Remove the first record matching the id, or failing that, the
    /// entity's alternate natural key. Id wins when both are supplied and
    /// point at different records.
    pub fn delete_one(
        &self,
        id: Option<&str>,
        alt_key: Option<&str>,
    ) -> Result<T, StoreError> {
        let mut collection = self.write()?;

        let removed = id
            .and_then(|id| collection.remove_matching(|record| record.id() == id))
            .or_else(|| {
                alt_key.and_then(|key| {
                    collection.remove_matching(|record| record.alt_key() == Some(key))
                })
            });

        match removed {
            Some(record) => {
                debug!(collection = T::COLLECTION, id = record.id(), "record deleted");
                Ok(record)
            }
            None => Err(StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.or(alt_key).unwrap_or_default().to_string(),
            }),
        }
    }

    /// Remove every record, reporting how many were removed. Idempotent:
    /// a second call reports 0.
    pub fn delete_all(&self) -> Result<Deleted, StoreError> {
        let count = self.write()?.clear();
        debug!(collection = T::COLLECTION, count, "collection cleared");
        Ok(Deleted { count })
    }
}
