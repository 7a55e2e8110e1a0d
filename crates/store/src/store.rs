//! Generic in-memory record store.

use mockbase_core::{Error, Record, RecordId, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Process-wide store for one resource type.
///
/// Owns an id-keyed `FxHashMap` behind a `parking_lot::RwLock`, giving O(1)
/// lookup and delete, and mutual exclusion around every mutation so two
/// concurrent requests cannot interleave a lost update or an id collision.
/// Only the five CRUD operations are exposed; the raw map never leaks, so a
/// real backing store could be substituted without touching callers.
///
/// # Thread Safety
///
/// All operations take `&self` and are safe to call from any number of
/// request tasks. Reads (`list`, `get`) share the lock; mutations
/// (`create`, `update`, `delete`) take it exclusively.
///
/// Validation happens strictly before the map changes: `create` builds the
/// full record first, and `update` patches a clone that is only written back
/// on success. A failed validation therefore never leaves partial state.
pub struct RecordStore<R: Record> {
    records: RwLock<FxHashMap<RecordId, R>>,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a store pre-populated with seed records.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let map: FxHashMap<RecordId, R> = records
            .into_iter()
            .map(|r| (r.id().clone(), r))
            .collect();
        debug!(resource = R::RESOURCE, count = map.len(), "seeded store");
        Self {
            records: RwLock::new(map),
        }
    }

    /// All current records. No ordering is guaranteed; display sorting is a
    /// caller concern.
    pub fn list(&self) -> Vec<R> {
        self.records.read().values().cloned().collect()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Validate a draft, assign a fresh unique id, insert, and return the
    /// new record.
    ///
    /// The id is drawn under the write lock and re-drawn on the (vanishing)
    /// chance it collides with an existing record, so two racing creates can
    /// never produce the same id.
    pub fn create(&self, draft: R::Draft) -> Result<R> {
        let mut records = self.records.write();

        let mut id = RecordId::generate();
        while records.contains_key(&id) {
            id = RecordId::generate();
        }

        let record = R::build(id.clone(), draft)?;
        records.insert(id.clone(), record.clone());
        debug!(resource = R::RESOURCE, id = %id, "created record");
        Ok(record)
    }

    /// The record with the given id, or `NotFound`.
    pub fn get(&self, id: &RecordId) -> Result<R> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    /// Apply a partial update to the record with the given id.
    ///
    /// Fails with `NotFound` if no record matches, or with a validation
    /// error if any present field is malformed; in both cases the stored
    /// record is untouched. Returns the updated record.
    pub fn update(&self, id: &RecordId, patch: R::Patch) -> Result<R> {
        let mut records = self.records.write();
        let existing = records
            .get(id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;

        let mut updated = existing.clone();
        updated.apply(patch)?;
        records.insert(id.clone(), updated.clone());
        debug!(resource = R::RESOURCE, id = %id, "updated record");
        Ok(updated)
    }

    /// Remove the record with the given id, or fail with `NotFound`.
    pub fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self.records.write();
        match records.remove(id) {
            Some(_) => {
                debug!(resource = R::RESOURCE, id = %id, "deleted record");
                Ok(())
            }
            None => Err(Error::not_found(id.as_str())),
        }
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> std::fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("resource", &R::RESOURCE)
            .field("len", &self.len())
            .finish()
    }
}
