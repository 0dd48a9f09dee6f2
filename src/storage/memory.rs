//! In-memory record collection
//!
//! The collection is an ordered list of records, unique by `SID`. Mutations
//! rebuild the list and swap it in while holding the write lock, so a
//! lookup followed by a write-back is never interleaved with another writer.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use super::errors::{StorageError, StorageResult};
use super::ids::IdGenerator;
use crate::schema::{Record, ID_ATTRIBUTE};

/// Whether `value` is the identifier `id`.
///
/// String identifiers compare byte-for-byte. Numeric identifiers compare by
/// their JSON text, so a seed `"SID": 7` is reachable as `/7`.
pub fn id_matches(value: &Value, id: &str) -> bool {
    match value {
        Value::String(s) => s == id,
        Value::Number(n) => n.to_string() == id,
        _ => false,
    }
}

fn record_has_id(record: &Record, id: &str) -> bool {
    record
        .get(ID_ATTRIBUTE)
        .map_or(false, |value| id_matches(value, id))
}

/// Shared, mutable collection of records
#[derive(Debug)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    /// Create a store holding only the seed record
    pub fn new(seed: Record) -> Self {
        Self::from_records(vec![seed])
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Vec<Record>>> {
        self.records.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Vec<Record>>> {
        self.records.write().map_err(|_| StorageError::LockPoisoned)
    }

    /// Snapshot of every record in insertion order
    pub fn list(&self) -> StorageResult<Vec<Record>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// First record whose `SID` equals `id`
    pub fn find_by_id(&self, id: &str) -> StorageResult<Option<Record>> {
        Ok(self.read()?.iter().find(|r| record_has_id(r, id)).cloned())
    }

    pub fn contains(&self, id: &str) -> StorageResult<bool> {
        Ok(self.read()?.iter().any(|r| record_has_id(r, id)))
    }

    /// Swap in a whole new collection
    pub fn replace_all(&self, records: Vec<Record>) -> StorageResult<()> {
        *self.write()? = records;
        Ok(())
    }

    /// Place `record` after every existing record
    pub fn append(&self, record: Record) -> StorageResult<()> {
        let mut records = self.write()?;
        let mut next = Vec::with_capacity(records.len() + 1);
        next.extend(records.iter().cloned());
        next.push(record);
        *records = next;
        Ok(())
    }

    /// Replace the record identified by `id` with `patch(existing)`.
    ///
    /// The lookup and the write-back happen under one write lock. The
    /// updated record keeps its position. Returns the stored result.
    pub fn update_with<F>(&self, id: &str, patch: F) -> StorageResult<Record>
    where
        F: FnOnce(&Record) -> Record,
    {
        let mut records = self.write()?;

        let position = records
            .iter()
            .position(|r| record_has_id(r, id))
            .ok_or_else(|| StorageError::not_found(id))?;
        let updated = patch(&records[position]);

        let next: Vec<Record> = records
            .iter()
            .enumerate()
            .map(|(i, r)| if i == position { updated.clone() } else { r.clone() })
            .collect();
        *records = next;

        Ok(updated)
    }

    /// Append a record built around a freshly generated identifier.
    ///
    /// Identifiers already present in the collection are skipped, so the
    /// new `SID` is unique among seed and previously created records.
    pub fn insert_with<F>(&self, ids: &dyn IdGenerator, build: F) -> StorageResult<Record>
    where
        F: FnOnce(Value) -> Record,
    {
        let mut records = self.write()?;

        let id = loop {
            let candidate = ids.next_id();
            if !records.iter().any(|r| record_has_id(r, &candidate)) {
                break candidate;
            }
        };

        let record = build(Value::String(id));
        records.push(record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SequentialGenerator;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn seeded() -> RecordStore {
        RecordStore::new(record(json!({"SID": "1", "name": "Ada"})))
    }

    #[test]
    fn test_id_matches() {
        assert!(id_matches(&json!("abc"), "abc"));
        assert!(!id_matches(&json!("abc"), "ABC"));
        assert!(id_matches(&json!(7), "7"));
        assert!(!id_matches(&json!(7), "07"));
        assert!(!id_matches(&json!(null), "null"));
        assert!(!id_matches(&json!(true), "true"));
    }

    #[test]
    fn test_find_by_id() {
        let store = seeded();
        assert_eq!(store.find_by_id("1").unwrap().unwrap()["name"], "Ada");
        assert!(store.find_by_id("2").unwrap().is_none());
        assert!(store.contains("1").unwrap());
    }

    #[test]
    fn test_append_places_last() {
        let store = seeded();
        store.append(record(json!({"SID": "2", "name": "Grace"}))).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1]["SID"], "2");
    }

    #[test]
    fn test_replace_all() {
        let store = seeded();
        store
            .replace_all(vec![
                record(json!({"SID": "a", "name": "x"})),
                record(json!({"SID": "b", "name": "y"})),
            ])
            .unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert!(store.find_by_id("1").unwrap().is_none());
    }

    #[test]
    fn test_update_preserves_position() {
        let store = seeded();
        store.append(record(json!({"SID": "2", "name": "Grace"}))).unwrap();
        store.append(record(json!({"SID": "3", "name": "Ken"}))).unwrap();

        let updated = store
            .update_with("2", |existing| {
                let mut next = existing.clone();
                next.insert("name".into(), json!("Hopper"));
                next
            })
            .unwrap();
        assert_eq!(updated["name"], "Hopper");

        let sids: Vec<_> = store.list().unwrap().iter().map(|r| r["SID"].clone()).collect();
        assert_eq!(sids, vec![json!("1"), json!("2"), json!("3")]);
        assert_eq!(store.list().unwrap()[1]["name"], "Hopper");
    }

    #[test]
    fn test_update_unknown_id() {
        let store = seeded();
        let err = store.update_with("missing", |r| r.clone()).unwrap_err();
        assert_eq!(err, StorageError::not_found("missing"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_insert_skips_taken_ids() {
        let store = seeded();
        let ids = SequentialGenerator::starting_at(1);

        let created = store
            .insert_with(&ids, |sid| record(json!({"SID": sid, "name": "Barbara"})))
            .unwrap();

        // "1" belongs to the seed record
        assert_eq!(created["SID"], "2");
        assert_eq!(store.len().unwrap(), 2);
    }
}
