use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use uuid::Uuid;

/// In-memory store of weather records keyed by generated id.
///
/// Records are write-once: there is no update or delete, and a stored payload
/// is never mutated after insertion. Growth is unbounded by design; records
/// live for the lifetime of the process.
///
/// Cloning the store clones the handle, not the data, so the same mapping is
/// shared across all request handlers. The lock is only ever held for an O(1)
/// map operation, never across an await point.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<Mutex<HashMap<String, Value>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a payload under a freshly generated id and return the id.
    ///
    /// Ids are UUIDv4 strings; collisions are treated as negligible, so there
    /// is no existence check before insert.
    pub fn create(&self, payload: Value) -> String {
        let id = Uuid::new_v4().to_string();
        let mut records = self.records.lock().expect("record store lock poisoned");
        records.insert(id.clone(), payload);
        id
    }

    /// Look up a stored payload by id. No side effects: no TTL, no access
    /// tracking, no eviction.
    pub fn get(&self, id: &str) -> Option<Value> {
        let records = self.records.lock().expect("record store lock poisoned");
        records.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_then_get_returns_stored_payload() {
        let store = RecordStore::new();
        let id = store.create(json!({"current": {"temperature": 18}}));

        let payload = store.get(&id).expect("record must exist");
        assert_eq!(payload["current"]["temperature"], 18);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let store = RecordStore::new();
        store.create(json!({}));

        assert!(store.get("no-such-id").is_none());
    }

    #[test]
    fn creates_with_identical_payloads_get_distinct_ids() {
        let store = RecordStore::new();
        let a = store.create(json!({"location": "Paris"}));
        let b = store.create(json!({"location": "Paris"}));

        assert_ne!(a, b);
        assert!(store.get(&a).is_some());
        assert!(store.get(&b).is_some());
    }

    #[test]
    fn clones_share_the_same_mapping() {
        let store = RecordStore::new();
        let handle = store.clone();

        let id = store.create(json!({"ok": true}));
        assert!(handle.get(&id).is_some());
    }
}
