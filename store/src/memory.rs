use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::records::SlotStore;

/// In-memory SlotStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::sample_draft;
    use crate::models::UserRecord;
    use crate::records::{RecordStore, RECORDS_KEY};
    use time::macros::date;

    fn record(id: u64) -> UserRecord {
        sample_draft()
            .finish(id, date!(2026 - 08 - 27))
            .expect("sample draft is valid")
    }

    #[test]
    fn load_from_empty_slot() {
        let store = RecordStore::load(MemoryStore::new());
        assert!(store.records().is_empty());
    }

    #[test]
    fn corrupt_slot_hydrates_to_empty_list() {
        let slot = MemoryStore::new();
        slot.write(RECORDS_KEY, "{not json");
        let store = RecordStore::load(slot);
        assert!(store.records().is_empty());
    }

    #[test]
    fn load_is_idempotent() {
        let slot = MemoryStore::new();
        let mut store = RecordStore::load(slot.clone());
        store.add(record(1));
        store.add(record(2));

        let first = RecordStore::load(slot.clone());
        let second = RecordStore::load(slot);
        assert_eq!(first.records(), second.records());
        assert_eq!(first.records().len(), 2);
    }

    #[test]
    fn add_then_get_by_id() {
        let mut store = RecordStore::load(MemoryStore::new());
        let id = store.add(record(10));
        assert_eq!(id, 10);
        assert_eq!(store.get(10), Some(&record(10)));
    }

    #[test]
    fn slot_round_trips_the_full_record() {
        let slot = MemoryStore::new();
        let mut store = RecordStore::load(slot.clone());
        store.add(record(10));

        let raw = slot.read(RECORDS_KEY).expect("slot written");
        assert!(raw.contains("\"firstName\""), "camelCase layout expected");
        assert!(!raw.contains("confirmPassword"), "draft-only field leaked");

        let reparsed: Vec<UserRecord> = serde_json::from_str(&raw).expect("slot parses");
        assert_eq!(reparsed, vec![record(10)]);
    }

    #[test]
    fn mutations_are_visible_to_a_fresh_load() {
        let slot = MemoryStore::new();
        let mut store = RecordStore::load(slot.clone());
        store.add(record(1));

        let mut second = RecordStore::load(slot.clone());
        assert_eq!(second.records().len(), 1);
        second.remove(1);

        assert!(RecordStore::load(slot).records().is_empty());
    }

    #[test]
    fn update_replaces_by_id() {
        let mut store = RecordStore::load(MemoryStore::new());
        store.add(record(5));

        let mut changed = record(5);
        changed.first_name = "Janet".into();
        assert!(store.update(changed.clone()));
        assert_eq!(store.get(5), Some(&changed));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn update_of_unknown_id_signals_not_found() {
        let mut store = RecordStore::load(MemoryStore::new());
        store.add(record(5));
        assert!(!store.update(record(99)));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn remove_drops_the_matching_record() {
        let mut store = RecordStore::load(MemoryStore::new());
        store.add(record(1));
        store.add(record(2));

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert_eq!(store.records().len(), 1);
        assert!(store.get(2).is_some());
    }

    #[test]
    fn clone_assigns_a_fresh_id_and_persists() {
        let slot = MemoryStore::new();
        let mut store = RecordStore::load(slot.clone());
        store.add(record(1));

        let new_id = store.clone_record(1).expect("source exists");
        assert_ne!(new_id, 1);
        assert_eq!(store.records().len(), 2);

        let copy = store.get(new_id).expect("clone retrievable");
        let mut expected = record(1);
        expected.id = new_id;
        assert_eq!(copy, &expected);

        // The clone must survive a reload, not just the session.
        assert_eq!(RecordStore::load(slot).records().len(), 2);
    }

    #[test]
    fn clone_of_unknown_id_is_none() {
        let mut store = RecordStore::load(MemoryStore::new());
        assert!(store.clone_record(7).is_none());
    }

    #[test]
    fn colliding_ids_are_bumped() {
        let mut store = RecordStore::load(MemoryStore::new());
        let first = store.add(record(100));
        let second = store.add(record(100));
        assert_eq!(first, 100);
        assert_ne!(second, 100);
        assert_eq!(store.records().len(), 2);
    }
}
