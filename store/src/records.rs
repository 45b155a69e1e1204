//! # Persistent record store
//!
//! The single authoritative list of [`UserRecord`]s, mirrored to one named
//! slot of durable key-value storage as a JSON array. All reads and writes go
//! through the [`SlotStore`] trait, so the same logic works against the
//! in-memory store (native builds, tests) and the browser's `localStorage`
//! ([`crate::LocalStorageSlot`], web builds).
//!
//! Every mutation rewrites the full slot before returning; there are no
//! partial or delta writes, and the in-memory list is read-after-write
//! consistent with the durable copy. A missing or unparseable slot hydrates
//! to an empty list and is never surfaced to the caller.

use crate::models::UserRecord;
use time::{Date, OffsetDateTime};

/// The fixed slot the record list persists under.
pub const RECORDS_KEY: &str = "users";

/// One named slot of durable string storage.
pub trait SlotStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// The record list plus its durable mirror.
pub struct RecordStore<S: SlotStore> {
    slot: S,
    records: Vec<UserRecord>,
}

impl<S: SlotStore> RecordStore<S> {
    /// Hydrate from the slot. Absent or corrupt data initializes an empty
    /// list rather than erroring.
    pub fn load(slot: S) -> Self {
        let records = match slot.read(RECORDS_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("discarding unparseable records slot: {e}");
                    Vec::new()
                }
            },
        };
        Self { slot, records }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a record and rewrite the slot. The id is bumped past any
    /// existing record so uniqueness holds even for same-millisecond ids;
    /// the id actually stored is returned.
    pub fn add(&mut self, mut record: UserRecord) -> u64 {
        record.id = self.unique_id(record.id);
        let id = record.id;
        self.records.push(record);
        self.persist();
        id
    }

    /// Replace the record whose id matches. Returns false when no record
    /// matched; the slot is rewritten only on a hit.
    pub fn update(&mut self, record: UserRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Drop the record with the given id and rewrite the slot.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Duplicate a record under a fresh id, append, and rewrite the slot.
    /// Returns the clone's id.
    pub fn clone_record(&mut self, id: u64) -> Option<u64> {
        let mut copy = self.get(id)?.clone();
        copy.id = self.unique_id(now_millis());
        let new_id = copy.id;
        self.records.push(copy);
        self.persist();
        Some(new_id)
    }

    fn unique_id(&self, candidate: u64) -> u64 {
        let mut id = if candidate == 0 { now_millis() } else { candidate };
        while self.records.iter().any(|r| r.id == id) {
            id += 1;
        }
        id
    }

    fn persist(&self) {
        match serde_json::to_string(&self.records) {
            Ok(json) => self.slot.write(RECORDS_KEY, &json),
            Err(e) => tracing::error!("failed to serialize records: {e}"),
        }
    }
}

/// Milliseconds since the Unix epoch, platform-aware.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Today's date, used as the age-gate evaluation time.
pub fn today() -> Date {
    let secs = (now_millis() / 1000) as i64;
    match OffsetDateTime::from_unix_timestamp(secs) {
        Ok(t) => t.date(),
        Err(_) => Date::MIN,
    }
}
