//! Platform selection for the storage slot.
//!
//! Web builds persist to `localStorage`; everything else (native dev builds,
//! tests) shares one in-memory slot for the lifetime of the process.

use store::{RecordStore, SlotStore};

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn session_slot() -> store::MemoryStore {
    use std::sync::OnceLock;
    static SLOT: OnceLock<store::MemoryStore> = OnceLock::new();
    SLOT.get_or_init(store::MemoryStore::new).clone()
}

/// The durable slot for the current platform.
pub fn make_slot() -> impl SlotStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageSlot::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        session_slot()
    }
}

/// Open the record store over the platform slot.
pub fn make_store() -> RecordStore<impl SlotStore> {
    RecordStore::load(make_slot())
}
