pub mod board;
pub mod draft;
pub mod models;
pub mod prefs;
pub mod records;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageSlot;

pub use draft::{ListField, RecordDraft, RelativeDraft};
pub use models::{
    Address, DocumentSlot, Documents, Gender, ProfileType, Relationship, Relative, Task,
    TaskStatus, UserRecord,
};
pub use prefs::{SortKey, TablePrefs};
pub use records::{now_millis, today, RecordStore, SlotStore, RECORDS_KEY};
pub use validate::{validate, ValidationErrors};
