//! # `localStorage` slot — browser-side persistence
//!
//! [`LocalStorageSlot`] is the [`SlotStore`] used on the web platform. It
//! maps slot reads and writes straight onto `window.localStorage`, which is
//! synchronous, so every mutation is durable before the triggering event
//! handler returns.
//!
//! All failures (no window, storage disabled, quota) are swallowed: reads
//! degrade to "no data" and writes become no-ops, so a restricted browser
//! profile never crashes the app — it just loses durability.

use crate::records::SlotStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SlotStore for LocalStorageSlot {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("localStorage write failed: {e:?}");
            }
        }
    }
}
