//! Listing preferences persisted in their own slot.
//!
//! The listing view remembers how the table was last sorted. Missing or
//! corrupt data falls back to the defaults, same as the record slot.

use serde::{Deserialize, Serialize};

use crate::records::SlotStore;

const PREFS_KEY: &str = "prefs";

/// Sortable columns of the listing table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Dob,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePrefs {
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

impl Default for TablePrefs {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            ascending: true,
        }
    }
}

impl TablePrefs {
    pub fn load(slot: &impl SlotStore) -> Self {
        slot.read(PREFS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, slot: &impl SlotStore) {
        match serde_json::to_string(self) {
            Ok(json) => slot.write(PREFS_KEY, &json),
            Err(e) => tracing::error!("failed to serialize prefs: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn defaults_when_slot_is_missing_or_corrupt() {
        let slot = MemoryStore::new();
        assert_eq!(TablePrefs::load(&slot), TablePrefs::default());

        slot.write(PREFS_KEY, "???");
        assert_eq!(TablePrefs::load(&slot), TablePrefs::default());
    }

    #[test]
    fn round_trip() {
        let slot = MemoryStore::new();
        let prefs = TablePrefs {
            sort: SortKey::Dob,
            ascending: false,
        };
        prefs.save(&slot);
        assert_eq!(TablePrefs::load(&slot), prefs);
    }
}
