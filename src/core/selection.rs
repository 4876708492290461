//! # Selection
//!
//! The set of records the user has marked. Ids only; ordering comes from the
//! loaded page (see `App::selected_records`).

use std::collections::HashSet;

use crate::api::Artwork;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flips one record. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replaces the selection with the first `n` records, clamped to `records.len()`.
    /// Returns how many ended up selected.
    pub fn select_first(&mut self, records: &[Artwork], n: u32) -> usize {
        let count = (n as usize).min(records.len());
        self.ids = records[..count].iter().map(|r| r.id).collect();
        count
    }

    /// Drops every id that is not on the given page.
    pub fn retain_loaded(&mut self, records: &[Artwork]) {
        let loaded: HashSet<u64> = records.iter().map(|r| r.id).collect();
        self.ids.retain(|id| loaded.contains(id));
    }
}
