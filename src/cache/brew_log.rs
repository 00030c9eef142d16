use serde::Serialize;

use crate::entity::BrewRecord;
use crate::error::Result;
use crate::storage::{RecordStore, Slots};

/// Newest-first view over a [`RecordStore`].
///
/// Every mutation goes through the store and is followed by a full re-read
/// and re-sort, so the view never drifts from what is persisted.
pub struct BrewLog<S: Slots> {
    store: RecordStore<S>,
    entries: Vec<BrewRecord>,
}

/// Summary shown above the entry list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStats {
    pub sessions: usize,
    pub average_rating: Option<f64>,
    pub guest_ratings: usize,
}

impl<S: Slots> BrewLog<S> {
    /// Load the store once and sort it
    pub fn open(store: RecordStore<S>) -> Self {
        let mut log = Self {
            store,
            entries: Vec::new(),
        };
        log.refresh();
        log
    }

    /// Entries ordered by creation time, most recent first
    pub fn entries(&self) -> &[BrewRecord] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&BrewRecord> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn add(&mut self, entry: BrewRecord) -> Result<()> {
        self.store.create(entry)?;
        self.refresh();
        Ok(())
    }

    pub fn edit(&mut self, entry: BrewRecord) -> Result<()> {
        self.store.update(entry)?;
        self.refresh();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.store.delete_by_id(id)?;
        self.refresh();
        Ok(())
    }

    pub fn stats(&self) -> LogStats {
        let sessions = self.entries.len();
        let average_rating = if sessions > 0 {
            let total: u32 = self.entries.iter().map(|e| u32::from(e.rating)).sum();
            Some(f64::from(total) / sessions as f64)
        } else {
            None
        };
        let guest_ratings = self.entries.iter().map(|e| e.guest_ratings.len()).sum();

        LogStats {
            sessions,
            average_rating,
            guest_ratings,
        }
    }

    // Stable sort: entries created at the same instant keep stored order.
    fn refresh(&mut self) {
        let mut entries = self.store.list_all();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.entries = entries;
    }
}
