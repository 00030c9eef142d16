use tracing::{debug, warn};

use super::{decode_document, encode_document, Document, Slots};
use crate::entity::BrewRecord;
use crate::error::Result;

/// Slot key holding the serialized entry list
pub const ENTRIES_KEY: &str = "coffee-brewing-entries";

/// The canonical list of brew records, persisted as one document.
///
/// The store does not validate what it is given and does not enforce id
/// uniqueness; callers hand it complete records with fresh ids.
pub struct RecordStore<S: Slots> {
    slots: S,
    key: String,
}

impl<S: Slots> RecordStore<S> {
    /// Store entries under the default key
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, ENTRIES_KEY)
    }

    pub fn with_key(slots: S, key: &str) -> Self {
        Self {
            slots,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying slots
    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// All stored entries in stored order.
    ///
    /// Never fails: a missing, unreadable or corrupt document reads as empty,
    /// and entries that cannot be read are left out.
    pub fn list_all(&self) -> Vec<BrewRecord> {
        match self.load() {
            Ok(doc) => doc.records(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read entries, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append `entry` and rewrite the document
    pub fn create(&mut self, entry: BrewRecord) -> Result<()> {
        let mut doc = self.load()?;
        debug!(id = %entry.id, count = doc.len() + 1, "creating entry");
        doc.push(entry);
        self.write(&doc)
    }

    /// Replace the entry with the same id. Unknown ids are ignored.
    pub fn update(&mut self, entry: BrewRecord) -> Result<()> {
        let mut doc = self.load()?;
        let id = entry.id.clone();
        if doc.replace(entry) {
            debug!(id = %id, "updating entry");
            self.write(&doc)
        } else {
            debug!(id = %id, "update ignored, no such entry");
            Ok(())
        }
    }

    /// Remove the entry with `id`. Unknown ids are ignored.
    pub fn delete_by_id(&mut self, id: &str) -> Result<()> {
        let mut doc = self.load()?;
        if !doc.remove(id) {
            debug!(id, "delete ignored, no such entry");
            return Ok(());
        }
        debug!(id, "deleting entry");
        self.write(&doc)
    }

    // Slot errors and newer schema versions propagate so a failed read is
    // never followed by a write that would replace the stored list. Corrupt
    // content is not an error.
    fn load(&self) -> Result<Document> {
        match self.slots.get(&self.key)? {
            Some(raw) => decode_document(&raw),
            None => Ok(Document::default()),
        }
    }

    fn write(&mut self, doc: &Document) -> Result<()> {
        let raw = encode_document(doc)?;
        self.slots.set(&self.key, &raw)
    }
}
