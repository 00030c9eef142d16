//! Encoding of the stored entries document.
//!
//! Current layout: `{"version": 1, "entries": [ ... ]}`. A bare JSON array
//! of entries is also accepted on read; it is what the logbook stored before
//! the version tag existed and is upgraded on the next write.
//!
//! Entries that cannot be read as a [`BrewRecord`] stay in the document as
//! raw JSON. They are hidden from listings but written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::entity::BrewRecord;
use crate::error::{BrewlogError, Result};

pub const SCHEMA_VERSION: u32 = 1;

/// One slot of the stored entry list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Record(BrewRecord),
    /// Kept verbatim because it did not decode or broke record invariants
    Unreadable(Value),
}

impl StoredEntry {
    fn from_value(index: usize, value: Value) -> Self {
        match serde_json::from_value::<BrewRecord>(value.clone()) {
            Ok(entry) => {
                let problems = entry.shape_errors();
                if problems.is_empty() {
                    StoredEntry::Record(entry)
                } else {
                    warn!(index, problems = ?problems, "skipping malformed entry");
                    StoredEntry::Unreadable(value)
                }
            }
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable entry");
                StoredEntry::Unreadable(value)
            }
        }
    }

    /// The entry's id, read from the raw value when it is unreadable
    pub fn id(&self) -> Option<&str> {
        match self {
            StoredEntry::Record(entry) => Some(&entry.id),
            StoredEntry::Unreadable(value) => value.get("id").and_then(Value::as_str),
        }
    }
}

/// The decoded contents of the entries slot, in stored order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<StoredEntry>,
}

impl Document {
    pub fn from_records(records: Vec<BrewRecord>) -> Self {
        Self {
            entries: records.into_iter().map(StoredEntry::Record).collect(),
        }
    }

    /// Readable records only, in stored order
    pub fn records(&self) -> Vec<BrewRecord> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                StoredEntry::Record(entry) => Some(entry.clone()),
                StoredEntry::Unreadable(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries hidden from [`Document::records`]
    pub fn unreadable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, StoredEntry::Unreadable(_)))
            .count()
    }

    pub fn push(&mut self, entry: BrewRecord) {
        self.entries.push(StoredEntry::Record(entry));
    }

    /// Replace the first entry with the same id. Returns false if none matched.
    pub fn replace(&mut self, entry: BrewRecord) -> bool {
        match self.entries.iter().position(|e| e.id() == Some(entry.id.as_str())) {
            Some(index) => {
                self.entries[index] = StoredEntry::Record(entry);
                true
            }
            None => false,
        }
    }

    /// Drop every entry with `id`. Returns false if none matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != Some(id));
        self.entries.len() != before
    }
}

#[derive(Serialize)]
struct DocumentOut<'a> {
    version: u32,
    entries: &'a [StoredEntry],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentIn {
    Versioned { version: u32, entries: Vec<Value> },
    Legacy(Vec<Value>),
}

/// Serialize `doc` as a versioned document
pub fn encode_document(doc: &Document) -> Result<String> {
    let out = DocumentOut {
        version: SCHEMA_VERSION,
        entries: &doc.entries,
    };
    Ok(serde_json::to_string(&out)?)
}

/// Decode a stored document for a read-modify-write cycle.
///
/// Content that is not a recognizable document yields an empty document.
/// A document written by a newer schema is an error, so it is never
/// replaced by a write from this version.
pub fn decode_document(raw: &str) -> Result<Document> {
    if raw.trim().is_empty() {
        return Ok(Document::default());
    }

    let values = match serde_json::from_str::<DocumentIn>(raw) {
        Ok(DocumentIn::Versioned { version, .. }) if version > SCHEMA_VERSION => {
            return Err(BrewlogError::UnsupportedSchema(version));
        }
        Ok(DocumentIn::Versioned { entries, .. }) => entries,
        Ok(DocumentIn::Legacy(entries)) => entries,
        Err(e) => {
            warn!(error = %e, "stored entries are not valid JSON, treating as empty");
            return Ok(Document::default());
        }
    };

    let doc = Document {
        entries: values
            .into_iter()
            .enumerate()
            .map(|(index, value)| StoredEntry::from_value(index, value))
            .collect(),
    };

    let skipped = doc.unreadable_count();
    if skipped > 0 {
        warn!(
            kept = doc.len() - skipped,
            skipped, "some stored entries could not be read"
        );
    }

    Ok(doc)
}
