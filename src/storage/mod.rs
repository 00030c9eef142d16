//! Durable storage for the brew log.
//!
//! A [`Slots`] backend is a small key-value medium holding text values.
//! [`RecordStore`] keeps the whole record list as one JSON document in a
//! single slot and rewrites it on every mutation.

mod document;
mod file_slots;
mod memory_slots;
mod record_store;
mod sqlite_slots;

pub use document::{decode_document, encode_document, Document, StoredEntry, SCHEMA_VERSION};
pub use file_slots::FileSlots;
pub use memory_slots::MemorySlots;
pub use record_store::{RecordStore, ENTRIES_KEY};
pub use sqlite_slots::SqliteSlots;

use crate::error::Result;

/// A local key-value medium. Each `set` replaces the whole value for a key.
pub trait Slots {
    /// Read the value stored under `key`, or `None` if the key was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop `key` entirely. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Slots + ?Sized> Slots for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
