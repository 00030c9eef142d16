use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Slots;
use crate::error::{BrewlogError, Result};

/// Slots stored as one `<key>.json` file each inside a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers see either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    /// Use `dir` as the slot directory, creating it if needed
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(BrewlogError::InvalidOption(format!(
                "storage key '{}' is not a valid file name",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Slots for FileSlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            // Invalid UTF-8 is left for the document decoder to reject
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlots::open(tmp.path()).unwrap();
        assert_eq!(slots.get("coffee-brewing-entries").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let mut slots = FileSlots::open(tmp.path()).unwrap();
        slots.set("entries", "[1,2,3]").unwrap();
        slots.set("entries", "[4]").unwrap();

        let reopened = FileSlots::open(tmp.path()).unwrap();
        assert_eq!(reopened.get("entries").unwrap().as_deref(), Some("[4]"));
        assert!(tmp.path().join("entries.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut slots = FileSlots::open(tmp.path()).unwrap();
        slots.set("entries", "[]").unwrap();
        slots.remove("entries").unwrap();
        slots.remove("entries").unwrap();
        assert_eq!(slots.get("entries").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlots::open(tmp.path()).unwrap();
        assert!(slots.slot_path("../escape").is_err());
        assert!(slots.slot_path("").is_err());
        assert!(slots.slot_path(".hidden").is_err());
    }

    #[test]
    fn test_non_utf8_content_is_returned_lossily() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("entries.json"), [0xff, 0xfe, b'[']).unwrap();
        let slots = FileSlots::open(tmp.path()).unwrap();
        assert!(slots.get("entries").unwrap().is_some());
    }
}
