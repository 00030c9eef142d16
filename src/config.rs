//! Project layout and configuration.
//!
//! A logbook lives in a `.brewlog/` directory. Its `config.yaml` selects the
//! storage backend and the slot key the entries are kept under.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::BrewLog;
use crate::error::{BrewlogError, Result};
use crate::storage::{FileSlots, RecordStore, Slots, SqliteSlots, ENTRIES_KEY};

pub const BREWLOG_DIR: &str = ".brewlog";
pub const CONFIG_FILE: &str = "config.yaml";
const SQLITE_DB: &str = "brewlog.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per slot
    #[default]
    File,
    /// A single SQLite database
    Sqlite,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Backend::File),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(format!("Invalid backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogbookConfig {
    pub backend: Backend,
    pub storage_key: String,
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            storage_key: ENTRIES_KEY.to_string(),
        }
    }
}

impl LogbookConfig {
    /// Read `config.yaml` from a brewlog directory, falling back to defaults
    /// when the file does not exist
    pub fn load(brewlog_dir: &Path) -> Result<Self> {
        let path = brewlog_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: LogbookConfig = serde_yaml::from_str(&content)?;
        if config.storage_key.trim().is_empty() {
            return Err(BrewlogError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn save(&self, brewlog_dir: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(brewlog_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

/// An initialized logbook directory and its configuration
#[derive(Debug, Clone)]
pub struct Project {
    dir: PathBuf,
    config: LogbookConfig,
}

impl Project {
    /// Create `.brewlog/` under `root` and write its config
    pub fn init(root: &Path, config: LogbookConfig) -> Result<Self> {
        let dir = root.join(BREWLOG_DIR);
        if dir.exists() {
            return Err(BrewlogError::AlreadyInitialized);
        }
        fs::create_dir_all(&dir)?;
        config.save(&dir)?;

        let project = Self { dir, config };
        // Open the backend once so an unusable setup fails here
        project.open_slots()?;
        Ok(project)
    }

    /// Open the logbook at `root`
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(BREWLOG_DIR);
        if !dir.is_dir() {
            return Err(BrewlogError::NotInitialized);
        }
        let config = LogbookConfig::load(&dir)?;
        debug!(dir = %dir.display(), backend = %config.backend, "opened project");
        Ok(Self { dir, config })
    }

    /// Walk up from `start` to the nearest directory containing `.brewlog/`
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(BREWLOG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &LogbookConfig {
        &self.config
    }

    /// Open the configured storage backend
    pub fn open_slots(&self) -> Result<Box<dyn Slots>> {
        let slots: Box<dyn Slots> = match self.config.backend {
            Backend::File => Box::new(FileSlots::open(&self.dir)?),
            Backend::Sqlite => Box::new(SqliteSlots::open(&self.dir.join(SQLITE_DB))?),
        };
        Ok(slots)
    }

    pub fn open_store(&self) -> Result<RecordStore<Box<dyn Slots>>> {
        Ok(RecordStore::with_key(
            self.open_slots()?,
            &self.config.storage_key,
        ))
    }

    pub fn open_log(&self) -> Result<BrewLog<Box<dyn Slots>>> {
        Ok(BrewLog::open(self.open_store()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::fixtures::make_entry;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_brewlog_directory() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path(), LogbookConfig::default()).unwrap();

        assert!(tmp.path().join(".brewlog").is_dir());
        assert!(tmp.path().join(".brewlog/config.yaml").exists());
    }

    #[test]
    fn test_init_fails_if_already_initialized() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path(), LogbookConfig::default()).unwrap();

        let result = Project::init(tmp.path(), LogbookConfig::default());
        assert!(matches!(result, Err(BrewlogError::AlreadyInitialized)));
    }

    #[test]
    fn test_open_fails_if_not_initialized() {
        let tmp = TempDir::new().unwrap();
        let result = Project::open(tmp.path());
        assert!(matches!(result, Err(BrewlogError::NotInitialized)));
    }

    #[test]
    fn test_config_round_trip() {
        let tmp = TempDir::new().unwrap();
        let config = LogbookConfig {
            backend: Backend::Sqlite,
            storage_key: "weekend-brews".to_string(),
        };
        Project::init(tmp.path(), config.clone()).unwrap();

        let project = Project::open(tmp.path()).unwrap();
        assert_eq!(project.config(), &config);
        assert!(tmp.path().join(".brewlog/brewlog.db").exists());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".brewlog")).unwrap();

        let project = Project::open(tmp.path()).unwrap();
        assert_eq!(project.config(), &LogbookConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".brewlog");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), "backend: sqlite\n").unwrap();

        let config = LogbookConfig::load(&dir).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.storage_key, ENTRIES_KEY);
    }

    #[test]
    fn test_empty_storage_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "storage_key: ''\n").unwrap();
        assert!(matches!(
            LogbookConfig::load(tmp.path()),
            Err(BrewlogError::Config(_))
        ));
    }

    #[test]
    fn test_find_root_walks_up() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path(), LogbookConfig::default()).unwrap();
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(Project::find_root(&nested), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn test_both_backends_persist_entries() {
        for backend in [Backend::File, Backend::Sqlite] {
            let tmp = TempDir::new().unwrap();
            let config = LogbookConfig {
                backend,
                ..LogbookConfig::default()
            };
            let project = Project::init(tmp.path(), config).unwrap();

            let mut log = project.open_log().unwrap();
            log.add(make_entry("a", "2024-01-01T00:00:00Z")).unwrap();

            let reopened = Project::open(tmp.path()).unwrap().open_log().unwrap();
            assert_eq!(reopened.entries().len(), 1, "backend {}", backend);
        }
    }
}
