use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewlogError {
    #[error("Not in a brewlog project. Run 'brewlog init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .brewlog/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Brew not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous brew id '{0}' matches more than one entry")]
    AmbiguousId(String),

    #[error("Invalid brew:\n  {}", .0.join("\n  "))]
    Validation(Vec<String>),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Stored brews use schema version {0}, which this version of brewlog cannot write. Upgrade brewlog.")]
    UnsupportedSchema(u32),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, BrewlogError>;
