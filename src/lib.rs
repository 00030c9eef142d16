pub mod cache;
pub mod cli;
pub mod config;
pub mod display;
pub mod draft;
pub mod entity;
pub mod error;
pub mod storage;

pub use cache::{BrewLog, LogStats};
pub use config::{LogbookConfig, Project};
pub use draft::BrewDraft;
pub use entity::BrewRecord;
pub use error::{BrewlogError, Result};
pub use storage::{RecordStore, Slots};
