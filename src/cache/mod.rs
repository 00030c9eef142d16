mod brew_log;

pub use brew_log::{BrewLog, LogStats};
