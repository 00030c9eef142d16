mod commands;
mod handlers;

pub use commands::{BrewArgs, Cli, Commands};
pub use handlers::{
    handle_add, handle_delete, handle_get, handle_init, handle_list, handle_options,
    handle_stats, handle_update,
};
