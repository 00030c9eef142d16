use clap::Parser;
use tracing_subscriber::EnvFilter;

use brewlog::cli::{
    handle_add, handle_delete, handle_get, handle_init, handle_list, handle_options,
    handle_stats, handle_update, Cli, Commands,
};

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "brewlog=debug" } else { "brewlog=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            backend,
            storage_key,
        } => handle_init(backend, storage_key),
        Commands::Add { brew, json } => handle_add(brew, json),
        Commands::List { limit, json } => handle_list(limit, json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Update {
            id,
            brew,
            clear_guests,
            json,
        } => handle_update(id, brew, clear_guests, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Stats { json } => handle_stats(json),
        Commands::Options => handle_options(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
