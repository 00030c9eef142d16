use clap::{Args, Parser, Subcommand};

use crate::config::Backend;
use crate::entity::{BrewingMethod, GrindCoarseness, WaterSource};

#[derive(Parser, Debug)]
#[command(name = "brewlog")]
#[command(version, about = "A local-first logbook for coffee brewing sessions")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log storage activity to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new brew log in the current directory
    Init {
        /// Storage backend (file, sqlite)
        #[arg(long, default_value = "file")]
        backend: Backend,

        /// Key the entries are stored under
        #[arg(long)]
        storage_key: Option<String>,
    },

    /// Log a new brew
    Add {
        #[command(flatten)]
        brew: BrewArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List brews, newest first
    List {
        /// Show at most this many brews
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single brew
    Get {
        /// Brew ID (full UUID or unique prefix like "a1b2c")
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing brew
    Update {
        /// Brew ID (full UUID or unique prefix)
        id: String,

        #[command(flatten)]
        brew: BrewArgs,

        /// Drop existing guest ratings before adding any given with --guest
        #[arg(long)]
        clear_guests: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a brew
    Delete {
        /// Brew ID (full UUID or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show session count and average rating
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List accepted values for methods, grinds and water sources
    Options,
}

/// Brew fields shared by `add` and `update`.
///
/// Everything is optional here; missing required fields are reported by
/// draft validation so `add` and `update` share one set of messages.
#[derive(Args, Debug, Default, Clone)]
pub struct BrewArgs {
    /// Coffee producer or roaster
    #[arg(long)]
    pub producer: Option<String>,

    /// Country of origin
    #[arg(long)]
    pub origin: Option<String>,

    /// Coffee variety
    #[arg(long)]
    pub variety: Option<String>,

    /// Grind coarseness (extra-fine .. extra-coarse)
    #[arg(long)]
    pub grind: Option<GrindCoarseness>,

    /// Grinder used
    #[arg(long)]
    pub grinder: Option<String>,

    /// Brewing method (pour-over, aeropress, french-press, ...)
    #[arg(long)]
    pub method: Option<BrewingMethod>,

    /// Grams of coffee
    #[arg(long)]
    pub grams: Option<f64>,

    /// Milliliters of water
    #[arg(long)]
    pub water: Option<f64>,

    /// Water source (tap, filtered-tap, bottled-still, ...)
    #[arg(long)]
    pub water_source: Option<WaterSource>,

    /// Number of people served
    #[arg(long)]
    pub people: Option<u32>,

    /// Brew time, minutes part
    #[arg(long)]
    pub minutes: Option<u32>,

    /// Brew time, seconds part
    #[arg(long)]
    pub seconds: Option<u32>,

    /// Your rating, 1-5
    #[arg(long, short = 'r')]
    pub rating: Option<u8>,

    /// Tasting notes
    #[arg(long, short = 'c')]
    pub comment: Option<String>,

    /// Guest rating as "RATING" or "RATING:COMMENT" (can be repeated)
    #[arg(long = "guest", short = 'g')]
    pub guests: Vec<String>,
}
