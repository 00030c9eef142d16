use std::env;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use tracing::debug;

use super::BrewArgs;
use crate::cache::BrewLog;
use crate::config::{Backend, LogbookConfig, Project};
use crate::display;
use crate::draft::{BrewDraft, GuestDraft, GRIND_EQUIPMENT_SUGGESTIONS};
use crate::entity::{BrewRecord, BrewingMethod, GrindCoarseness, WaterSource};
use crate::error::{BrewlogError, Result};
use crate::storage::Slots;

/// Find the logbook root by looking for .brewlog/ in this or a parent directory
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Project::find_root(&cwd).unwrap_or(cwd)
}

fn open_log() -> Result<BrewLog<Box<dyn Slots>>> {
    let root = find_project_root();
    Project::open(&root)?.open_log()
}

/// Resolve a full id or unique id prefix against the log
fn resolve_entry<S: Slots>(log: &BrewLog<S>, id: &str) -> Result<BrewRecord> {
    if let Some(entry) = log.get(id) {
        return Ok(entry.clone());
    }

    let mut matches = log.entries().iter().filter(|e| e.id.starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(entry), None) if !id.is_empty() => Ok(entry.clone()),
        (Some(_), Some(_)) => Err(BrewlogError::AmbiguousId(id.to_string())),
        _ => Err(BrewlogError::EntryNotFound(id.to_string())),
    }
}

/// Parse a guest rating given as "RATING" or "RATING:COMMENT"
fn parse_guest(s: &str) -> Result<GuestDraft> {
    let (rating, comment) = match s.split_once(':') {
        Some((rating, comment)) => (rating, comment),
        None => (s, ""),
    };
    let rating: u8 = rating.trim().parse().map_err(|_| {
        BrewlogError::InvalidOption(format!(
            "Invalid guest rating '{}'. Expected 'RATING' or 'RATING:COMMENT'",
            s
        ))
    })?;
    Ok(GuestDraft {
        id: None,
        rating,
        comment: comment.trim().to_string(),
    })
}

/// Overlay command-line fields onto a draft.
///
/// A method change applies that method's preset dose before any explicit
/// --grams/--water, so explicit amounts always win.
fn apply_args(draft: &mut BrewDraft, args: BrewArgs) -> Result<()> {
    if let Some(method) = args.method {
        if method != draft.brewing_method {
            draft.select_method(method);
        }
    }
    if let Some(producer) = args.producer {
        draft.coffee_producer = producer;
    }
    if let Some(origin) = args.origin {
        draft.country_of_origin = origin;
    }
    if let Some(variety) = args.variety {
        draft.coffee_variety = variety;
    }
    if let Some(grind) = args.grind {
        draft.grind_coarseness = grind;
    }
    if let Some(grinder) = args.grinder {
        draft.grind_equipment = grinder;
    }
    if let Some(grams) = args.grams {
        draft.grams_of_coffee = grams;
    }
    if let Some(water) = args.water {
        draft.milliliters_of_water = water;
    }
    if let Some(source) = args.water_source {
        draft.water_source = source;
    }
    if let Some(people) = args.people {
        draft.number_of_people = people;
    }
    if let Some(minutes) = args.minutes {
        draft.brew_minutes = minutes;
    }
    if let Some(seconds) = args.seconds {
        draft.brew_seconds = seconds;
    }
    if let Some(rating) = args.rating {
        draft.rating = rating;
    }
    if let Some(comment) = args.comment {
        draft.comment = comment;
    }
    for guest in &args.guests {
        draft.guest_ratings.push(parse_guest(guest)?);
    }
    Ok(())
}

pub fn handle_init(backend: Backend, storage_key: Option<String>) -> Result<()> {
    let root = env::current_dir()?;

    let mut config = LogbookConfig {
        backend,
        ..LogbookConfig::default()
    };
    if let Some(key) = storage_key {
        config.storage_key = key;
    }

    let project = Project::init(&root, config)?;
    println!(
        "Initialized brewlog in {} ({} storage)",
        project.dir().display(),
        project.config().backend
    );

    Ok(())
}

pub fn handle_add(args: BrewArgs, json: bool) -> Result<()> {
    let mut log = open_log()?;

    let mut draft = BrewDraft::default();
    apply_args(&mut draft, args)?;
    let entry = draft.into_record(Utc::now())?;
    debug!(id = %entry.id, "logging brew");

    log.add(entry.clone())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!(
            "Logged brew ({}) - {} {}",
            entry.short_id(),
            entry.coffee_producer,
            display::stars(entry.rating)
        );
    }

    Ok(())
}

pub fn handle_list(limit: Option<usize>, json: bool) -> Result<()> {
    let log = open_log()?;
    let shown = limit.unwrap_or(usize::MAX);
    let entries: Vec<&BrewRecord> = log.entries().iter().take(shown).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if log.entries().is_empty() {
        println!("No brews logged yet. Run 'brewlog add' to log your first brew.");
        return Ok(());
    }

    let stats = log.stats();
    let sessions = if stats.sessions == 1 { "session" } else { "sessions" };
    match stats.average_rating {
        Some(avg) => println!("{} {} logged · avg {:.1}★\n", stats.sessions, sessions, avg),
        None => println!("{} {} logged\n", stats.sessions, sessions),
    }
    for entry in entries {
        println!("{}", display::card(entry));
    }

    Ok(())
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let log = open_log()?;
    let entry = resolve_entry(&log, &id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("{}", display::detail(&entry));
    }

    Ok(())
}

pub fn handle_update(id: String, args: BrewArgs, clear_guests: bool, json: bool) -> Result<()> {
    let mut log = open_log()?;
    let existing = resolve_entry(&log, &id)?;

    let mut draft = BrewDraft::from_record(&existing);
    if clear_guests {
        draft.guest_ratings.clear();
    }
    apply_args(&mut draft, args)?;
    let updated = draft.apply_to(&existing, Utc::now())?;

    log.edit(updated)?;

    let updated = log
        .get(&existing.id)
        .cloned()
        .ok_or_else(|| BrewlogError::EntryNotFound(existing.id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated brew ({}) - {}",
            updated.short_id(),
            updated.coffee_producer
        );
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let mut log = open_log()?;
    let entry = resolve_entry(&log, &id)?;

    // Confirm deletion unless --force is used
    if !force {
        eprintln!(
            "Delete brew ({}) - {} from {}? [y/N] ",
            entry.short_id(),
            entry.coffee_producer,
            display::format_date(&entry.created_at)
        );

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(BrewlogError::InvalidOption(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    log.remove(&entry.id)?;

    println!(
        "Deleted brew ({}) - {}",
        entry.short_id(),
        entry.coffee_producer
    );

    Ok(())
}

pub fn handle_stats(json: bool) -> Result<()> {
    let log = open_log()?;
    let stats = log.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Sessions:      {}", stats.sessions);
    match stats.average_rating {
        Some(avg) => println!("Average:       {:.1}★", avg),
        None => println!("Average:       -"),
    }
    println!("Guest ratings: {}", stats.guest_ratings);

    Ok(())
}

pub fn handle_options() -> Result<()> {
    println!("Brewing methods:");
    for method in BrewingMethod::ALL {
        match method.default_dose() {
            Some(dose) => println!(
                "  {:<14} {} (default {}g / {}ml)",
                method.to_string(),
                method.label(),
                display::format_amount(dose.grams_of_coffee),
                display::format_amount(dose.milliliters_of_water)
            ),
            None => println!("  {:<14} {}", method.to_string(), method.label()),
        }
    }

    println!("\nGrind coarseness:");
    for grind in GrindCoarseness::ALL {
        println!("  {:<14} {}", grind.to_string(), grind.label());
    }

    println!("\nWater sources:");
    for source in WaterSource::ALL {
        println!("  {:<18} {}", source.to_string(), source.label());
    }

    println!("\nGrinder suggestions: {}", GRIND_EQUIPMENT_SUGGESTIONS.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::fixtures::make_entry;
    use crate::storage::{MemorySlots, RecordStore};

    fn log_with(ids: &[&str]) -> BrewLog<MemorySlots> {
        let mut log = BrewLog::open(RecordStore::new(MemorySlots::new()));
        for id in ids {
            log.add(make_entry(id, "2024-01-01T00:00:00Z")).unwrap();
        }
        log
    }

    #[test]
    fn test_resolve_by_full_id_and_prefix() {
        let log = log_with(&["abc123", "abd456", "abc"]);
        assert_eq!(resolve_entry(&log, "abc").unwrap().id, "abc");
        assert_eq!(resolve_entry(&log, "abd").unwrap().id, "abd456");
    }

    #[test]
    fn test_resolve_ambiguous_and_missing() {
        let log = log_with(&["abc123", "abc456"]);
        assert!(matches!(
            resolve_entry(&log, "abc"),
            Err(BrewlogError::AmbiguousId(_))
        ));
        assert!(matches!(
            resolve_entry(&log, "zzz"),
            Err(BrewlogError::EntryNotFound(_))
        ));
        assert!(matches!(
            resolve_entry(&log, ""),
            Err(BrewlogError::AmbiguousId(_))
        ));
    }

    #[test]
    fn test_parse_guest() {
        let guest = parse_guest("4:Loved it: very sweet").unwrap();
        assert_eq!(guest.rating, 4);
        assert_eq!(guest.comment, "Loved it: very sweet");

        let guest = parse_guest("5").unwrap();
        assert_eq!(guest.rating, 5);
        assert!(guest.comment.is_empty());

        assert!(parse_guest("great:5").is_err());
    }

    #[test]
    fn test_apply_args_explicit_amounts_beat_preset() {
        let mut draft = BrewDraft::default();
        let args = BrewArgs {
            method: Some(BrewingMethod::Aeropress),
            grams: Some(16.0),
            ..BrewArgs::default()
        };
        apply_args(&mut draft, args).unwrap();

        assert_eq!(draft.grams_of_coffee, 16.0);
        assert_eq!(draft.milliliters_of_water, 200.0);
    }

    #[test]
    fn test_apply_args_same_method_keeps_amounts() {
        let mut draft = BrewDraft::from_record(&make_entry("a", "2024-01-01T00:00:00Z"));
        let args = BrewArgs {
            method: Some(BrewingMethod::PourOver),
            ..BrewArgs::default()
        };
        apply_args(&mut draft, args).unwrap();

        assert_eq!(draft.grams_of_coffee, 15.0);
        assert_eq!(draft.milliliters_of_water, 250.0);
    }
}
