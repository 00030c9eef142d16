//! Text formatting for brew records

use chrono::{DateTime, Local, Utc};

use crate::entity::BrewRecord;

/// Brew time as `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Ratio as `1:16.7`
pub fn format_ratio(record: &BrewRecord) -> String {
    format!("1:{:.1}", record.brew_ratio())
}

/// Rating as filled and empty stars, e.g. `★★★☆☆`
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Amounts drop a trailing `.0` so `15.0` prints as `15`
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Short local date, e.g. `Mar 15, 2024`
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Long local date with time, e.g. `March 15, 2024 10:00`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%B %-d, %Y %H:%M").to_string()
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// One-line summary plus an optional quoted comment, as shown in listings
pub fn card(record: &BrewRecord) -> String {
    let mut origin = record.country_of_origin.clone();
    if let Some(ref variety) = record.coffee_variety {
        origin.push_str(&format!(", {}", variety));
    }

    let mut line = format!(
        "  {} {} {}  [{}]  {}\n      {} · {} · {}g · {}ml · {}",
        record.short_id(),
        stars(record.rating),
        record.coffee_producer,
        origin,
        format_date(&record.created_at),
        record.brewing_method.label(),
        format_time(record.brew_time_seconds),
        format_amount(record.grams_of_coffee),
        format_amount(record.milliliters_of_water),
        format_ratio(record),
    );

    if record.number_of_people > 1 {
        line.push_str(&format!(" · {} people", record.number_of_people));
    }
    if !record.guest_ratings.is_empty() {
        line.push_str(&format!(
            " · {}",
            plural(record.guest_ratings.len(), "guest rating", "guest ratings")
        ));
    }
    if let Some(ref comment) = record.comment {
        line.push_str(&format!("\n      \"{}\"", comment));
    }
    line
}

/// Full multi-line view of a record
pub fn detail(record: &BrewRecord) -> String {
    let mut out = Vec::new();

    out.push(format!("{} ({})", record.coffee_producer, record.id));
    out.push(format!("Origin: {}", record.country_of_origin));
    if let Some(ref variety) = record.coffee_variety {
        out.push(format!("Variety: {}", variety));
    }
    out.push(format!("Rating: {} ({}/5)", stars(record.rating), record.rating));
    out.push(format!("Logged: {}", format_timestamp(&record.created_at)));
    if record.was_edited() {
        out.push(format!("Edited: {}", format_date(&record.updated_at)));
    }

    out.push(String::new());
    out.push(format!("Method:    {}", record.brewing_method.label()));
    out.push(format!("Grind:     {}", record.grind_coarseness.label()));
    out.push(format!("Grinder:   {}", record.grind_equipment));
    out.push(format!("Coffee:    {}g", format_amount(record.grams_of_coffee)));
    out.push(format!(
        "Water:     {}ml ({})",
        format_amount(record.milliliters_of_water),
        record.water_source.label()
    ));
    out.push(format!("Ratio:     {}", format_ratio(record)));
    out.push(format!("Brew Time: {}", format_time(record.brew_time_seconds)));
    out.push(format!(
        "Served:    {}",
        plural(record.number_of_people as usize, "person", "people")
    ));

    if let Some(ref comment) = record.comment {
        out.push(String::new());
        out.push("Notes:".to_string());
        out.push(format!("  {}", comment));
    }

    if !record.guest_ratings.is_empty() {
        out.push(String::new());
        out.push(format!("Guest Ratings ({}):", record.guest_ratings.len()));
        for (index, guest) in record.guest_ratings.iter().enumerate() {
            match guest.comment {
                Some(ref comment) => out.push(format!(
                    "  Guest {}: {}  {}",
                    index + 1,
                    stars(guest.rating),
                    comment
                )),
                None => out.push(format!("  Guest {}: {}", index + 1, stars(guest.rating))),
            }
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::fixtures::{make_entry, timestamp};
    use crate::entity::GuestRating;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(45), "0:45");
    }

    #[test]
    fn test_format_ratio() {
        let entry = make_entry("a", "2024-01-01T00:00:00Z");
        assert_eq!(format_ratio(&entry), "1:16.7");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(7), "★★★★★");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15.0), "15");
        assert_eq!(format_amount(17.5), "17.5");
    }

    #[test]
    fn test_card_mentions_guests_and_people() {
        let mut entry = make_entry("abcdefghij", "2024-01-01T00:00:00Z");
        entry.number_of_people = 3;
        entry.guest_ratings.push(GuestRating::new(5, None));

        let text = card(&entry);
        assert!(text.contains("abcdefg"));
        assert!(text.contains("Pour Over"));
        assert!(text.contains("3 people"));
        assert!(text.contains("1 guest rating"));
        assert!(!text.contains("1 guest ratings"));
        assert!(text.contains("\"Bright and fruity\""));
    }

    #[test]
    fn test_detail_shows_edit_date_only_when_edited() {
        let mut entry = make_entry("a", "2024-01-01T00:00:00Z");
        assert!(!detail(&entry).contains("Edited:"));

        entry.touch(timestamp("2024-02-01T00:00:00Z"));
        let text = detail(&entry);
        assert!(text.contains("Edited:"));
        assert!(text.contains("Filtered Tap"));
        assert!(text.contains("Served:    1 person"));
    }
}
