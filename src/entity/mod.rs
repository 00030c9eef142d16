mod grind;
mod method;
mod water;

pub use grind::GrindCoarseness;
pub use method::{BrewingMethod, Dose};
pub use water::WaterSource;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Timestamps are written as UTC with millisecond precision,
/// e.g. `2024-03-15T10:00:00.000Z`. Any RFC 3339 offset is accepted on read.
fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A guest's opinion of a brew, kept in the order guests were added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRating {
    pub id: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GuestRating {
    pub fn new(rating: u8, comment: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            rating,
            comment,
        }
    }
}

/// One logged brewing session.
///
/// Field names serialize in camelCase so the stored document keeps the
/// layout used by earlier versions of the logbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewRecord {
    pub id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    pub coffee_producer: String,
    pub country_of_origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_variety: Option<String>,
    pub grind_coarseness: GrindCoarseness,
    pub grind_equipment: String,
    pub brewing_method: BrewingMethod,
    pub grams_of_coffee: f64,
    pub milliliters_of_water: f64,
    pub water_source: WaterSource,
    pub number_of_people: u32,
    pub brew_time_seconds: u32,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub guest_ratings: Vec<GuestRating>,
}

impl BrewRecord {
    /// First seven characters of the id, for compact listings
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// Water-to-coffee ratio, e.g. 16.7 for a 1:16.7 brew
    pub fn brew_ratio(&self) -> f64 {
        self.milliliters_of_water / self.grams_of_coffee
    }

    /// True once the record has been edited after creation
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Mark the record as modified at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Structural problems that would make the record unsafe to display.
    ///
    /// Typed decoding already guarantees enum literals and field types; this
    /// covers the cross-field invariants that serde cannot express.
    pub fn shape_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("id must not be empty".to_string());
        }
        if self.updated_at < self.created_at {
            errors.push(format!(
                "{}: updatedAt precedes createdAt",
                self.short_id()
            ));
        }
        if !(1..=5).contains(&self.rating) {
            errors.push(format!("{}: rating {} out of range", self.short_id(), self.rating));
        }
        if !(self.grams_of_coffee > 0.0) {
            errors.push(format!("{}: gramsOfCoffee must be positive", self.short_id()));
        }
        for guest in &self.guest_ratings {
            if !(1..=5).contains(&guest.rating) {
                errors.push(format!(
                    "{}: guest rating {} out of range",
                    self.short_id(),
                    guest.rating
                ));
            }
        }

        errors
    }
}
