//! Brew drafts: the editable, not-yet-validated form of a brew record.
//!
//! The store trusts whatever it is given, so every record created or edited
//! through the CLI passes through [`BrewDraft::validate`] first.

use chrono::{DateTime, Utc};

use crate::entity::{BrewRecord, BrewingMethod, GrindCoarseness, GuestRating, WaterSource};
use crate::error::{BrewlogError, Result};

/// Grinders offered as completions when entering grind equipment
pub const GRIND_EQUIPMENT_SUGGESTIONS: &[&str] = &["Knock Aergrind", "Wilfa Svart"];

#[derive(Debug, Clone, PartialEq)]
pub struct GuestDraft {
    /// Kept when editing an existing guest rating; assigned on save otherwise
    pub id: Option<String>,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrewDraft {
    pub coffee_producer: String,
    pub country_of_origin: String,
    pub coffee_variety: String,
    pub grind_coarseness: GrindCoarseness,
    pub grind_equipment: String,
    pub brewing_method: BrewingMethod,
    pub grams_of_coffee: f64,
    pub milliliters_of_water: f64,
    pub water_source: WaterSource,
    pub number_of_people: u32,
    pub brew_minutes: u32,
    pub brew_seconds: u32,
    /// 0 means no rating chosen yet
    pub rating: u8,
    pub comment: String,
    pub guest_ratings: Vec<GuestDraft>,
}

impl Default for BrewDraft {
    fn default() -> Self {
        Self {
            coffee_producer: String::new(),
            country_of_origin: String::new(),
            coffee_variety: String::new(),
            grind_coarseness: GrindCoarseness::Medium,
            grind_equipment: String::new(),
            brewing_method: BrewingMethod::PourOver,
            grams_of_coffee: 30.0,
            milliliters_of_water: 500.0,
            water_source: WaterSource::FilteredTap,
            number_of_people: 1,
            brew_minutes: 3,
            brew_seconds: 0,
            rating: 0,
            comment: String::new(),
            guest_ratings: Vec::new(),
        }
    }
}

impl BrewDraft {
    /// Prefill a draft from a stored record, splitting brew time back into
    /// minutes and seconds
    pub fn from_record(record: &BrewRecord) -> Self {
        Self {
            coffee_producer: record.coffee_producer.clone(),
            country_of_origin: record.country_of_origin.clone(),
            coffee_variety: record.coffee_variety.clone().unwrap_or_default(),
            grind_coarseness: record.grind_coarseness,
            grind_equipment: record.grind_equipment.clone(),
            brewing_method: record.brewing_method,
            grams_of_coffee: record.grams_of_coffee,
            milliliters_of_water: record.milliliters_of_water,
            water_source: record.water_source,
            number_of_people: record.number_of_people,
            brew_minutes: record.brew_time_seconds / 60,
            brew_seconds: record.brew_time_seconds % 60,
            rating: record.rating,
            comment: record.comment.clone().unwrap_or_default(),
            guest_ratings: record
                .guest_ratings
                .iter()
                .map(|g| GuestDraft {
                    id: Some(g.id.clone()),
                    rating: g.rating,
                    comment: g.comment.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Switch brewing method, applying the method's preset dose if it has one
    pub fn select_method(&mut self, method: BrewingMethod) {
        self.brewing_method = method;
        if let Some(dose) = method.default_dose() {
            self.grams_of_coffee = dose.grams_of_coffee;
            self.milliliters_of_water = dose.milliliters_of_water;
        }
    }

    pub fn brew_time_seconds(&self) -> u32 {
        self.brew_minutes * 60 + self.brew_seconds
    }

    /// Returns an empty `Vec` if valid; otherwise human-readable errors.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.coffee_producer.trim().is_empty() {
            errors.push("Coffee producer is required".to_string());
        }
        if self.country_of_origin.trim().is_empty() {
            errors.push("Country of origin is required".to_string());
        }
        if self.grind_equipment.trim().is_empty() {
            errors.push("Grind equipment is required".to_string());
        }

        if !(self.grams_of_coffee >= 1.0) {
            errors.push("Must be at least 1g".to_string());
        } else if self.grams_of_coffee > 1000.0 {
            errors.push("Max 1000g".to_string());
        }

        if !(self.milliliters_of_water >= 1.0) {
            errors.push("Must be at least 1ml".to_string());
        } else if self.milliliters_of_water > 10000.0 {
            errors.push("Max 10000ml".to_string());
        }

        if self.number_of_people < 1 {
            errors.push("At least 1 person".to_string());
        } else if self.number_of_people > 100 {
            errors.push("Max 100 people".to_string());
        }

        if self.brew_minutes > 60 {
            errors.push("Brew minutes must be between 0 and 60".to_string());
        }
        if self.brew_seconds > 59 {
            errors.push("Brew seconds must be between 0 and 59".to_string());
        }

        if !(1..=5).contains(&self.rating) {
            errors.push("Please select a rating".to_string());
        }

        for (index, guest) in self.guest_ratings.iter().enumerate() {
            if !(1..=5).contains(&guest.rating) {
                errors.push(format!("Guest {} rating must be between 1 and 5", index + 1));
            }
        }

        errors
    }

    /// Build a new record with a fresh id, created and updated at `now`
    pub fn into_record(self, now: DateTime<Utc>) -> Result<BrewRecord> {
        self.ensure_valid()?;
        let id = uuid::Uuid::new_v4().to_string();
        Ok(self.build(id, now, now))
    }

    /// Apply the draft to `existing`, keeping its id and creation time and
    /// refreshing its update time to `now`
    pub fn apply_to(self, existing: &BrewRecord, now: DateTime<Utc>) -> Result<BrewRecord> {
        self.ensure_valid()?;
        let mut record = self.build(existing.id.clone(), existing.created_at, existing.updated_at);
        record.touch(now);
        Ok(record)
    }

    fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BrewlogError::Validation(errors))
        }
    }

    fn build(self, id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> BrewRecord {
        let brew_time_seconds = self.brew_time_seconds();
        BrewRecord {
            id,
            created_at,
            updated_at,
            coffee_producer: self.coffee_producer.trim().to_string(),
            country_of_origin: self.country_of_origin.trim().to_string(),
            coffee_variety: non_empty(self.coffee_variety),
            grind_coarseness: self.grind_coarseness,
            grind_equipment: self.grind_equipment.trim().to_string(),
            brewing_method: self.brewing_method,
            grams_of_coffee: self.grams_of_coffee,
            milliliters_of_water: self.milliliters_of_water,
            water_source: self.water_source,
            number_of_people: self.number_of_people,
            brew_time_seconds,
            rating: self.rating,
            comment: non_empty(self.comment),
            guest_ratings: self
                .guest_ratings
                .into_iter()
                .map(|g| match g.id {
                    Some(id) => GuestRating {
                        id,
                        rating: g.rating,
                        comment: non_empty(g.comment),
                    },
                    None => GuestRating::new(g.rating, non_empty(g.comment)),
                })
                .collect(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
