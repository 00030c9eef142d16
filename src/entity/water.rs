// src/entity/water.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WaterSource {
    Tap,
    #[default]
    FilteredTap,
    BottledStill,
    BottledSparkling,
    Spring,
    Other,
}

impl WaterSource {
    pub const ALL: [WaterSource; 6] = [
        WaterSource::Tap,
        WaterSource::FilteredTap,
        WaterSource::BottledStill,
        WaterSource::BottledSparkling,
        WaterSource::Spring,
        WaterSource::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WaterSource::Tap => "Tap",
            WaterSource::FilteredTap => "Filtered Tap",
            WaterSource::BottledStill => "Bottled Still",
            WaterSource::BottledSparkling => "Bottled Sparkling",
            WaterSource::Spring => "Spring",
            WaterSource::Other => "Other",
        }
    }
}

impl std::fmt::Display for WaterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterSource::Tap => write!(f, "tap"),
            WaterSource::FilteredTap => write!(f, "filtered-tap"),
            WaterSource::BottledStill => write!(f, "bottled-still"),
            WaterSource::BottledSparkling => write!(f, "bottled-sparkling"),
            WaterSource::Spring => write!(f, "spring"),
            WaterSource::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for WaterSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "tap" => Ok(WaterSource::Tap),
            "filtered-tap" | "filtered" => Ok(WaterSource::FilteredTap),
            "bottled-still" | "still" => Ok(WaterSource::BottledStill),
            "bottled-sparkling" | "sparkling" => Ok(WaterSource::BottledSparkling),
            "spring" => Ok(WaterSource::Spring),
            "other" => Ok(WaterSource::Other),
            _ => Err(format!("Invalid water source: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for source in WaterSource::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(WaterSource::FilteredTap.label(), "Filtered Tap");
        assert_eq!(WaterSource::BottledSparkling.label(), "Bottled Sparkling");
        assert_eq!(WaterSource::Spring.label(), "Spring");
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("filtered".parse::<WaterSource>().unwrap(), WaterSource::FilteredTap);
        assert_eq!("Bottled Still".parse::<WaterSource>().unwrap(), WaterSource::BottledStill);
        assert!("lake".parse::<WaterSource>().is_err());
    }
}
