// src/entity/grind.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GrindCoarseness {
    ExtraFine,
    Fine,
    MediumFine,
    #[default]
    Medium,
    MediumCoarse,
    Coarse,
    ExtraCoarse,
}

impl GrindCoarseness {
    pub const ALL: [GrindCoarseness; 7] = [
        GrindCoarseness::ExtraFine,
        GrindCoarseness::Fine,
        GrindCoarseness::MediumFine,
        GrindCoarseness::Medium,
        GrindCoarseness::MediumCoarse,
        GrindCoarseness::Coarse,
        GrindCoarseness::ExtraCoarse,
    ];

    /// Human-readable label, e.g. "Medium Coarse"
    pub fn label(&self) -> &'static str {
        match self {
            GrindCoarseness::ExtraFine => "Extra Fine",
            GrindCoarseness::Fine => "Fine",
            GrindCoarseness::MediumFine => "Medium Fine",
            GrindCoarseness::Medium => "Medium",
            GrindCoarseness::MediumCoarse => "Medium Coarse",
            GrindCoarseness::Coarse => "Coarse",
            GrindCoarseness::ExtraCoarse => "Extra Coarse",
        }
    }
}

impl std::fmt::Display for GrindCoarseness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrindCoarseness::ExtraFine => write!(f, "extra-fine"),
            GrindCoarseness::Fine => write!(f, "fine"),
            GrindCoarseness::MediumFine => write!(f, "medium-fine"),
            GrindCoarseness::Medium => write!(f, "medium"),
            GrindCoarseness::MediumCoarse => write!(f, "medium-coarse"),
            GrindCoarseness::Coarse => write!(f, "coarse"),
            GrindCoarseness::ExtraCoarse => write!(f, "extra-coarse"),
        }
    }
}

impl std::str::FromStr for GrindCoarseness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "extra-fine" => Ok(GrindCoarseness::ExtraFine),
            "fine" => Ok(GrindCoarseness::Fine),
            "medium-fine" => Ok(GrindCoarseness::MediumFine),
            "medium" => Ok(GrindCoarseness::Medium),
            "medium-coarse" => Ok(GrindCoarseness::MediumCoarse),
            "coarse" => Ok(GrindCoarseness::Coarse),
            "extra-coarse" => Ok(GrindCoarseness::ExtraCoarse),
            _ => Err(format!("Invalid grind coarseness: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for grind in GrindCoarseness::ALL {
            let json = serde_json::to_string(&grind).unwrap();
            assert_eq!(json, format!("\"{}\"", grind));
        }
    }

    #[test]
    fn test_parse_accepts_label_spelling() {
        assert_eq!(
            "Medium Coarse".parse::<GrindCoarseness>().unwrap(),
            GrindCoarseness::MediumCoarse
        );
        assert_eq!(
            "extra_fine".parse::<GrindCoarseness>().unwrap(),
            GrindCoarseness::ExtraFine
        );
        assert!("powder".parse::<GrindCoarseness>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(GrindCoarseness::ExtraFine.label(), "Extra Fine");
        assert_eq!(GrindCoarseness::MediumFine.label(), "Medium Fine");
        assert_eq!(GrindCoarseness::ExtraCoarse.label(), "Extra Coarse");
    }
}
