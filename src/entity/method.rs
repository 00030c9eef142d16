// src/entity/method.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BrewingMethod {
    #[default]
    PourOver,
    FrenchPress,
    Aeropress,
    AeropressGo,
    Kalita,
    SiemensDrip,
    Espresso,
    MokaPot,
    ColdBrew,
    Drip,
    Other,
}

/// Suggested coffee and water amounts for a brewing method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dose {
    pub grams_of_coffee: f64,
    pub milliliters_of_water: f64,
}

impl BrewingMethod {
    pub const ALL: [BrewingMethod; 11] = [
        BrewingMethod::PourOver,
        BrewingMethod::FrenchPress,
        BrewingMethod::Aeropress,
        BrewingMethod::AeropressGo,
        BrewingMethod::Kalita,
        BrewingMethod::SiemensDrip,
        BrewingMethod::Espresso,
        BrewingMethod::MokaPot,
        BrewingMethod::ColdBrew,
        BrewingMethod::Drip,
        BrewingMethod::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BrewingMethod::PourOver => "Pour Over",
            BrewingMethod::FrenchPress => "French Press",
            BrewingMethod::Aeropress => "AeroPress",
            BrewingMethod::AeropressGo => "Aeropress Go",
            BrewingMethod::Kalita => "Kalita Hand Brewer",
            BrewingMethod::SiemensDrip => "Siemens Coffee Brewer",
            BrewingMethod::Espresso => "Espresso",
            BrewingMethod::MokaPot => "Moka Pot",
            BrewingMethod::ColdBrew => "Cold Brew",
            BrewingMethod::Drip => "Drip",
            BrewingMethod::Other => "Other",
        }
    }

    /// Preset dose applied when a new brew switches to this method.
    /// Methods without a preset keep whatever amounts were entered.
    pub fn default_dose(&self) -> Option<Dose> {
        match self {
            BrewingMethod::PourOver | BrewingMethod::Kalita => Some(Dose {
                grams_of_coffee: 30.0,
                milliliters_of_water: 500.0,
            }),
            BrewingMethod::Aeropress | BrewingMethod::AeropressGo => Some(Dose {
                grams_of_coffee: 14.0,
                milliliters_of_water: 200.0,
            }),
            _ => None,
        }
    }
}

impl std::fmt::Display for BrewingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrewingMethod::PourOver => write!(f, "pour-over"),
            BrewingMethod::FrenchPress => write!(f, "french-press"),
            BrewingMethod::Aeropress => write!(f, "aeropress"),
            BrewingMethod::AeropressGo => write!(f, "aeropress-go"),
            BrewingMethod::Kalita => write!(f, "kalita"),
            BrewingMethod::SiemensDrip => write!(f, "siemens-drip"),
            BrewingMethod::Espresso => write!(f, "espresso"),
            BrewingMethod::MokaPot => write!(f, "moka-pot"),
            BrewingMethod::ColdBrew => write!(f, "cold-brew"),
            BrewingMethod::Drip => write!(f, "drip"),
            BrewingMethod::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for BrewingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "pour-over" | "pourover" => Ok(BrewingMethod::PourOver),
            "french-press" => Ok(BrewingMethod::FrenchPress),
            "aeropress" => Ok(BrewingMethod::Aeropress),
            "aeropress-go" => Ok(BrewingMethod::AeropressGo),
            "kalita" => Ok(BrewingMethod::Kalita),
            "siemens-drip" => Ok(BrewingMethod::SiemensDrip),
            "espresso" => Ok(BrewingMethod::Espresso),
            "moka-pot" => Ok(BrewingMethod::MokaPot),
            "cold-brew" => Ok(BrewingMethod::ColdBrew),
            "drip" => Ok(BrewingMethod::Drip),
            "other" => Ok(BrewingMethod::Other),
            _ => Err(format!("Invalid brewing method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for method in BrewingMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method));
            assert_eq!(method.to_string().parse::<BrewingMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(BrewingMethod::PourOver.label(), "Pour Over");
        assert_eq!(BrewingMethod::Aeropress.label(), "AeroPress");
        assert_eq!(BrewingMethod::AeropressGo.label(), "Aeropress Go");
        assert_eq!(BrewingMethod::Kalita.label(), "Kalita Hand Brewer");
        assert_eq!(BrewingMethod::SiemensDrip.label(), "Siemens Coffee Brewer");
        assert_eq!(BrewingMethod::MokaPot.label(), "Moka Pot");
    }

    #[test]
    fn test_default_dose() {
        let dose = BrewingMethod::Kalita.default_dose().unwrap();
        assert_eq!(dose.grams_of_coffee, 30.0);
        assert_eq!(dose.milliliters_of_water, 500.0);

        let dose = BrewingMethod::AeropressGo.default_dose().unwrap();
        assert_eq!(dose.grams_of_coffee, 14.0);
        assert_eq!(dose.milliliters_of_water, 200.0);

        assert!(BrewingMethod::Espresso.default_dose().is_none());
        assert!(BrewingMethod::FrenchPress.default_dose().is_none());
    }
}
