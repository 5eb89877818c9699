use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Serialize;

/// Nations covered by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    England,
    Wales,
    Scotland,
}

impl Country {
    /// Name as it appears in the `CountryName` reference column.
    pub fn as_str(self) -> &'static str {
        match self {
            Country::England => "England",
            Country::Wales => "Wales",
            Country::Scotland => "Scotland",
        }
    }
}

/// Species moved between holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Bovine,
    Pig,
    Sheep,
    Deer,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Bovine, Species::Pig, Species::Sheep, Species::Deer];

    /// Relative sampling weights, aligned with `ALL`.
    pub const WEIGHTS: [f64; 4] = [0.50, 0.20, 0.20, 0.10];

    /// Catalog description this species is looked up by in `animal-types.csv`.
    pub fn description(self) -> &'static str {
        match self {
            Species::Bovine => "Cattle",
            Species::Pig => "Pigs",
            Species::Sheep => "Sheep",
            Species::Deer => "Deer",
        }
    }

    /// Inclusive range the source count is drawn from.
    pub fn count_range(self) -> RangeInclusive<u32> {
        match self {
            Species::Bovine => 1..=10,
            Species::Pig => 1..=60,
            Species::Sheep => 1..=60,
            Species::Deer => 1..=40,
        }
    }
}

/// Which pair of nations a movement occurs between.
///
/// Two-letter codes pair the nations involved; cross-border categories
/// (`EW`, `ES`, `WS`) leave the direction to a coin flip at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeographyCategory {
    EE,
    WW,
    SS,
    EW,
    ES,
    WS,
}

impl GeographyCategory {
    pub const ALL: [GeographyCategory; 6] = [
        GeographyCategory::EE,
        GeographyCategory::WW,
        GeographyCategory::SS,
        GeographyCategory::EW,
        GeographyCategory::ES,
        GeographyCategory::WS,
    ];

    /// Relative sampling weights, aligned with `ALL`.
    pub const WEIGHTS: [f64; 6] = [0.50, 0.15, 0.10, 0.10, 0.10, 0.05];

    /// Nations paired by this category, in canonical order.
    pub fn nations(self) -> (Country, Country) {
        match self {
            GeographyCategory::EE => (Country::England, Country::England),
            GeographyCategory::WW => (Country::Wales, Country::Wales),
            GeographyCategory::SS => (Country::Scotland, Country::Scotland),
            GeographyCategory::EW => (Country::England, Country::Wales),
            GeographyCategory::ES => (Country::England, Country::Scotland),
            GeographyCategory::WS => (Country::Wales, Country::Scotland),
        }
    }

    pub fn is_cross_border(self) -> bool {
        let (source, target) = self.nations();
        source != target
    }
}

/// How the destination count relates to the source count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountChange {
    Same,
    Less,
    More,
}

impl CountChange {
    pub const ALL: [CountChange; 3] = [CountChange::Same, CountChange::Less, CountChange::More];

    /// Relative sampling weights, aligned with `ALL`.
    pub const WEIGHTS: [f64; 3] = [0.90, 0.08, 0.02];
}

/// One synthetic movement between two holdings.
///
/// Serializes to the output column order `source-cph, source-count,
/// source-date, target-cph, target-count, target-date, animal-type,
/// haulier-id`; dates render as ISO-8601 calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MovementRecord {
    pub source_cph: String,
    pub source_count: u32,
    pub source_date: NaiveDate,
    pub target_cph: String,
    pub target_count: u32,
    pub target_date: NaiveDate,
    pub animal_type: String,
    pub haulier_id: String,
}
