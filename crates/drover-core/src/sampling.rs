//! Category samplers and constraint appliers.
//!
//! Every function draws from an explicitly passed `Rng`; the caller decides
//! seeding, so each draw site is a fixed position in the shared stream.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::model::{CountChange, Country, GeographyCategory, Species};

/// Base date for source-date offsets.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Draw one item from a discrete distribution with relative weights.
///
/// Weights need not sum to 1; they are normalized by the total here.
/// `items` and `weights` must be the same non-zero length.
pub fn weighted_choice<T: Copy>(items: &[T], weights: &[f64], rng: &mut impl Rng) -> T {
    debug_assert_eq!(items.len(), weights.len());
    let total: f64 = weights.iter().sum();
    let mut draw = rng.random_range(0.0..total);
    for (item, weight) in items.iter().zip(weights) {
        if draw < *weight {
            return *item;
        }
        draw -= *weight;
    }
    // Floating-point rounding can leave a sliver past the last bucket.
    items[items.len() - 1]
}

pub fn sample_geography(rng: &mut impl Rng) -> GeographyCategory {
    weighted_choice(&GeographyCategory::ALL, &GeographyCategory::WEIGHTS, rng)
}

pub fn sample_species(rng: &mut impl Rng) -> Species {
    weighted_choice(&Species::ALL, &Species::WEIGHTS, rng)
}

pub fn sample_change(rng: &mut impl Rng) -> CountChange {
    weighted_choice(&CountChange::ALL, &CountChange::WEIGHTS, rng)
}

/// Resolve a geography category to an ordered (source, target) pair.
///
/// Cross-border categories assign direction by a fair coin flip.
pub fn resolve_countries(
    category: GeographyCategory,
    rng: &mut impl Rng,
) -> (Country, Country) {
    let (first, second) = category.nations();
    if category.is_cross_border() && rng.random_bool(0.5) {
        (second, first)
    } else {
        (first, second)
    }
}

/// Uniform source count within the species range.
pub fn sample_source_count(species: Species, rng: &mut impl Rng) -> u32 {
    rng.random_range(species.count_range())
}

/// Destination count under a count-change category.
///
/// `Less` loses a uniform [1, min(5, source - 1)] animals, keeping at
/// least one; a source count of 1 falls back to `Same`. `More` gains a
/// uniform [1, 2].
pub fn derive_target_count(source_count: u32, change: CountChange, rng: &mut impl Rng) -> u32 {
    match change {
        CountChange::Same => source_count,
        CountChange::Less => {
            let max_loss = source_count.saturating_sub(1).min(5);
            if max_loss == 0 {
                source_count
            } else {
                source_count - rng.random_range(1..=max_loss)
            }
        }
        CountChange::More => source_count + rng.random_range(1..=2),
    }
}

/// Uniform holding pair, re-drawing the target until it differs from the
/// source.
///
/// Precondition: when both slices alias the same country group, the group
/// holds at least two distinct CPHs, otherwise the re-draw loop cannot
/// terminate.
pub fn sample_holding_pair<'a>(
    source_group: &'a [String],
    target_group: &'a [String],
    rng: &mut impl Rng,
) -> (&'a str, &'a str) {
    let source = source_group[rng.random_range(0..source_group.len())].as_str();
    loop {
        let target = target_group[rng.random_range(0..target_group.len())].as_str();
        if target != source {
            return (source, target);
        }
    }
}

/// Source date uniform within the year from the base date; target date at
/// most 3 days later.
pub fn sample_dates(rng: &mut impl Rng) -> (NaiveDate, NaiveDate) {
    let source = base_date() + Duration::days(rng.random_range(0..=364));
    let target = source + Duration::days(rng.random_range(0..=3));
    (source, target)
}

/// One haulier from the fixed pool H0001..H0100.
pub fn sample_haulier(rng: &mut impl Rng) -> String {
    format!("H{:04}", rng.random_range(1..=100))
}
