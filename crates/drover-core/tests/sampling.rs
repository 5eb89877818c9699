use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use drover_core::model::{CountChange, Country, GeographyCategory, Species};
use drover_core::sampling::{
    base_date, derive_target_count, resolve_countries, sample_change, sample_dates,
    sample_geography, sample_haulier, sample_holding_pair, sample_source_count, sample_species,
    weighted_choice,
};

const DRAWS: u32 = 100_000;
const TOLERANCE: f64 = 0.02;

fn assert_close(observed: u32, expected_share: f64, label: &str) {
    let share = f64::from(observed) / f64::from(DRAWS);
    assert!(
        (share - expected_share).abs() <= TOLERANCE,
        "{label}: observed share {share:.4}, expected {expected_share:.2}"
    );
}

#[test]
fn geography_frequencies_match_configured_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut counts: HashMap<GeographyCategory, u32> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(sample_geography(&mut rng)).or_insert(0) += 1;
    }

    for (category, weight) in GeographyCategory::ALL.iter().zip(GeographyCategory::WEIGHTS) {
        assert_close(
            counts.get(category).copied().unwrap_or(0),
            weight,
            &format!("{category:?}"),
        );
    }
}

#[test]
fn species_frequencies_match_configured_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut counts: HashMap<Species, u32> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(sample_species(&mut rng)).or_insert(0) += 1;
    }

    for (species, weight) in Species::ALL.iter().zip(Species::WEIGHTS) {
        assert_close(
            counts.get(species).copied().unwrap_or(0),
            weight,
            &format!("{species:?}"),
        );
    }
}

#[test]
fn change_frequencies_match_configured_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut counts: HashMap<CountChange, u32> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(sample_change(&mut rng)).or_insert(0) += 1;
    }

    for (change, weight) in CountChange::ALL.iter().zip(CountChange::WEIGHTS) {
        assert_close(
            counts.get(change).copied().unwrap_or(0),
            weight,
            &format!("{change:?}"),
        );
    }
}

#[test]
fn weighted_choice_normalizes_relative_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Weights sum to 4, not 1.
    let mut firsts = 0_u32;
    for _ in 0..DRAWS {
        if weighted_choice(&["a", "b"], &[3.0, 1.0], &mut rng) == "a" {
            firsts += 1;
        }
    }
    assert_close(firsts, 0.75, "unnormalized weights");

    // A zero weight never gets drawn.
    for _ in 0..1_000 {
        assert_eq!(weighted_choice(&["a", "b"], &[0.0, 5.0], &mut rng), "b");
    }
}

#[test]
fn target_count_rules_hold_for_each_change_category() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..2_000 {
        let source = sample_source_count(Species::Sheep, &mut rng);

        assert_eq!(derive_target_count(source, CountChange::Same, &mut rng), source);

        let less = derive_target_count(source, CountChange::Less, &mut rng);
        assert!(less >= 1);
        if source == 1 {
            assert_eq!(less, 1, "nothing to lose, must fall back to same");
        } else {
            assert!(less < source);
            assert!(less >= source.saturating_sub(5));
        }

        let more = derive_target_count(source, CountChange::More, &mut rng);
        assert!(more > source);
        assert!(more <= source + 2);
    }
}

#[test]
fn source_counts_stay_within_species_ranges() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..2_000 {
        for species in Species::ALL {
            let count = sample_source_count(species, &mut rng);
            assert!(
                species.count_range().contains(&count),
                "{species:?} count {count} out of range"
            );
        }
    }
}

#[test]
fn dates_fall_within_the_year_and_target_trails_by_at_most_three_days() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..2_000 {
        let (source, target) = sample_dates(&mut rng);
        let offset = (source - base_date()).num_days();
        assert!((0..=364).contains(&offset));
        let delta = (target - source).num_days();
        assert!((0..=3).contains(&delta));
    }
}

#[test]
fn holding_pair_never_repeats_the_source() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let group = vec!["01/001/0001".to_string(), "01/002/0002".to_string()];

    // Source and target drawn from the same two-holding group.
    for _ in 0..500 {
        let (source, target) = sample_holding_pair(&group, &group, &mut rng);
        assert_ne!(source, target);
    }
}

#[test]
fn cross_border_resolution_flips_direction_but_intra_nation_does_not() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut forward = 0_u32;
    let mut reverse = 0_u32;
    for _ in 0..1_000 {
        match resolve_countries(GeographyCategory::ES, &mut rng) {
            (Country::England, Country::Scotland) => forward += 1,
            (Country::Scotland, Country::England) => reverse += 1,
            pair => panic!("ES resolved to {pair:?}"),
        }
    }
    assert!(forward > 0 && reverse > 0, "both directions must occur");

    for _ in 0..100 {
        assert_eq!(
            resolve_countries(GeographyCategory::SS, &mut rng),
            (Country::Scotland, Country::Scotland)
        );
    }
}

#[test]
fn hauliers_come_from_the_fixed_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1_000 {
        let haulier = sample_haulier(&mut rng);
        assert_eq!(haulier.len(), 5);
        let id: u32 = haulier[1..].parse().expect("numeric haulier id");
        assert!((1..=100).contains(&id), "haulier {haulier} outside pool");
    }
}
