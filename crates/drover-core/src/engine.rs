use std::path::Path;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{GeographyCategory, MovementRecord, Species};
use crate::reference::{ReferenceData, load_reference_data};
use crate::sampling::{
    derive_target_count, resolve_countries, sample_change, sample_dates, sample_geography,
    sample_haulier, sample_holding_pair, sample_source_count, sample_species,
};

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of movement rows to generate.
    pub rows: u64,
    /// Seed for the shared random stream; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: 10_000,
            seed: Some(42),
        }
    }
}

/// Entry point for generating a movement table from reference data.
///
/// The seed covers the whole run: holding suffixes drawn while loading and
/// every draw during generation consume one `ChaCha8Rng` stream in a fixed
/// order, so the output table is a deterministic function of (reference
/// data, rows, seed).
#[derive(Debug, Clone)]
pub struct MovementEngine {
    options: GenerateOptions,
}

impl MovementEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Load reference tables from `input_dir` and generate the configured
    /// number of rows, in generation order.
    pub fn run(&self, input_dir: &Path) -> Result<Vec<MovementRecord>, GenerationError> {
        let start = Instant::now();
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        info!(
            rows = self.options.rows,
            seed = self.options.seed,
            input_dir = %input_dir.display(),
            "generation started"
        );

        let reference = load_reference_data(input_dir, &mut rng)?;
        let movements = generate_movements(&reference, self.options.rows, &mut rng)?;

        info!(
            rows = movements.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );

        Ok(movements)
    }
}

/// Generate `rows` movements from already-loaded reference data.
///
/// Rows come back in call order; no reordering.
pub fn generate_movements(
    reference: &ReferenceData,
    rows: u64,
    rng: &mut impl Rng,
) -> Result<Vec<MovementRecord>, GenerationError> {
    let mut movements = Vec::with_capacity(rows as usize);
    for _ in 0..rows {
        let geography = sample_geography(rng);
        let species = sample_species(rng);
        movements.push(build_movement(reference, geography, species, rng)?);
    }
    Ok(movements)
}

/// Build one movement record for an already-chosen geography category and
/// species.
///
/// Category draws happen in [`generate_movements`]; taking them as
/// arguments lets callers pin a record to a specific category pair.
pub fn build_movement(
    reference: &ReferenceData,
    geography: GeographyCategory,
    species: Species,
    rng: &mut impl Rng,
) -> Result<MovementRecord, GenerationError> {
    let (source_country, target_country) = resolve_countries(geography, rng);
    let (source_cph, target_cph) = sample_holding_pair(
        reference.holdings(source_country)?,
        reference.holdings(target_country)?,
        rng,
    );

    let animal_type = reference.animal_codes.code(species).to_string();
    let source_count = sample_source_count(species, rng);
    let change = sample_change(rng);
    let target_count = derive_target_count(source_count, change, rng);
    let (source_date, target_date) = sample_dates(rng);
    let haulier_id = sample_haulier(rng);

    Ok(MovementRecord {
        source_cph: source_cph.to_string(),
        source_count,
        source_date,
        target_cph: target_cph.to_string(),
        target_count,
        target_date,
        animal_type,
        haulier_id,
    })
}
