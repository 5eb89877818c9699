//! Synthetic livestock-movement generation for England, Wales, and Scotland.
//!
//! This crate loads country/county/parish and animal-type reference tables
//! and produces movement records whose categorical distributions (geography
//! pair, species, count change) follow a fixed statistical profile. Given a
//! seed, the whole output table is deterministic.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod reference;
pub mod sampling;

pub use engine::{GenerateOptions, MovementEngine, build_movement, generate_movements};
pub use errors::GenerationError;
pub use model::{CountChange, Country, GeographyCategory, MovementRecord, Species};
pub use reference::{AnimalCodeMap, ReferenceData, load_reference_data};
