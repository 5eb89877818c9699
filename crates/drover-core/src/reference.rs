use std::collections::HashMap;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::GenerationError;
use crate::model::{Country, Species};

#[derive(Debug, Deserialize)]
struct CountryRow {
    #[serde(rename = "CountryCode")]
    country_code: String,
    #[serde(rename = "CountryName")]
    country_name: String,
}

#[derive(Debug, Deserialize)]
struct CountyRow {
    #[serde(rename = "CountyCode")]
    county_code: u32,
    #[serde(rename = "CountryCode")]
    country_code: String,
}

#[derive(Debug, Deserialize)]
struct ParishRow {
    #[serde(rename = "ParishCode")]
    parish_code: u32,
    #[serde(rename = "CountyCode")]
    county_code: u32,
}

#[derive(Debug, Deserialize)]
struct AnimalTypeRow {
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Code")]
    code: String,
}

/// Catalog codes for the four species, resolved at load time.
#[derive(Debug, Clone)]
pub struct AnimalCodeMap {
    pub bovine: String,
    pub pig: String,
    pub sheep: String,
    pub deer: String,
}

impl AnimalCodeMap {
    pub fn code(&self, species: Species) -> &str {
        match species {
            Species::Bovine => &self.bovine,
            Species::Pig => &self.pig,
            Species::Sheep => &self.sheep,
            Species::Deer => &self.deer,
        }
    }
}

/// Reference tables after joining and CPH enrichment.
///
/// Holdings are grouped by country name; each group supports uniform
/// sampling with replacement.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    holdings_by_country: HashMap<String, Vec<String>>,
    pub animal_codes: AnimalCodeMap,
}

impl ReferenceData {
    pub fn new(holdings_by_country: HashMap<String, Vec<String>>, animal_codes: AnimalCodeMap) -> Self {
        Self {
            holdings_by_country,
            animal_codes,
        }
    }

    /// Holding group for one country, or a data error if the reference
    /// tables yielded no holdings there.
    pub fn holdings(&self, country: Country) -> Result<&[String], GenerationError> {
        self.holdings_by_country
            .get(country.as_str())
            .filter(|group| !group.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| {
                GenerationError::Data(format!("no holdings loaded for {}", country.as_str()))
            })
    }
}

/// Load the four reference tables from `input_dir`.
///
/// Joins parish -> county -> country, synthesizes one CPH per parish row
/// (the 4-digit holding suffix is drawn from `rng`, so load order is part
/// of the deterministic stream), groups holdings by country name, and
/// resolves the four animal-type codes by exact description match.
pub fn load_reference_data(
    input_dir: &Path,
    rng: &mut impl Rng,
) -> Result<ReferenceData, GenerationError> {
    let countries: Vec<CountryRow> = read_rows(&input_dir.join("country.csv"))?;
    let counties: Vec<CountyRow> = read_rows(&input_dir.join("county.csv"))?;
    let parishes: Vec<ParishRow> = read_rows(&input_dir.join("parish.csv"))?;
    let animal_types: Vec<AnimalTypeRow> = read_rows(&input_dir.join("animal-types.csv"))?;

    let country_by_code: HashMap<&str, &str> = countries
        .iter()
        .map(|row| (row.country_code.as_str(), row.country_name.as_str()))
        .collect();
    let country_by_county: HashMap<u32, &str> = counties
        .iter()
        .map(|row| (row.county_code, row.country_code.as_str()))
        .collect();

    let mut holdings_by_country: HashMap<String, Vec<String>> = HashMap::new();
    for parish in &parishes {
        let country_code = country_by_county.get(&parish.county_code).ok_or_else(|| {
            GenerationError::Data(format!(
                "parish {} references unknown county code {}",
                parish.parish_code, parish.county_code
            ))
        })?;
        let country_name = country_by_code.get(country_code).ok_or_else(|| {
            GenerationError::Data(format!(
                "county {} references unknown country code '{}'",
                parish.county_code, country_code
            ))
        })?;

        // CountyCode(2) / ParishCode(3) / random holding suffix(4).
        let suffix: u32 = rng.random_range(0..=9999);
        let cph = format!("{:02}/{:03}/{:04}", parish.county_code, parish.parish_code, suffix);
        holdings_by_country
            .entry((*country_name).to_string())
            .or_default()
            .push(cph);
    }

    let animal_codes = AnimalCodeMap {
        bovine: catalog_code(&animal_types, Species::Bovine)?,
        pig: catalog_code(&animal_types, Species::Pig)?,
        sheep: catalog_code(&animal_types, Species::Sheep)?,
        deer: catalog_code(&animal_types, Species::Deer)?,
    };

    debug!(
        countries = holdings_by_country.len(),
        parishes = parishes.len(),
        "reference data loaded"
    );

    Ok(ReferenceData::new(holdings_by_country, animal_codes))
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, GenerationError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}

fn catalog_code(rows: &[AnimalTypeRow], species: Species) -> Result<String, GenerationError> {
    let description = species.description();
    rows.iter()
        .find(|row| row.description == description)
        .map(|row| row.code.clone())
        .ok_or_else(|| {
            GenerationError::Config(format!(
                "no animal type with description '{description}'"
            ))
        })
}
