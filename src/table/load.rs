// src/table/load.rs

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};
use tracing::info;

use super::{columns, LocationKind, Row, Table};

/// Parse a numeric cell. The source groups thousands with spaces
/// ("1 234 567"), so all whitespace is stripped before parsing. Anything
/// that still does not parse is treated as no data.
pub(crate) fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Resolved positions of every column the pipeline reads.
struct ColumnIndex {
    kind: usize,
    year: usize,
    location: usize,
    iso3: Option<usize>,
    location_code: Option<usize>,
    parent_code: Option<usize>,
    population: usize,
    fertility: usize,
    life_expectancy: usize,
    life_expectancy_male: usize,
    life_expectancy_female: usize,
    birth_rate: usize,
    death_rate: usize,
    infant_mortality: usize,
    under_five_mortality: usize,
    median_age: usize,
    growth_rate: usize,
    density: usize,
    sex_ratio: usize,
    migration_rate: usize,
    natural_change: usize,
    mean_age_childbearing: usize,
}

fn find(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow!("missing column {:?}", name))
}

fn find_opt(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            kind: find(headers, columns::TYPE)?,
            year: find(headers, columns::YEAR)?,
            location: find(headers, columns::LOCATION)?,
            iso3: find_opt(headers, columns::ISO3),
            location_code: find_opt(headers, columns::LOCATION_CODE),
            parent_code: find_opt(headers, columns::PARENT_CODE),
            population: find(headers, columns::POPULATION)?,
            fertility: find(headers, columns::FERTILITY)?,
            life_expectancy: find(headers, columns::LIFE_EXPECTANCY)?,
            life_expectancy_male: find(headers, columns::LIFE_EXPECTANCY_MALE)?,
            life_expectancy_female: find(headers, columns::LIFE_EXPECTANCY_FEMALE)?,
            birth_rate: find(headers, columns::BIRTH_RATE)?,
            death_rate: find(headers, columns::DEATH_RATE)?,
            infant_mortality: find(headers, columns::INFANT_MORTALITY)?,
            under_five_mortality: find(headers, columns::UNDER_FIVE_MORTALITY)?,
            median_age: find(headers, columns::MEDIAN_AGE)?,
            growth_rate: find(headers, columns::GROWTH_RATE)?,
            density: find(headers, columns::DENSITY)?,
            sex_ratio: find(headers, columns::SEX_RATIO)?,
            migration_rate: find(headers, columns::MIGRATION_RATE)?,
            natural_change: find(headers, columns::NATURAL_CHANGE)?,
            mean_age_childbearing: find(headers, columns::MEAN_AGE_CHILDBEARING)?,
        })
    }

    fn numeric(&self, record: &StringRecord, idx: usize) -> Option<f64> {
        record.get(idx).and_then(parse_numeric)
    }

    fn numeric_opt(&self, record: &StringRecord, idx: Option<usize>) -> Option<f64> {
        idx.and_then(|i| record.get(i)).and_then(parse_numeric)
    }

    fn row(&self, record: &StringRecord) -> Row {
        Row {
            location: record.get(self.location).unwrap_or("").trim().to_string(),
            iso3: self
                .iso3
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string(),
            kind: LocationKind::parse(record.get(self.kind).unwrap_or("")),
            location_code: self
                .numeric_opt(record, self.location_code)
                .map(|v| v as i64),
            parent_code: self.numeric_opt(record, self.parent_code).map(|v| v as i64),
            year: self.numeric(record, self.year).map(|v| v as i32),
            population: self.numeric(record, self.population),
            fertility: self.numeric(record, self.fertility),
            life_expectancy: self.numeric(record, self.life_expectancy),
            life_expectancy_male: self.numeric(record, self.life_expectancy_male),
            life_expectancy_female: self.numeric(record, self.life_expectancy_female),
            birth_rate: self.numeric(record, self.birth_rate),
            death_rate: self.numeric(record, self.death_rate),
            infant_mortality: self.numeric(record, self.infant_mortality),
            under_five_mortality: self.numeric(record, self.under_five_mortality),
            median_age: self.numeric(record, self.median_age),
            growth_rate: self.numeric(record, self.growth_rate),
            density: self.numeric(record, self.density),
            sex_ratio: self.numeric(record, self.sex_ratio),
            migration_rate: self.numeric(record, self.migration_rate),
            natural_change: self.numeric(record, self.natural_change),
            mean_age_childbearing: self.numeric(record, self.mean_age_childbearing),
        }
    }
}

/// Load and clean the source table from `path`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open table {:?}", path.as_ref()))?;
    from_reader(file)
}

/// Load and clean the source table from any reader. No row is dropped here;
/// bad cells become missing values instead.
pub fn from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().context("reading table header row")?.clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", i))?;
        rows.push(index.row(&record));
    }
    info!("loaded {} records", rows.len());

    Ok(Table::new(rows))
}
