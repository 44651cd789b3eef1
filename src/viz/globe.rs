// src/viz/globe.rs

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{Row, Table};
use crate::viz::format::{fmt1, fmt2, format_population, or_default, or_zero};
use crate::viz::write_json;

/// One country in one year's ranked snapshot. Every metric carries a numeric
/// twin and a pre-rendered display string so the globe tooltip never
/// formats anything itself.
#[derive(Debug, Serialize)]
struct GlobeRecord {
    country: String,
    alpha3_code: String,
    population_number: f64,
    population: String,
    population_density_number: f64,
    population_density: String,
    sex_ratio_number: f64,
    sex_ratio: String,
    median_age_number: f64,
    median_age: String,
    birth_rate_number: f64,
    birth_rate: String,
    death_rate_number: f64,
    death_rate: String,
    natural_change_number: f64,
    natural_change: String,
    migration_rate_number: f64,
    migration_rate: String,
    life_expectancy_number: f64,
    life_expectancy: String,
    life_expectancy_male_number: f64,
    life_expectancy_female_number: f64,
    fertility_rate_number: f64,
    fertility_rate: String,
    infant_mortality_number: f64,
    infant_mortality: String,
    rank: usize,
}

impl GlobeRecord {
    fn from_row(row: &Row, population_thousands: f64, rank: usize) -> Self {
        let persons = population_thousands * 1000.0;
        Self {
            country: row.location.clone(),
            alpha3_code: row.iso3.clone(),
            population_number: persons,
            population: format_population(Some(persons)),
            population_density_number: or_zero(row.density),
            population_density: fmt1(row.density),
            sex_ratio_number: or_default(row.sex_ratio, 100.0),
            sex_ratio: fmt1(row.sex_ratio),
            median_age_number: or_zero(row.median_age),
            median_age: fmt1(row.median_age),
            birth_rate_number: or_zero(row.birth_rate),
            birth_rate: fmt1(row.birth_rate),
            death_rate_number: or_zero(row.death_rate),
            death_rate: fmt1(row.death_rate),
            natural_change_number: or_zero(row.natural_change),
            natural_change: fmt1(row.natural_change),
            migration_rate_number: or_zero(row.migration_rate),
            migration_rate: fmt1(row.migration_rate),
            life_expectancy_number: or_zero(row.life_expectancy),
            life_expectancy: fmt1(row.life_expectancy),
            life_expectancy_male_number: or_zero(row.life_expectancy_male),
            life_expectancy_female_number: or_zero(row.life_expectancy_female),
            fertility_rate_number: or_zero(row.fertility),
            fertility_rate: fmt2(row.fertility),
            infant_mortality_number: or_zero(row.infant_mortality),
            infant_mortality: fmt1(row.infant_mortality),
            rank,
        }
    }
}

/// Per-year snapshot of all countries, ranked by population descending.
/// Countries without a positive population that year are left out.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let years: BTreeSet<i32> = table.countries().filter_map(|r| r.year).collect();

    let mut by_year: BTreeMap<i32, Vec<GlobeRecord>> = BTreeMap::new();
    for &year in &years {
        let mut rows: Vec<(&Row, f64)> = table
            .countries()
            .filter(|r| r.year == Some(year))
            .filter_map(|r| r.population.filter(|&p| p > 0.0).map(|p| (r, p)))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (row, pop))| GlobeRecord::from_row(row, pop, i + 1))
            .collect();
        by_year.insert(year, records);
    }

    info!(years = by_year.len(), "globe snapshots ranked");
    write_json(&out_dir.join("globe_data_all_years.json"), &by_year)
}
