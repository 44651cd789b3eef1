// src/viz/growth.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::Table;
use crate::viz::write_json;

/// Natural change vs. net migration, one point per country-year.
#[derive(Debug, Serialize)]
struct GrowthPoint {
    country: String,
    year: i32,
    #[serde(rename = "naturalChange")]
    natural_change: f64,
    #[serde(rename = "migrationRate")]
    migration_rate: f64,
    /// Thousands, as in the source table.
    population: f64,
    iso3: String,
    region: String,
}

pub(super) fn render(table: &Table, resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut points = Vec::new();
    for row in table.countries() {
        let (Some(year), Some(natural_change), Some(migration_rate), Some(population)) =
            (row.year, row.natural_change, row.migration_rate, row.population)
        else {
            continue;
        };
        points.push(GrowthPoint {
            country: row.location.clone(),
            year,
            natural_change,
            migration_rate,
            population,
            iso3: row.iso3.clone(),
            region: resolver.region_of(&row.location).to_string(),
        });
    }

    info!(records = points.len(), "growth-driver points extracted");
    write_json(&out_dir.join("growth_drivers_data.json"), &points)
}
