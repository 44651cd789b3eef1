// src/viz/animation.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::Table;
use crate::viz::write_json;

/// Fertility vs. life expectancy per country-year, the animated bubble
/// chart's frame data.
#[derive(Debug, Serialize)]
struct Frame {
    country: String,
    year: i32,
    fertility: f64,
    #[serde(rename = "lifeExpectancy")]
    life_expectancy: f64,
    /// Thousands, as in the source table.
    population: f64,
    iso3: String,
    region: String,
}

pub(super) fn render(table: &Table, resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut frames = Vec::new();
    for row in table.countries() {
        let (Some(year), Some(fertility), Some(life_expectancy), Some(population)) =
            (row.year, row.fertility, row.life_expectancy, row.population)
        else {
            continue;
        };
        frames.push(Frame {
            country: row.location.clone(),
            year,
            fertility,
            life_expectancy,
            population,
            iso3: row.iso3.clone(),
            region: resolver.region_of(&row.location).to_string(),
        });
    }

    info!(records = frames.len(), "animation frames extracted");
    write_json(&out_dir.join("country_animation_data.json"), &frames)
}
