// src/viz/birth_death.rs

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Row, Table};
use crate::viz::write_json;

#[derive(Debug, Serialize)]
struct RatePoint {
    year: i32,
    #[serde(rename = "birthRate")]
    birth_rate: f64,
    #[serde(rename = "deathRate")]
    death_rate: f64,
    /// Derived as birth minus death, not the table's own natural-change
    /// column, so the three numbers always reconcile.
    #[serde(rename = "naturalChange")]
    natural_change: f64,
}

#[derive(Debug, Serialize)]
struct RegionRates {
    region: String,
    values: Vec<RatePoint>,
}

#[derive(Debug, Serialize)]
struct BirthDeathDoc {
    regions: Vec<RegionRates>,
    countries: BTreeMap<String, Vec<RatePoint>>,
}

fn rate_point(row: &Row) -> Option<RatePoint> {
    let year = row.year?;
    let birth_rate = row.birth_rate?;
    let death_rate = row.death_rate?;
    Some(RatePoint {
        year,
        birth_rate,
        death_rate,
        natural_change: birth_rate - death_rate,
    })
}

/// Birth/death rate series for the small-multiples view, regional and
/// per-country in one document.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut regions = Vec::new();
    for (name, series) in table.grouped(LocationKind::Region) {
        let values: Vec<RatePoint> = series.iter().filter_map(|r| rate_point(r)).collect();
        if !values.is_empty() {
            regions.push(RegionRates {
                region: name.to_string(),
                values,
            });
        }
    }

    let mut countries: BTreeMap<String, Vec<RatePoint>> = BTreeMap::new();
    for (name, series) in table.grouped(LocationKind::Country) {
        let values: Vec<RatePoint> = series.iter().filter_map(|r| rate_point(r)).collect();
        if !values.is_empty() {
            countries.insert(name.to_string(), values);
        }
    }

    let doc = BirthDeathDoc { regions, countries };
    info!(
        regions = doc.regions.len(),
        countries = doc.countries.len(),
        "birth/death series built"
    );
    write_json(&out_dir.join("birth_death_rates.json"), &doc)
}
