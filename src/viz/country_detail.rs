// src/viz/country_detail.rs

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Table};
use crate::viz::format::{or_default, or_zero};
use crate::viz::write_json;

#[derive(Debug, Serialize)]
struct DetailPoint {
    year: i32,
    /// Absolute persons, scaled up from the table's thousands.
    population: f64,
    density: f64,
    #[serde(rename = "sexRatio")]
    sex_ratio: f64,
    #[serde(rename = "medianAge")]
    median_age: f64,
}

/// Compact per-country series for the detail panel. Years without a
/// population figure are skipped; countries with nothing left are omitted.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut countries: BTreeMap<String, Vec<DetailPoint>> = BTreeMap::new();

    for (name, series) in table.grouped(LocationKind::Country) {
        let points: Vec<DetailPoint> = series
            .iter()
            .filter_map(|row| {
                let year = row.year?;
                let population = row.population? * 1000.0;
                Some(DetailPoint {
                    year,
                    population,
                    density: or_zero(row.density),
                    sex_ratio: or_default(row.sex_ratio, 100.0),
                    median_age: or_zero(row.median_age),
                })
            })
            .collect();
        if !points.is_empty() {
            countries.insert(name.to_string(), points);
        }
    }

    info!(countries = countries.len(), "country detail series built");
    write_json(&out_dir.join("country_detail_data.json"), &countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::table::Table;
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;

    #[test]
    fn population_is_scaled_and_gap_years_skipped() -> Result<()> {
        let mut y1 = fixtures::country("Egypt", 2022);
        y1.population = Some(1000.0);
        let y2 = fixtures::country("Egypt", 2023); // no population
        let mut y3 = fixtures::country("Egypt", 2024);
        y3.population = Some(1100.0);
        y3.sex_ratio = Some(101.2);

        let empty = fixtures::country("Nowhere", 2023);

        let table = Table::new(vec![y1, y2, y3, empty]);
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;
        render(&table, &resolver, out.path())?;

        let text = fs::read_to_string(out.path().join("country_detail_data.json"))?;
        let doc: Value = serde_json::from_str(&text)?;
        let series = doc["Egypt"].as_array().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["population"], 1_000_000.0);
        assert_eq!(series[0]["sexRatio"], 100.0);
        assert_eq!(series[1]["population"], 1_100_000.0);
        assert_eq!(series[1]["sexRatio"], 101.2);
        assert!(doc.get("Nowhere").is_none());
        Ok(())
    }
}
