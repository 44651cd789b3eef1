// src/viz/country_series.rs

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Table};
use crate::viz::series::MetricPoint;
use crate::viz::write_json;

/// Full metric set per country per year for the comparison tool. Unlike the
/// detail artifact, population stays in thousands and every row carries its
/// ISO3 code.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut countries: BTreeMap<String, Vec<MetricPoint>> = BTreeMap::new();
    for (name, series) in table.grouped(LocationKind::Country) {
        let values: Vec<MetricPoint> = series
            .iter()
            .filter_map(|row| MetricPoint::from_row(row, true))
            .collect();
        if !values.is_empty() {
            countries.insert(name.to_string(), values);
        }
    }

    info!(countries = countries.len(), "country metric series built");
    write_json(
        &out_dir.join("country_population_timeseries.json"),
        &countries,
    )
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
    fn series_carry_iso3_and_thousands_population() -> Result<()> {
        let mut row = fixtures::country("Egypt", 2023);
        row.population = Some(112_716.0);
        row.iso3 = "EGY".to_string();
        row.fertility = Some(2.9);

        let table = Table::new(vec![row]);
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;
        render(&table, &resolver, out.path())?;

        let text = fs::read_to_string(out.path().join("country_population_timeseries.json"))?;
        let doc: Value = serde_json::from_str(&text)?;
        let point = &doc["Egypt"][0];
        assert_eq!(point["population"], 112_716.0);
        assert_eq!(point["iso3"], "EGY");
        assert_eq!(point["fertilityRate"], 2.9);
        Ok(())
    }
}
