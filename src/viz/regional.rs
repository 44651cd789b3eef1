// src/viz/regional.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Table};
use crate::viz::series::MetricPoint;
use crate::viz::write_json;

#[derive(Debug, Serialize)]
struct RegionSeries {
    region: String,
    values: Vec<MetricPoint>,
}

/// Full metric set per region per year. Population stays in thousands here;
/// the regional chart scales its own axis.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut regions = Vec::new();
    for (name, series) in table.grouped(LocationKind::Region) {
        let values: Vec<MetricPoint> = series
            .iter()
            .filter_map(|row| MetricPoint::from_row(row, false))
            .collect();
        if !values.is_empty() {
            regions.push(RegionSeries {
                region: name.to_string(),
                values,
            });
        }
    }

    info!(regions = regions.len(), "regional series built");
    write_json(&out_dir.join("regional_population_nested.json"), &regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::table::{LocationKind, Table};
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;

    #[test]
    fn regions_keep_appearance_order_and_skip_empty_years() -> Result<()> {
        let mut asia = fixtures::row(LocationKind::Region, "Asia", 2022);
        asia.population = Some(4_700_000.0);
        asia.birth_rate = Some(15.0);
        let mut africa = fixtures::row(LocationKind::Region, "Africa", 2022);
        africa.population = Some(1_460_000.0);
        let africa_gap = fixtures::row(LocationKind::Region, "Africa", 2023); // no population

        let table = Table::new(vec![asia, africa, africa_gap]);
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;
        render(&table, &resolver, out.path())?;

        let text = fs::read_to_string(out.path().join("regional_population_nested.json"))?;
        let doc: Value = serde_json::from_str(&text)?;
        let regions = doc.as_array().unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0]["region"], "Asia");
        assert_eq!(regions[1]["region"], "Africa");
        assert_eq!(regions[1]["values"].as_array().unwrap().len(), 1);
        // population is not rescaled in the regional artifact
        assert_eq!(regions[0]["values"][0]["population"], 4_700_000.0);
        // no iso3 key on regional rows
        assert!(regions[0]["values"][0].get("iso3").is_none());
        Ok(())
    }
}
