// src/viz/ridgeline.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::stats::{self, Summary};
use crate::table::Table;
use crate::viz::write_json;

const FIRST_DECADE: i32 = 1950;
const LAST_DECADE: i32 = 2020;
const AGE_LO: f64 = 10.0;
const AGE_HI: f64 = 60.0;
const AGE_WIDTH: f64 = 2.0;

#[derive(Debug, Serialize)]
struct BucketOut {
    age: f64,
    count: usize,
    density: f64,
}

#[derive(Debug, Serialize)]
struct DecadeOut {
    decade: i32,
    label: String,
    countries: usize,
    mean: f64,
    median: f64,
    distribution: Vec<BucketOut>,
}

/// Cross-country median-age distribution per decade, binned into fixed-width
/// buckets. Decades with no observations are omitted entirely.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut decades = Vec::new();

    let mut decade = FIRST_DECADE;
    while decade <= LAST_DECADE {
        let ages: Vec<f64> = table
            .countries()
            .filter(|r| r.year == Some(decade))
            .filter_map(|r| r.median_age)
            .collect();

        if let Some(summary) = Summary::of(&ages) {
            let total = ages.len();
            let distribution = stats::histogram(&ages, AGE_LO, AGE_HI, AGE_WIDTH)
                .into_iter()
                .map(|bin| BucketOut {
                    age: bin.midpoint,
                    count: bin.count,
                    density: bin.count as f64 / total as f64,
                })
                .collect();
            decades.push(DecadeOut {
                decade,
                label: format!("{}s", decade),
                countries: total,
                mean: summary.mean,
                median: summary.median,
                distribution,
            });
        }
        decade += 10;
    }

    info!(decades = decades.len(), "median-age distributions binned");
    write_json(&out_dir.join("ridgeline_data.json"), &decades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::table::Table;
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;

    fn aged(name: &str, year: i32, median_age: f64) -> crate::table::Row {
        let mut row = fixtures::country(name, year);
        row.median_age = Some(median_age);
        row
    }

    fn render_doc(table: &Table) -> Result<Value> {
        let resolver = RegionResolver::build(table);
        let out = tempfile::tempdir()?;
        render(table, &resolver, out.path())?;
        let text = fs::read_to_string(out.path().join("ridgeline_data.json"))?;
        Ok(serde_json::from_str(&text)?)
    }

    #[test]
    fn densities_sum_to_one_per_decade() -> Result<()> {
        let table = Table::new(vec![
            aged("A", 1950, 18.2),
            aged("B", 1950, 22.7),
            aged("C", 1950, 31.4),
            aged("D", 1950, 45.0),
        ]);
        let doc = render_doc(&table)?;
        let decades = doc.as_array().unwrap();
        assert_eq!(decades.len(), 1);
        let sum: f64 = decades[0]["distribution"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["density"].as_f64().unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9, "densities summed to {}", sum);
        Ok(())
    }

    #[test]
    fn empty_decades_are_omitted() -> Result<()> {
        let mut no_age = fixtures::country("A", 1960);
        no_age.median_age = None;
        let table = Table::new(vec![aged("A", 1950, 20.0), no_age, aged("A", 1970, 25.0)]);
        let doc = render_doc(&table)?;
        let decades: Vec<i64> = doc
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["decade"].as_i64().unwrap())
            .collect();
        assert_eq!(decades, vec![1950, 1970]);
        Ok(())
    }

    #[test]
    fn off_decade_years_are_ignored() -> Result<()> {
        let table = Table::new(vec![aged("A", 1955, 20.0), aged("A", 1960, 21.0)]);
        let doc = render_doc(&table)?;
        let decades = doc.as_array().unwrap();
        assert_eq!(decades.len(), 1);
        assert_eq!(decades[0]["decade"], 1960);
        assert_eq!(decades[0]["countries"], 1);
        Ok(())
    }
}
