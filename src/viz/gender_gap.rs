// src/viz/gender_gap.rs

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Row, Table};
use crate::viz::write_json;

const BASELINE_YEAR: i32 = 1950;

/// The slopegraph's time-series panel sticks to a fixed set of populous
/// countries rather than drawing all ~200 lines.
static MAJOR_COUNTRIES: &[&str] = &[
    "China",
    "India",
    "United States of America",
    "Indonesia",
    "Pakistan",
    "Brazil",
    "Nigeria",
    "Bangladesh",
    "Russian Federation",
    "Japan",
];

#[derive(Debug, Serialize)]
struct GapYear {
    male: f64,
    female: f64,
    gap: f64,
}

#[derive(Debug, Serialize)]
struct Comparison {
    country: String,
    iso3: String,
    region: String,
    year1950: GapYear,
    /// Single entry keyed `year<latest>`, e.g. `year2023`.
    #[serde(flatten)]
    latest: BTreeMap<String, GapYear>,
    #[serde(rename = "gapChange")]
    gap_change: f64,
}

#[derive(Debug, Serialize)]
struct SeriesPoint {
    year: i32,
    male: f64,
    female: f64,
    gap: f64,
}

#[derive(Debug, Serialize)]
struct CountrySeries {
    country: String,
    values: Vec<SeriesPoint>,
}

#[derive(Debug, Serialize)]
struct YearSpan {
    start: i32,
    end: i32,
}

#[derive(Debug, Serialize)]
struct GenderGapDoc {
    comparison: Vec<Comparison>,
    timeseries: Vec<CountrySeries>,
    years: YearSpan,
}

fn gap_year(row: &Row) -> Option<GapYear> {
    let male = row.life_expectancy_male?;
    let female = row.life_expectancy_female?;
    Some(GapYear {
        male,
        female,
        gap: female - male,
    })
}

/// Male vs. female life expectancy: endpoint comparison for every country
/// plus full series for the fixed major-country panel.
pub(super) fn render(table: &Table, resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let latest = table
        .latest_year()
        .ok_or_else(|| anyhow!("table has no year values"))?;

    let mut comparison = Vec::new();
    for (name, series) in table.grouped(LocationKind::Country) {
        let at = |year: i32| series.iter().find(|r| r.year == Some(year));
        let (Some(first), Some(last)) = (at(BASELINE_YEAR), at(latest)) else {
            continue;
        };
        let (Some(start), Some(end)) = (gap_year(first), gap_year(last)) else {
            continue;
        };
        let gap_change = end.gap - start.gap;
        let mut latest_entry = BTreeMap::new();
        latest_entry.insert(format!("year{}", latest), end);
        comparison.push(Comparison {
            country: name.to_string(),
            iso3: last.iso3.clone(),
            region: resolver.region_of(name).to_string(),
            year1950: start,
            latest: latest_entry,
            gap_change,
        });
    }

    let mut timeseries = Vec::new();
    for &name in MAJOR_COUNTRIES {
        let values: Vec<SeriesPoint> = table
            .countries()
            .filter(|r| r.location == name)
            .filter_map(|r| {
                let year = r.year?;
                let gy = gap_year(r)?;
                Some(SeriesPoint {
                    year,
                    male: gy.male,
                    female: gy.female,
                    gap: gy.gap,
                })
            })
            .collect();
        if !values.is_empty() {
            timeseries.push(CountrySeries {
                country: name.to_string(),
                values,
            });
        }
    }

    let doc = GenderGapDoc {
        comparison,
        timeseries,
        years: YearSpan {
            start: BASELINE_YEAR,
            end: latest,
        },
    };
    info!(countries = doc.comparison.len(), "gender-gap comparison built");
    write_json(&out_dir.join("gender_gap_data.json"), &doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::table::Table;
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;

    fn expectancies(name: &str, year: i32, male: f64, female: f64) -> crate::table::Row {
        let mut row = fixtures::country(name, year);
        row.life_expectancy_male = Some(male);
        row.life_expectancy_female = Some(female);
        row
    }

    fn render_doc(table: &Table) -> Result<Value> {
        let resolver = RegionResolver::build(table);
        let out = tempfile::tempdir()?;
        render(table, &resolver, out.path())?;
        let text = fs::read_to_string(out.path().join("gender_gap_data.json"))?;
        Ok(serde_json::from_str(&text)?)
    }

    #[test]
    fn comparison_uses_a_dynamic_latest_year_key() -> Result<()> {
        let table = Table::new(vec![
            expectancies("Japan", 1950, 59.6, 63.1),
            expectancies("Japan", 2023, 81.1, 87.1),
        ]);
        let doc = render_doc(&table)?;
        let entry = &doc["comparison"][0];
        assert_eq!(entry["country"], "Japan");
        assert!((entry["year1950"]["gap"].as_f64().unwrap() - 3.5).abs() < 1e-9);
        assert!((entry["year2023"]["gap"].as_f64().unwrap() - 6.0).abs() < 1e-9);
        assert!((entry["gapChange"].as_f64().unwrap() - 2.5).abs() < 1e-9);
        assert_eq!(doc["years"]["start"], 1950);
        assert_eq!(doc["years"]["end"], 2023);
        Ok(())
    }

    #[test]
    fn countries_missing_either_endpoint_are_dropped() -> Result<()> {
        let mut latest_only = expectancies("Eritrea", 2023, 64.0, 69.0);
        latest_only.year = Some(2023);
        let table = Table::new(vec![
            expectancies("Japan", 1950, 59.6, 63.1),
            expectancies("Japan", 2023, 81.1, 87.1),
            latest_only,
        ]);
        let doc = render_doc(&table)?;
        assert_eq!(doc["comparison"].as_array().unwrap().len(), 1);
        Ok(())
    }

    #[test]
    fn timeseries_covers_only_the_major_country_panel() -> Result<()> {
        let table = Table::new(vec![
            expectancies("Japan", 1950, 59.6, 63.1),
            expectancies("Japan", 2023, 81.1, 87.1),
            expectancies("Monaco", 1950, 63.0, 68.0),
            expectancies("Monaco", 2023, 84.0, 88.0),
        ]);
        let doc = render_doc(&table)?;
        let series = doc["timeseries"].as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["country"], "Japan");
        assert_eq!(series[0]["values"].as_array().unwrap().len(), 2);
        Ok(())
    }
}
