// src/viz/radar.rs

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::stats::Summary;
use crate::table::{LocationKind, Row, Table};
use crate::viz::write_json;

struct Indicator {
    key: &'static str,
    label: &'static str,
    get: fn(&Row) -> Option<f64>,
    /// Lower raw values are favorable; the normalized score is flipped so
    /// that higher always reads as better on the chart.
    invert: bool,
}

static INDICATORS: Lazy<Vec<Indicator>> = Lazy::new(|| {
    vec![
        Indicator {
            key: "fertility",
            label: "Total Fertility Rate",
            get: |r| r.fertility,
            invert: false,
        },
        Indicator {
            key: "migration",
            label: "Net Migration Rate",
            get: |r| r.migration_rate,
            invert: false,
        },
        Indicator {
            key: "lifeExpectancy",
            label: "Life Expectancy",
            get: |r| r.life_expectancy,
            invert: false,
        },
        Indicator {
            key: "medianAge",
            label: "Median Age",
            get: |r| r.median_age,
            invert: false,
        },
        Indicator {
            key: "infantMortality",
            label: "Infant Mortality (inverted)",
            get: |r| r.infant_mortality,
            invert: true,
        },
    ]
});

#[derive(Debug, Serialize)]
struct IndicatorValue {
    raw: f64,
    normalized: f64,
}

#[derive(Debug, Serialize)]
struct CountryProfile {
    country: String,
    iso3: String,
    region: String,
    values: BTreeMap<&'static str, IndicatorValue>,
}

#[derive(Serialize)]
struct RadarDoc {
    #[serde(rename = "globalStats")]
    global_stats: BTreeMap<&'static str, Summary>,
    #[serde(rename = "worldAverage")]
    world_average: BTreeMap<&'static str, IndicatorValue>,
    #[serde(rename = "regionalAverages")]
    regional_averages: BTreeMap<String, BTreeMap<&'static str, IndicatorValue>>,
    countries: BTreeMap<String, CountryProfile>,
    indicators: BTreeMap<&'static str, &'static str>,
}

/// Per-country profile of five indicators, min-max normalized over the
/// latest-year cross-section. Countries missing any of the five are left
/// out rather than emitted partially.
pub(super) fn render(table: &Table, resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let latest = table
        .latest_year()
        .ok_or_else(|| anyhow!("table has no year values"))?;
    let latest_countries: Vec<&Row> = table
        .countries()
        .filter(|r| r.year == Some(latest))
        .collect();

    let mut global_stats = BTreeMap::new();
    for ind in INDICATORS.iter() {
        let values: Vec<f64> = latest_countries.iter().filter_map(|r| (ind.get)(r)).collect();
        let summary = Summary::of(&values)
            .ok_or_else(|| anyhow!("no {} observations for {}", ind.key, latest))?;
        global_stats.insert(ind.key, summary);
    }

    // Regional rows carry the indicator aggregates directly; partial sets
    // are kept, and the scores are published unclamped and uninverted.
    let mut regional_averages: BTreeMap<String, BTreeMap<&'static str, IndicatorValue>> =
        BTreeMap::new();
    for row in table
        .of_kind(LocationKind::Region)
        .filter(|r| r.year == Some(latest))
    {
        let entry = regional_averages.entry(row.location.clone()).or_default();
        for ind in INDICATORS.iter() {
            if let Some(raw) = (ind.get)(row) {
                entry.insert(
                    ind.key,
                    IndicatorValue {
                        raw,
                        normalized: global_stats[ind.key].normalize(raw),
                    },
                );
            }
        }
    }

    // The dashboard draws the world profile at mid-scale, not at the mean's
    // true position in the range.
    let world_average: BTreeMap<&'static str, IndicatorValue> = INDICATORS
        .iter()
        .map(|ind| {
            (
                ind.key,
                IndicatorValue {
                    raw: global_stats[ind.key].mean,
                    normalized: 0.5,
                },
            )
        })
        .collect();

    let mut countries = BTreeMap::new();
    for row in &latest_countries {
        let mut values = BTreeMap::new();
        let mut complete = true;
        for ind in INDICATORS.iter() {
            match (ind.get)(row) {
                Some(raw) => {
                    let mut normalized = global_stats[ind.key].normalize(raw);
                    if ind.invert {
                        normalized = 1.0 - normalized;
                    }
                    values.insert(
                        ind.key,
                        IndicatorValue {
                            raw,
                            normalized: normalized.clamp(0.0, 1.0),
                        },
                    );
                }
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            countries.insert(
                row.location.clone(),
                CountryProfile {
                    country: row.location.clone(),
                    iso3: row.iso3.clone(),
                    region: resolver.region_of(&row.location).to_string(),
                    values,
                },
            );
        }
    }

    let doc = RadarDoc {
        global_stats,
        world_average,
        regional_averages,
        countries,
        indicators: INDICATORS.iter().map(|i| (i.key, i.label)).collect(),
    };
    info!(countries = doc.countries.len(), year = latest, "radar profiles");
    write_json(&out_dir.join("radar_chart_data.json"), &doc)
}
