// src/viz/projection.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::stats::linear_fit;
use crate::table::{LocationKind, Table};
use crate::viz::write_json;

/// Window of history the trend is fitted on.
const HISTORY_WINDOW: usize = 10;
/// Countries with fewer observed populations than this are skipped outright.
const MIN_OBSERVATIONS: usize = 5;
const FIRST_PROJECTED: i32 = 2024;
const LAST_PROJECTED: i32 = 2030;
/// Uncertainty is measured in years past this anchor.
const ANCHOR_YEAR: i32 = 2023;
/// Band growth per projected year.
const WIDENING_PER_YEAR: f64 = 0.05;

#[derive(Debug, Serialize)]
struct Projection {
    country: String,
    year: i32,
    median: f64,
    lower_50: f64,
    upper_50: f64,
    lower_95: f64,
    upper_95: f64,
}

/// Straight-line population projection per country with widening bands.
/// Fits the most recent ten years, needs at least five real observations,
/// and substitutes the last observed value when the line dips negative.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut projections = Vec::new();

    for (name, series) in table.grouped(LocationKind::Country) {
        if series.len() < MIN_OBSERVATIONS {
            continue;
        }
        let window = &series[series.len().saturating_sub(HISTORY_WINDOW)..];

        let mut years = Vec::new();
        let mut populations = Vec::new();
        for row in window {
            if let (Some(year), Some(pop)) = (row.year, row.population) {
                years.push(year as f64);
                populations.push(pop);
            }
        }
        if populations.len() < MIN_OBSERVATIONS {
            continue;
        }
        let Some((slope, intercept)) = linear_fit(&years, &populations) else {
            continue;
        };
        let last_observed = *populations.last().expect("window is non-empty");

        for year in FIRST_PROJECTED..=LAST_PROJECTED {
            let years_ahead = (year - ANCHOR_YEAR) as f64;
            let factor = 1.0 + years_ahead * WIDENING_PER_YEAR;

            let mut median = slope * year as f64 + intercept;
            if median < 0.0 {
                median = last_observed;
            }

            projections.push(Projection {
                country: name.to_string(),
                year,
                median,
                lower_50: median * (1.0 - 0.25 * factor),
                upper_50: median * (1.0 + 0.25 * factor),
                lower_95: median * (1.0 - 0.5 * factor),
                upper_95: median * (1.0 + 0.5 * factor),
            });
        }
    }

    info!(records = projections.len(), "population projections fitted");
    write_json(&out_dir.join("projection_uncertainty.json"), &projections)
}
