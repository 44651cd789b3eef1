// src/viz/mod.rs
//
// One submodule per output artifact. Every stage reads the immutable table
// (plus the shared region resolver where it needs regional grouping) and
// writes exactly one JSON document, so the whole set fans out over rayon.

pub mod format;

mod animation;
mod birth_death;
mod country_detail;
mod country_list;
mod country_series;
mod gender_gap;
mod globe;
mod growth;
mod projection;
mod radar;
mod region_meta;
mod regional;
mod ridgeline;
mod series;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::{
    fs,
    fs::File,
    io::BufWriter,
    path::Path,
};
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::Table;

type Stage = fn(&Table, &RegionResolver, &Path) -> Result<()>;

static STAGES: &[(&str, Stage)] = &[
    ("globe_data_all_years", globe::render),
    ("country_detail_data", country_detail::render),
    ("regional_population_nested", regional::render),
    ("birth_death_rates", birth_death::render),
    ("country_population_timeseries", country_series::render),
    ("countries_list", country_list::render),
    ("country_animation_data", animation::render),
    ("region_metadata", region_meta::render),
    ("radar_chart_data", radar::render),
    ("ridgeline_data", ridgeline::render),
    ("growth_drivers_data", growth::render),
    ("gender_gap_data", gender_gap::render),
    ("projection_uncertainty", projection::render),
];

/// Render every artifact into `out_dir`. Stages are independent and share
/// only immutable inputs, so they run in parallel; the first failure aborts
/// the whole run.
#[tracing::instrument(level = "info", skip(table, resolver, out_dir), fields(out = %out_dir.display()))]
pub fn render_all(table: &Table, resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {:?}", out_dir))?;

    STAGES.par_iter().try_for_each(|(name, stage)| {
        stage(table, resolver, out_dir).with_context(|| format!("rendering {}", name))
    })?;

    info!(artifacts = STAGES.len(), "all artifacts written");
    Ok(())
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("serializing {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::table;
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;

    #[test]
    fn all_thirteen_artifacts_render_from_a_minimal_table() -> Result<()> {
        let table = table::from_reader(fixtures::minimal_csv().as_bytes())?;
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;

        render_all(&table, &resolver, out.path())?;

        let expected = [
            "globe_data_all_years.json",
            "country_detail_data.json",
            "regional_population_nested.json",
            "birth_death_rates.json",
            "country_population_timeseries.json",
            "countries_list.json",
            "country_animation_data.json",
            "region_metadata.json",
            "radar_chart_data.json",
            "ridgeline_data.json",
            "growth_drivers_data.json",
            "gender_gap_data.json",
            "projection_uncertainty.json",
        ];
        for name in expected {
            let path = out.path().join(name);
            let text = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("missing artifact {}: {}", name, e));
            let _: Value = serde_json::from_str(&text)
                .unwrap_or_else(|e| panic!("artifact {} is not valid JSON: {}", name, e));
        }
        Ok(())
    }

    #[test]
    fn country_detail_matches_the_two_year_series() -> Result<()> {
        let table = table::from_reader(fixtures::minimal_csv().as_bytes())?;
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;

        render_all(&table, &resolver, out.path())?;

        let text = fs::read_to_string(out.path().join("country_detail_data.json"))?;
        let doc: Value = serde_json::from_str(&text)?;
        let series = doc["Egypt"].as_array().expect("Egypt series");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["year"], 2022);
        assert_eq!(series[0]["population"], 1_000_000.0);
        assert_eq!(series[1]["year"], 2023);
        assert_eq!(series[1]["population"], 1_100_000.0);
        Ok(())
    }
}
