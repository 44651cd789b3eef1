// src/viz/region_meta.rs

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::regions::RegionResolver;
use crate::table::Table;
use crate::viz::write_json;

#[derive(Debug, Serialize)]
struct RegionMeta {
    name: &'static str,
    color: &'static str,
}

/// The dashboard's fixed region palette. Hand-maintained; the colors are
/// shared by every region-tinted chart.
static REGION_PALETTE: &[RegionMeta] = &[
    RegionMeta { name: "Africa", color: "#e41a1c" },
    RegionMeta { name: "Asia", color: "#377eb8" },
    RegionMeta { name: "Europe", color: "#4daf4a" },
    RegionMeta { name: "Latin America and the Caribbean", color: "#984ea3" },
    RegionMeta { name: "Northern America", color: "#ff7f00" },
    RegionMeta { name: "Oceania", color: "#a65628" },
];

pub(super) fn render(_table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    write_json(&out_dir.join("region_metadata.json"), &REGION_PALETTE)
}
