// src/regions/mod.rs

use std::collections::HashMap;
use tracing::debug;

use crate::table::{LocationKind, Table};

/// Classification for countries whose parent chain does not resolve.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Two-level location lookup: country → subregion → region, linked by the
/// parent-code column. Built once from the table and shared read-only by
/// every stage that groups countries regionally.
#[derive(Debug, Default)]
pub struct RegionResolver {
    subregion_to_region: HashMap<String, String>,
    country_to_region: HashMap<String, String>,
}

impl RegionResolver {
    pub fn build(table: &Table) -> Self {
        // Parent codes may point at rows of any type, so index every row.
        // First occurrence wins; a location repeats once per year.
        let mut by_code: HashMap<i64, &str> = HashMap::new();
        for row in table.rows() {
            if let Some(code) = row.location_code {
                by_code.entry(code).or_insert(row.location.as_str());
            }
        }

        let mut subregion_to_region: HashMap<String, String> = HashMap::new();
        for row in table.of_kind(LocationKind::Subregion) {
            if let Some(region) = row.parent_code.and_then(|code| by_code.get(&code)) {
                subregion_to_region
                    .entry(row.location.clone())
                    .or_insert_with(|| region.to_string());
            }
        }

        let mut country_to_region: HashMap<String, String> = HashMap::new();
        for row in table.of_kind(LocationKind::Country) {
            let Some(subregion) = row.parent_code.and_then(|code| by_code.get(&code)) else {
                continue;
            };
            if let Some(region) = subregion_to_region.get(*subregion) {
                country_to_region
                    .entry(row.location.clone())
                    .or_insert_with(|| region.clone());
            }
        }

        debug!(
            subregions = subregion_to_region.len(),
            countries = country_to_region.len(),
            "built region lookup"
        );
        Self {
            subregion_to_region,
            country_to_region,
        }
    }

    /// Region for a country name, or `"Unknown"` when the chain is broken.
    pub fn region_of(&self, country: &str) -> &str {
        self.country_to_region
            .get(country)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGION)
    }

    pub fn region_of_subregion(&self, subregion: &str) -> &str {
        self.subregion_to_region
            .get(subregion)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Number of countries with a resolved region.
    pub fn mapped_countries(&self) -> usize {
        self.country_to_region.len()
    }
}
