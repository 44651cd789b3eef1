// src/viz/country_list.rs

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::regions::RegionResolver;
use crate::table::{LocationKind, Table};
use crate::viz::write_json;

/// Alphabetical list of country names for the selector widget.
pub(super) fn render(table: &Table, _resolver: &RegionResolver, out_dir: &Path) -> Result<()> {
    let mut names: Vec<&str> = table.unique_locations(LocationKind::Country);
    names.sort_unstable();

    info!(countries = names.len(), "country list sorted");
    write_json(&out_dir.join("countries_list.json"), &names)
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
    fn list_is_sorted_and_deduplicated() -> Result<()> {
        let table = Table::new(vec![
            fixtures::country("Peru", 2022),
            fixtures::country("Chad", 2022),
            fixtures::country("Peru", 2023),
            fixtures::row(LocationKind::Region, "Africa", 2023),
        ]);
        let resolver = RegionResolver::build(&table);
        let out = tempfile::tempdir()?;
        render(&table, &resolver, out.path())?;

        let text = fs::read_to_string(out.path().join("countries_list.json"))?;
        let doc: Value = serde_json::from_str(&text)?;
        let names: Vec<&str> = doc
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Chad", "Peru"]);
        Ok(())
    }
}
