// src/table/mod.rs

pub mod columns;
mod load;

pub use load::{from_reader, load};

use std::collections::HashSet;

/// Classification of a table row, from the `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Country,
    Subregion,
    Region,
    Other,
}

impl LocationKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Country/Area" => LocationKind::Country,
            "Subregion" => LocationKind::Subregion,
            "Region" => LocationKind::Region,
            _ => LocationKind::Other,
        }
    }
}

/// One (location, year) observation. Indicators that were blank or
/// unparseable in the source are `None`; a `None` never fails a stage, it
/// only excludes the row from outputs that need the value.
#[derive(Debug, Clone)]
pub struct Row {
    pub location: String,
    pub iso3: String,
    pub kind: LocationKind,
    pub location_code: Option<i64>,
    pub parent_code: Option<i64>,
    pub year: Option<i32>,

    /// Total population, in thousands.
    pub population: Option<f64>,
    pub fertility: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub life_expectancy_male: Option<f64>,
    pub life_expectancy_female: Option<f64>,
    pub birth_rate: Option<f64>,
    pub death_rate: Option<f64>,
    pub infant_mortality: Option<f64>,
    pub under_five_mortality: Option<f64>,
    pub median_age: Option<f64>,
    pub growth_rate: Option<f64>,
    pub density: Option<f64>,
    pub sex_ratio: Option<f64>,
    pub migration_rate: Option<f64>,
    pub natural_change: Option<f64>,
    pub mean_age_childbearing: Option<f64>,
}

/// The cleaned source table. Immutable after load; every stage reads from
/// the same instance.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maximum year present anywhere in the table.
    pub fn latest_year(&self) -> Option<i32> {
        self.rows.iter().filter_map(|r| r.year).max()
    }

    pub fn of_kind(&self, kind: LocationKind) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }

    pub fn countries(&self) -> impl Iterator<Item = &Row> {
        self.of_kind(LocationKind::Country)
    }

    /// Distinct location names of one kind, in first-appearance order.
    pub fn unique_locations(&self, kind: LocationKind) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in self.of_kind(kind) {
            if seen.insert(row.location.as_str()) {
                out.push(row.location.as_str());
            }
        }
        out
    }

    /// Rows of one kind grouped by location name (first-appearance order),
    /// each group sorted by year. Rows without a year are left out.
    pub fn grouped(&self, kind: LocationKind) -> Vec<(&str, Vec<&Row>)> {
        let mut groups: Vec<(&str, Vec<&Row>)> = Vec::new();
        for name in self.unique_locations(kind) {
            let mut series: Vec<&Row> = self
                .of_kind(kind)
                .filter(|r| r.location == name && r.year.is_some())
                .collect();
            series.sort_by_key(|r| r.year);
            groups.push((name, series));
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::row as bare;

    #[test]
    fn latest_year_over_all_kinds() {
        let table = Table::new(vec![
            bare(LocationKind::Region, "Africa", 2021),
            bare(LocationKind::Country, "Egypt", 2023),
            bare(LocationKind::Country, "Egypt", 1950),
        ]);
        assert_eq!(table.latest_year(), Some(2023));
    }

    #[test]
    fn grouped_sorts_by_year_and_keeps_appearance_order() {
        let table = Table::new(vec![
            bare(LocationKind::Country, "Peru", 2000),
            bare(LocationKind::Country, "Chad", 1990),
            bare(LocationKind::Country, "Peru", 1950),
        ]);
        let groups = table.grouped(LocationKind::Country);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Peru");
        let years: Vec<_> = groups[0].1.iter().map(|r| r.year.unwrap()).collect();
        assert_eq!(years, vec![1950, 2000]);
        assert_eq!(groups[1].0, "Chad");
    }

    #[test]
    fn unique_locations_is_kind_scoped() {
        let table = Table::new(vec![
            bare(LocationKind::Region, "Africa", 2000),
            bare(LocationKind::Country, "Egypt", 2000),
        ]);
        assert_eq!(table.unique_locations(LocationKind::Country), vec!["Egypt"]);
        assert_eq!(table.unique_locations(LocationKind::Region), vec!["Africa"]);
    }
}
