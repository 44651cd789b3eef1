// src/viz/series.rs

use serde::Serialize;

use crate::table::Row;
use crate::viz::format::{or_default, or_zero};

/// One year of the full metric set, shared by the regional and per-country
/// time-series artifacts. The country variant appends an `iso3` field; the
/// regional variant leaves it off.
#[derive(Debug, Serialize)]
pub(super) struct MetricPoint {
    pub year: i32,
    pub population: f64,
    pub density: f64,
    #[serde(rename = "sexRatio")]
    pub sex_ratio: f64,
    #[serde(rename = "medianAge")]
    pub median_age: f64,
    #[serde(rename = "birthRate")]
    pub birth_rate: f64,
    #[serde(rename = "deathRate")]
    pub death_rate: f64,
    #[serde(rename = "naturalChange")]
    pub natural_change: f64,
    #[serde(rename = "migrationRate")]
    pub migration_rate: f64,
    #[serde(rename = "fertilityRate")]
    pub fertility_rate: f64,
    #[serde(rename = "meanAgeChildbearing")]
    pub mean_age_childbearing: f64,
    #[serde(rename = "infantMortality")]
    pub infant_mortality: f64,
    #[serde(rename = "underFiveMortality")]
    pub under_five_mortality: f64,
    #[serde(rename = "lifeExpectancyMale")]
    pub life_expectancy_male: f64,
    #[serde(rename = "lifeExpectancyFemale")]
    pub life_expectancy_female: f64,
    #[serde(rename = "lifeExpectancyBoth")]
    pub life_expectancy_both: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

impl MetricPoint {
    /// `None` when the row has no year or no population; all other gaps
    /// default to 0 (100 for the sex ratio).
    pub fn from_row(row: &Row, with_iso3: bool) -> Option<Self> {
        let year = row.year?;
        let population = row.population?;
        Some(Self {
            year,
            population,
            density: or_zero(row.density),
            sex_ratio: or_default(row.sex_ratio, 100.0),
            median_age: or_zero(row.median_age),
            birth_rate: or_zero(row.birth_rate),
            death_rate: or_zero(row.death_rate),
            natural_change: or_zero(row.natural_change),
            migration_rate: or_zero(row.migration_rate),
            fertility_rate: or_zero(row.fertility),
            mean_age_childbearing: or_zero(row.mean_age_childbearing),
            infant_mortality: or_zero(row.infant_mortality),
            under_five_mortality: or_zero(row.under_five_mortality),
            life_expectancy_male: or_zero(row.life_expectancy_male),
            life_expectancy_female: or_zero(row.life_expectancy_female),
            life_expectancy_both: or_zero(row.life_expectancy),
            iso3: with_iso3.then(|| row.iso3.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn rows_without_population_produce_nothing() {
        let row = fixtures::country("Egypt", 2023);
        assert!(MetricPoint::from_row(&row, false).is_none());
    }

    #[test]
    fn gaps_default_while_iso3_is_variant_specific() {
        let mut row = fixtures::country("Egypt", 2023);
        row.population = Some(112_716.0);
        row.iso3 = "EGY".to_string();

        let regional = MetricPoint::from_row(&row, false).unwrap();
        assert_eq!(regional.sex_ratio, 100.0);
        assert_eq!(regional.density, 0.0);
        assert!(regional.iso3.is_none());

        let country = MetricPoint::from_row(&row, true).unwrap();
        assert_eq!(country.iso3.as_deref(), Some("EGY"));
    }
}
