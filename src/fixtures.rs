//! Shared test fixtures. Compiled only for tests.

use crate::table::{columns, LocationKind, Row};

/// CSV header row matching the published column contract. The real headers
/// embed commas, so every field is quoted.
pub fn header_line() -> String {
    [
        columns::TYPE,
        columns::YEAR,
        columns::LOCATION,
        columns::ISO3,
        columns::LOCATION_CODE,
        columns::PARENT_CODE,
        columns::POPULATION,
        columns::FERTILITY,
        columns::LIFE_EXPECTANCY,
        columns::LIFE_EXPECTANCY_MALE,
        columns::LIFE_EXPECTANCY_FEMALE,
        columns::BIRTH_RATE,
        columns::DEATH_RATE,
        columns::INFANT_MORTALITY,
        columns::UNDER_FIVE_MORTALITY,
        columns::MEDIAN_AGE,
        columns::GROWTH_RATE,
        columns::DENSITY,
        columns::SEX_RATIO,
        columns::MIGRATION_RATE,
        columns::NATURAL_CHANGE,
        columns::MEAN_AGE_CHILDBEARING,
    ]
    .iter()
    .map(|c| format!("\"{}\"", c))
    .collect::<Vec<_>>()
    .join(",")
}

/// A row with identity fields set and every indicator blank.
pub fn row(kind: LocationKind, name: &str, year: i32) -> Row {
    Row {
        location: name.to_string(),
        iso3: String::new(),
        kind,
        location_code: None,
        parent_code: None,
        year: Some(year),
        population: None,
        fertility: None,
        life_expectancy: None,
        life_expectancy_male: None,
        life_expectancy_female: None,
        birth_rate: None,
        death_rate: None,
        infant_mortality: None,
        under_five_mortality: None,
        median_age: None,
        growth_rate: None,
        density: None,
        sex_ratio: None,
        migration_rate: None,
        natural_change: None,
        mean_age_childbearing: None,
    }
}

pub fn country(name: &str, year: i32) -> Row {
    row(LocationKind::Country, name, year)
}

/// One region, one subregion, one country over two years, as CSV text.
/// Egypt's population is 1000 then 1100 thousand.
pub fn minimal_csv() -> String {
    let mut csv = header_line();
    csv.push('\n');
    csv.push_str("Region,2023,Africa,,903,,1460000,4.1,64.0,62.3,65.8,32.0,7.9,38.0,52.0,19.0,2.3,48.0,100.2,-0.2,24.1,28.9\n");
    csv.push_str("Subregion,2023,Northern Africa,,912,903,,,,,,,,,,,,,,,,\n");
    csv.push_str("Country/Area,2022,Egypt,EGY,818,912,1000,3.0,70.0,68.0,72.0,22.0,6.0,17.0,21.0,25.0,1.6,100.0,101.0,-0.5,16.0,27.0\n");
    csv.push_str("Country/Area,2023,Egypt,EGY,818,912,1100,2.9,70.5,68.2,72.8,21.5,5.9,16.5,20.5,25.4,1.5,102.0,101.2,-0.4,15.6,27.1\n");
    csv
}
