//! Column names of the source table. These must stay synchronised with the
//! headers of `world-demographic.csv` exactly as published.

pub const TYPE: &str = "Type";
pub const YEAR: &str = "Year";
pub const LOCATION: &str = "Region, subregion, country or area *";
pub const ISO3: &str = "ISO3 Alpha-code";
pub const LOCATION_CODE: &str = "Location code";
pub const PARENT_CODE: &str = "Parent code";

pub const POPULATION: &str = "Total Population, as of 1 July (thousands)";
pub const FERTILITY: &str = "Total Fertility Rate (live births per woman)";
pub const LIFE_EXPECTANCY: &str = "Life Expectancy at Birth, both sexes (years)";
pub const LIFE_EXPECTANCY_MALE: &str = "Male Life Expectancy at Birth (years)";
pub const LIFE_EXPECTANCY_FEMALE: &str = "Female Life Expectancy at Birth (years)";
pub const BIRTH_RATE: &str = "Crude Birth Rate (births per 1,000 population)";
pub const DEATH_RATE: &str = "Crude Death Rate (deaths per 1,000 population)";
pub const INFANT_MORTALITY: &str = "Infant Mortality Rate (infant deaths per 1,000 live births)";
pub const UNDER_FIVE_MORTALITY: &str =
    "Under-Five Mortality (deaths under age 5 per 1,000 live births)";
pub const MEDIAN_AGE: &str = "Median Age, as of 1 July (years)";
pub const GROWTH_RATE: &str = "Population Growth Rate (percentage)";
pub const DENSITY: &str = "Population Density, as of 1 July (persons per square km)";
pub const SEX_RATIO: &str = "Population Sex Ratio, as of 1 July (males per 100 females)";
pub const MIGRATION_RATE: &str = "Net Migration Rate (per 1,000 population)";
pub const NATURAL_CHANGE: &str = "Rate of Natural Change (per 1,000 population)";
pub const MEAN_AGE_CHILDBEARING: &str = "Mean Age Childbearing (years)";
