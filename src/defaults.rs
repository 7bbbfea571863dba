//! Default constants for index loading and salary adjustment.

use crate::types::Year;

pub const DEFAULT_INDEX_PATH: &str = "data/cpi_by_year.csv";
pub const YEAR_COLUMN: &str = "year";
pub const DEFAULT_REFERENCE_YEAR: Year = 2002;
pub const DEFAULT_OBSERVATIONS: [(Year, f64); 3] = [(2002, 24_000.0), (2014, 35_000.0), (2022, 55_000.0)];
