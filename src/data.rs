use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::index::PriceIndex;
use crate::types::{SalaryError, Year};

/// User-entered salary resets: "as of this year, my salary became this amount".
///
/// Years are unique; salaries are finite and non-negative.
///
/// # Example
/// ```
/// use salary_cpi::Observations;
/// let obs = Observations::from_pairs(vec![(2014, 35_000.0), (2002, 24_000.0)]).unwrap();
/// assert_eq!(obs.first_year(), Some(2002));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observations {
    salaries: BTreeMap<Year, f64>,
}

#[derive(Debug, Deserialize)]
struct ObservationRecord {
    year: Year,
    salary: String,
}

fn check_salary(year: Year, salary: f64) -> Result<f64, SalaryError> {
    if !salary.is_finite() {
        return Err(SalaryError::InvalidSalary {
            year,
            reason: format!("{salary} is not a finite number"),
        });
    }
    if salary < 0.0 {
        return Err(SalaryError::InvalidSalary {
            year,
            reason: format!("{salary} is negative"),
        });
    }
    Ok(salary)
}

fn parse_salary(year: Year, raw: &str) -> Result<f64, SalaryError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    let salary = cleaned.parse::<f64>().map_err(|_| SalaryError::InvalidSalary {
        year,
        reason: format!("{raw:?} is not a number"),
    })?;
    check_salary(year, salary)
}

impl Observations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of (year, salary); later entries for a repeated year win.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SalaryError>
    where
        I: IntoIterator<Item = (Year, f64)>,
    {
        let mut obs = Self::new();
        for (year, salary) in pairs {
            if obs.insert(year, salary)?.is_some() {
                log::warn!("Duplicate salary for year {year}; keeping the last entry");
            }
        }
        Ok(obs)
    }

    /// Build from editor rows whose salary is still text.
    ///
    /// Thousands separators (`,` or `_`) and surrounding whitespace are ignored.
    ///
    /// # Errors
    /// Returns `SalaryError::InvalidSalary` for non-numeric or negative salaries.
    pub fn parse_pairs<'a, I>(pairs: I) -> Result<Self, SalaryError>
    where
        I: IntoIterator<Item = (Year, &'a str)>,
    {
        let parsed = pairs
            .into_iter()
            .map(|(year, raw)| parse_salary(year, raw).map(|s| (year, s)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pairs(parsed)
    }

    /// Load `year,salary` rows from CSV.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SalaryError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut pairs = Vec::new();
        for record in rdr.deserialize::<ObservationRecord>() {
            let record = record?;
            pairs.push((record.year, parse_salary(record.year, &record.salary)?));
        }
        Self::from_pairs(pairs)
    }

    /// Set the salary for `year`, returning the value it replaced.
    pub fn insert(&mut self, year: Year, salary: f64) -> Result<Option<f64>, SalaryError> {
        let salary = check_salary(year, salary)?;
        Ok(self.salaries.insert(year, salary))
    }

    pub fn remove(&mut self, year: Year) -> Option<f64> {
        self.salaries.remove(&year)
    }

    pub fn get(&self, year: Year) -> Option<f64> {
        self.salaries.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.salaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salaries.is_empty()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.salaries.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.salaries.keys().next_back().copied()
    }

    /// Observations in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.salaries.iter().map(|(&y, &s)| (y, s))
    }
}

/// Check observations against the index before any densification.
///
/// Returns the first observation year.
///
/// # Errors
/// Returns `SalaryError::EmptyInput` for no observations and
/// `SalaryError::YearOutOfRange` naming the first observation year the index cannot cover.
pub fn validate_observations(obs: &Observations, index: &PriceIndex) -> Result<Year, SalaryError> {
    let first = obs.first_year().ok_or(SalaryError::EmptyInput)?;
    for (year, _) in obs.iter() {
        index.check_range(year)?;
    }
    Ok(first)
}

/// Range of years a fixed reference year may be chosen from:
/// first observation year through the last index year.
pub fn fixed_year_bounds(
    obs: &Observations,
    index: &PriceIndex,
) -> Result<std::ops::RangeInclusive<Year>, SalaryError> {
    let first = validate_observations(obs, index)?;
    Ok(first..=index.max_year())
}
