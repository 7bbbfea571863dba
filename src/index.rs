//! Yearly price index lookup.
//!
//! A [`PriceIndex`] is built once (usually from a two-column CSV file) and then
//! only read. It answers `index_of(year)` for every year it holds and fails with
//! a lookup error for anything else; it never clamps or extrapolates.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array1;

use crate::defaults::YEAR_COLUMN;
use crate::types::{SalaryError, Year};

/// Read-only yearly price index series.
#[derive(Clone, Debug)]
pub struct PriceIndex {
    values: BTreeMap<Year, f64>,
    value_name: String,
}

impl PriceIndex {
    /// Build an index from (year, value) pairs.
    ///
    /// # Errors
    /// Returns `SalaryError::EmptyIndex` for no pairs, `SalaryError::DuplicateIndexYear`
    /// if a year repeats and `SalaryError::InvalidIndex` for non-positive or non-finite values.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SalaryError>
    where
        I: IntoIterator<Item = (Year, f64)>,
    {
        let mut values = BTreeMap::new();
        for (year, value) in pairs {
            if !value.is_finite() || value <= 0.0 {
                return Err(SalaryError::InvalidIndex { year, value });
            }
            if values.insert(year, value).is_some() {
                return Err(SalaryError::DuplicateIndexYear(year));
            }
        }
        if values.is_empty() {
            return Err(SalaryError::EmptyIndex);
        }
        Ok(Self {
            values,
            value_name: "index".to_string(),
        })
    }

    /// Load an index from CSV with a `year` column and one value column.
    ///
    /// The first non-`year` column holds the index values; its header is kept
    /// as [`PriceIndex::value_name`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SalaryError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let year_col = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(YEAR_COLUMN))
            .ok_or_else(|| SalaryError::MissingColumn(YEAR_COLUMN.to_string()))?;
        let value_col = (0..headers.len())
            .find(|&i| i != year_col)
            .ok_or_else(|| SalaryError::MissingColumn("index value".to_string()))?;
        let value_name = headers[value_col].to_string();

        let mut pairs = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let field = |col: usize| record.get(col).unwrap_or("");
            let year: Year = field(year_col).parse().map_err(|_| SalaryError::MalformedRow {
                line,
                reason: format!("year {:?} is not an integer", field(year_col)),
            })?;
            let value: f64 = field(value_col).parse().map_err(|_| SalaryError::MalformedRow {
                line,
                reason: format!("index value {:?} is not a number", field(value_col)),
            })?;
            pairs.push((year, value));
        }

        let mut index = Self::from_pairs(pairs)?;
        index.value_name = value_name;
        log::info!(
            "Loaded price index '{}': {} years ({}..={})",
            index.value_name,
            index.len(),
            index.min_year(),
            index.max_year()
        );
        Ok(index)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, SalaryError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    pub fn min_year(&self) -> Year {
        // Construction rejects empty series.
        self.values.keys().next().copied().unwrap_or_default()
    }

    pub fn max_year(&self) -> Year {
        self.values.keys().next_back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.values.iter().map(|(&y, &v)| (y, v))
    }

    pub fn contains(&self, year: Year) -> bool {
        self.values.contains_key(&year)
    }

    /// Fail with a lookup error unless `year` lies inside the closed range of the series.
    pub fn check_range(&self, year: Year) -> Result<(), SalaryError> {
        let (min, max) = (self.min_year(), self.max_year());
        if year < min || year > max {
            return Err(SalaryError::YearOutOfRange { year, min, max });
        }
        Ok(())
    }

    /// Index value for `year`.
    ///
    /// # Errors
    /// `SalaryError::YearOutOfRange` outside the series range, `SalaryError::MissingYear`
    /// for a gap inside it.
    pub fn index_of(&self, year: Year) -> Result<f64, SalaryError> {
        self.check_range(year)?;
        self.values
            .get(&year)
            .copied()
            .ok_or(SalaryError::MissingYear(year))
    }

    /// Index values for `years`, in input order.
    pub fn index_of_many(&self, years: &[Year]) -> Result<Array1<f64>, SalaryError> {
        years
            .iter()
            .map(|&y| self.index_of(y))
            .collect::<Result<Vec<_>, _>>()
            .map(Array1::from)
    }

    /// `index(to) / index(from)`: converts an amount in `from` money into `to` money.
    pub fn inflation_ratio(&self, from: Year, to: Year) -> Result<f64, SalaryError> {
        Ok(self.index_of(to)? / self.index_of(from)?)
    }

    /// Pairwise ratios `index(to[i]) / index(from[i])`.
    ///
    /// # Errors
    /// Returns `SalaryError::LengthMismatch` if the slices differ in length.
    pub fn inflation_ratio_many(&self, from: &[Year], to: &[Year]) -> Result<Array1<f64>, SalaryError> {
        if from.len() != to.len() {
            return Err(SalaryError::LengthMismatch);
        }
        Ok(self.index_of_many(to)? / self.index_of_many(from)?)
    }

    /// Ratios from one year to each of `to`.
    pub fn inflation_ratio_to_many(&self, from: Year, to: &[Year]) -> Result<Array1<f64>, SalaryError> {
        let base = self.index_of(from)?;
        Ok(self.index_of_many(to)? / base)
    }
}
