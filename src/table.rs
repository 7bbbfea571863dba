use std::io::Write;

use ndarray::Array1;

use crate::types::{ReferencePolicy, SalaryColumn, SalaryError, SalaryRow, Year};

/// Dense per-year result of one adjustment, ordered by year.
#[derive(Clone, Debug, PartialEq)]
pub struct SalaryTable {
    rows: Vec<SalaryRow>,
    policy: ReferencePolicy,
}

impl SalaryTable {
    pub(crate) fn new(rows: Vec<SalaryRow>, policy: ReferencePolicy) -> Self {
        Self { rows, policy }
    }

    pub fn rows(&self) -> &[SalaryRow] {
        &self.rows
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.rows.iter().map(|r| r.year)
    }

    pub fn row(&self, year: Year) -> Option<&SalaryRow> {
        let first = self.rows.first()?.year;
        let offset = usize::try_from(year.checked_sub(first)?).ok()?;
        self.rows.get(offset).filter(|r| r.year == year)
    }

    /// One value column, aligned with [`SalaryTable::years`].
    pub fn column(&self, column: SalaryColumn) -> Array1<f64> {
        self.rows.iter().map(|r| column.value(r)).collect()
    }

    /// `(year, series label, value)` triples, one series per value column,
    /// for plotting the three salaries on a shared year axis.
    pub fn long_form(&self) -> Vec<(Year, &'static str, f64)> {
        SalaryColumn::ALL
            .iter()
            .flat_map(|col| self.rows.iter().map(move |r| (r.year, col.label(), col.value(r))))
            .collect()
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SalaryError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SalaryTable {
        let rows = (2020..=2022)
            .map(|year| SalaryRow {
                year,
                salary: 100.0,
                reference_year: 2020,
                eroded_salary: 100.0 - (year - 2020) as f64,
                target_salary: 100.0 + (year - 2020) as f64,
            })
            .collect();
        SalaryTable::new(rows, ReferencePolicy::Fixed(2020))
    }

    #[test]
    fn test_row_lookup() {
        let t = table();
        assert_eq!(t.policy(), ReferencePolicy::Fixed(2020));
        assert_eq!(t.row(2021).unwrap().target_salary, 101.0);
        assert!(t.row(2019).is_none());
        assert!(t.row(2023).is_none());
    }

    #[test]
    fn test_column() {
        let t = table();
        assert_eq!(t.column(SalaryColumn::TargetSalary).to_vec(), vec![100.0, 101.0, 102.0]);
        assert_eq!(t.column(SalaryColumn::ErodedSalary).to_vec(), vec![100.0, 99.0, 98.0]);
    }

    #[test]
    fn test_long_form() {
        let long = table().long_form();
        assert_eq!(long.len(), 9);
        assert_eq!(long[0], (2020, "Salary", 100.0));
        assert_eq!(long[3], (2020, "Eroded Salary", 100.0));
        assert_eq!(long[8], (2022, "Target Salary", 102.0));
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        table().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("year,Salary,Reference Year,Eroded Salary,Target Salary")
        );
        assert_eq!(lines.next(), Some("2020,100.0,2020,100.0,100.0"));
        assert_eq!(text.lines().count(), 4);
    }
}
