//! # salary_cpi
//!
//! A Rust library for inflation-adjusted salary trajectories.
//!
//! Given a few salary "resets" (year → salary) and a yearly price index, the crate
//! fills every year from the first reset to the last indexed year and computes:
//!
//! * **Eroded salary**: the held salary re-expressed in each year's money
//! * **Target salary**: what each year would have to pay to keep the purchasing
//!   power held at the reference year
//!
//! The reference year is either fixed for all rows or floats to the most recent
//! reset ([`ReferencePolicy`]).
//!
//! ## Example
//!
//! ```
//! use salary_cpi::{adjust, Observations, PriceIndex, ReferencePolicy};
//!
//! // 3% a year
//! let index = PriceIndex::from_pairs((2000..=2010).map(|y| (y, 100.0 * 1.03f64.powi(y - 2000)))).unwrap();
//! let obs = Observations::from_pairs(vec![(2000, 30_000.0), (2006, 36_000.0)]).unwrap();
//!
//! let table = adjust(&obs, &index, ReferencePolicy::Floating).unwrap();
//! assert_eq!(table.len(), 11);
//!
//! let row = table.row(2008).unwrap();
//! assert_eq!(row.reference_year, 2006);
//! println!("2008: target {:.0}, eroded {:.0}", row.target_salary, row.eroded_salary);
//! ```

// Module declarations
pub mod adjust;
pub mod data;
pub mod defaults;
pub mod fill;
pub mod index;
mod table;
mod types;

// Re-export public types
pub use data::Observations;
pub use index::PriceIndex;
pub use table::SalaryTable;
pub use types::{
    AdjustOptions, ErrorKind, ReferencePolicy, SalaryColumn, SalaryError, SalaryRow, Year,
};

// Re-export main public functions
pub use adjust::{adjust, adjust_with};
pub use data::{fixed_year_bounds, validate_observations};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn index_1988_2024() -> PriceIndex {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/cpi_by_year.csv");
        PriceIndex::from_csv_path(path).unwrap()
    }

    fn default_obs() -> Observations {
        Observations::from_pairs(defaults::DEFAULT_OBSERVATIONS).unwrap()
    }

    #[test]
    fn test_densification_coverage() {
        let index = index_1988_2024();
        let table = adjust(&default_obs(), &index, ReferencePolicy::Fixed(2002)).unwrap();

        assert_eq!(table.years().collect::<Vec<_>>(), (2002..=2024).collect::<Vec<_>>());
        for row in table.rows() {
            let expected = match row.year {
                2002..=2013 => 24_000.0,
                2014..=2021 => 35_000.0,
                _ => 55_000.0,
            };
            assert_eq!(row.salary, expected, "year {}", row.year);
        }
    }

    #[test]
    fn test_floating_reference_tracking() {
        let index = index_1988_2024();
        let table = adjust(&default_obs(), &index, ReferencePolicy::Floating).unwrap();

        for row in table.rows() {
            let expected = match row.year {
                2002..=2013 => 2002,
                2014..=2021 => 2014,
                _ => 2022,
            };
            assert_eq!(row.reference_year, expected, "year {}", row.year);
        }
    }

    #[test]
    fn test_fixed_year_degeneracy() {
        let index = index_1988_2024();
        for fixed in [2002, 2010, 2024] {
            let table = adjust(&default_obs(), &index, ReferencePolicy::Fixed(fixed)).unwrap();
            let row = table.row(fixed).unwrap();
            assert!((row.eroded_salary - row.salary).abs() < 1e-9);
            assert!((row.target_salary - row.salary).abs() < 1e-9);
        }
    }

    #[test]
    fn test_eroded_and_target_diverge() {
        // Rising index: eroded falls below and target rises above the held salary.
        let index = index_1988_2024();
        let table = adjust(&default_obs(), &index, ReferencePolicy::Fixed(2002)).unwrap();
        let row = table.row(2013).unwrap();
        assert!(row.eroded_salary < row.salary);
        assert!(row.target_salary > row.salary);

        let r = index.inflation_ratio(2002, 2013).unwrap();
        assert!((row.eroded_salary - row.salary / r).abs() < 1e-8);
        assert!((row.target_salary - row.salary * r).abs() < 1e-8);
    }

    #[test]
    fn test_errors_for_presentation() {
        let index = index_1988_2024();

        let err = adjust(&Observations::new(), &index, ReferencePolicy::Floating).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = index.index_of(1900).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.year(), Some(1900));

        let obs = Observations::parse_pairs(vec![(2002, "24000"), (1975, "9000")]).unwrap();
        let err = adjust(&obs, &index, ReferencePolicy::Floating).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.year(), Some(1975));
    }

    #[test]
    fn test_editor_round() {
        // Rows added and removed between recomputations.
        let index = index_1988_2024();
        let mut obs = default_obs();
        obs.insert(2018, 42_000.0).unwrap();
        obs.remove(2022);

        let bounds = fixed_year_bounds(&obs, &index).unwrap();
        assert_eq!(bounds, 2002..=2024);

        let table = adjust(&obs, &index, ReferencePolicy::Floating).unwrap();
        assert_eq!(table.row(2024).unwrap().salary, 42_000.0);
        assert_eq!(table.row(2024).unwrap().reference_year, 2018);
    }

    #[test]
    fn test_csv_in_csv_out() {
        let index = PriceIndex::from_csv_reader(Cursor::new("year,CPI\n2000,100\n2001,110\n2002,121\n"))
            .unwrap();
        let obs = Observations::from_csv_reader(Cursor::new("year,salary\n2000,1000\n")).unwrap();
        let table = adjust(&obs, &index, ReferencePolicy::Fixed(2000)).unwrap();

        let target = table.column(SalaryColumn::TargetSalary);
        assert!((target[2] - 1210.0).abs() < 1e-9);

        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }

    fn obs_strategy() -> impl Strategy<Value = Vec<(Year, f64)>> {
        prop::collection::vec((1988..=2024i32, 0.0..200_000.0f64), 1..6)
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn prop_adjust_idempotent(pairs in obs_strategy(), fixed in 1988..=2024i32, floating in any::<bool>()) {
            let index = index_1988_2024();
            let obs = Observations::from_pairs(pairs).unwrap();
            let policy = if floating { ReferencePolicy::Floating } else { ReferencePolicy::Fixed(fixed) };
            let a = adjust(&obs, &index, policy).unwrap();
            let b = adjust(&obs, &index, policy).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_rows_follow_formulas(pairs in obs_strategy()) {
            let index = index_1988_2024();
            let obs = Observations::from_pairs(pairs).unwrap();
            let table = adjust(&obs, &index, ReferencePolicy::Floating).unwrap();
            prop_assert_eq!(table.len() as i32, 2024 - obs.first_year().unwrap() + 1);
            for row in table.rows() {
                let r = index.inflation_ratio(row.reference_year, row.year).unwrap();
                prop_assert!((row.eroded_salary - row.salary / r).abs() < 1e-6);
                prop_assert!((row.target_salary - row.salary * r).abs() < 1e-6);
                prop_assert_eq!(obs.get(row.reference_year), Some(row.salary));
            }
        }
    }
}
