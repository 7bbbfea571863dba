//! Salary table under both reference-year policies, using the bundled CPI series.
//!
//! Optional arguments: `-v` for debug logging, and a path to write the
//! floating-policy table as CSV.
//!
//! Run with: cargo run --example inflation_table -- [-v] [out.csv]

use std::fs::File;

use salary_cpi::defaults::{DEFAULT_INDEX_PATH, DEFAULT_OBSERVATIONS, DEFAULT_REFERENCE_YEAR};
use salary_cpi::{adjust, fixed_year_bounds, Observations, PriceIndex, ReferencePolicy, SalaryTable};

fn print_table(title: &str, table: &SalaryTable) {
    println!("--- {title} ---");
    println!(
        "{:>6} {:>12} {:>10} {:>14} {:>14}",
        "Year", "Salary", "Reference", "Eroded", "Target"
    );
    for row in table.rows() {
        println!(
            "{:>6} {:>12.0} {:>10} {:>14.0} {:>14.0}",
            row.year, row.salary, row.reference_year, row.eroded_salary, row.target_salary
        );
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let index = PriceIndex::from_csv_path(DEFAULT_INDEX_PATH)?;
    let obs = Observations::from_pairs(DEFAULT_OBSERVATIONS)?;

    println!(
        "{} index: {}..={}, reference years selectable in {:?}\n",
        index.value_name(),
        index.min_year(),
        index.max_year(),
        fixed_year_bounds(&obs, &index)?
    );

    let floating = adjust(&obs, &index, ReferencePolicy::Floating)?;
    print_table("Floating reference (each reset)", &floating);

    let fixed = adjust(&obs, &index, ReferencePolicy::Fixed(DEFAULT_REFERENCE_YEAR))?;
    print_table(&format!("Fixed reference {DEFAULT_REFERENCE_YEAR}"), &fixed);

    if let Some(path) = args.iter().find(|a| !a.starts_with('-')) {
        floating.write_csv(File::create(path)?)?;
        println!("Floating table written to {path}");
    }

    Ok(())
}
