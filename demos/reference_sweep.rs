//! Sweep every selectable fixed reference year and show how the salary held in
//! the last indexed year compares against it.
//!
//! Run with: cargo run --example reference_sweep

use salary_cpi::defaults::{DEFAULT_INDEX_PATH, DEFAULT_OBSERVATIONS};
use salary_cpi::{adjust, fixed_year_bounds, Observations, PriceIndex, ReferencePolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let index = PriceIndex::from_csv_path(DEFAULT_INDEX_PATH)?;
    let obs = Observations::from_pairs(DEFAULT_OBSERVATIONS)?;
    let last = index.max_year();

    println!("Target salary in {last} by reference year:");
    for reference in fixed_year_bounds(&obs, &index)? {
        let table = adjust(&obs, &index, ReferencePolicy::Fixed(reference))?;
        if let Some(row) = table.row(last) {
            println!(
                "  {reference}: {:>10.0}  (held salary {:.0}, eroded {:.0})",
                row.target_salary, row.salary, row.eroded_salary
            );
        }
    }

    Ok(())
}
