use ndarray::Array1;

use crate::data::{validate_observations, Observations};
use crate::fill::step_hold;
use crate::index::PriceIndex;
use crate::table::SalaryTable;
use crate::types::{AdjustOptions, ReferencePolicy, SalaryError, SalaryRow, Year};

/// Densify salary observations and express them against the price index.
///
/// Convenience form of [`adjust_with`] using the default axis: first observation
/// year through the index's last year.
///
/// # Arguments
/// * `obs` - Salary resets keyed by year (at least one)
/// * `index` - Price index covering every year of the axis
/// * `policy` - Fixed reference year or floating per reset
///
/// # Errors
/// Returns `SalaryError::EmptyInput` for no observations and a lookup error
/// (`YearOutOfRange` / `MissingYear`) for any year the index cannot answer for.
pub fn adjust(
    obs: &Observations,
    index: &PriceIndex,
    policy: ReferencePolicy,
) -> Result<SalaryTable, SalaryError> {
    adjust_with(obs, index, &AdjustOptions::with_policy(policy))
}

/// Densify salary observations over the configured axis and compute
/// eroded and target salaries for every year.
///
/// For each row, with `r = index(year) / index(reference_year)`:
/// `eroded_salary = salary / r` and `target_salary = salary * r`.
pub fn adjust_with(
    obs: &Observations,
    index: &PriceIndex,
    opts: &AdjustOptions,
) -> Result<SalaryTable, SalaryError> {
    let first = validate_observations(obs, index)?;

    let start = opts.axis_start.unwrap_or(first);
    if start > first {
        return Err(SalaryError::InvalidConfig(format!(
            "axis start {start} is after the first observation year {first}"
        )));
    }
    let end = opts.axis_end.unwrap_or_else(|| index.max_year());
    index.check_range(start)?;
    index.check_range(end)?;

    let held = step_hold(obs, start, end)?;
    let years: Vec<Year> = held.iter().map(|h| h.year).collect();
    let references: Vec<Year> = match opts.policy {
        ReferencePolicy::Fixed(year) => vec![year; held.len()],
        ReferencePolicy::Floating => held.iter().map(|h| h.source_year).collect(),
    };
    log::debug!(
        "Adjusting {} observations over {}..={} with {:?}",
        obs.len(),
        start,
        end,
        opts.policy
    );

    let ratios = index.inflation_ratio_many(&references, &years)?;
    let salary: Array1<f64> = held.iter().map(|h| h.salary).collect();
    let eroded = &salary / &ratios;
    let target = &salary * &ratios;

    let rows = (0..held.len())
        .map(|i| SalaryRow {
            year: years[i],
            salary: salary[i],
            reference_year: references[i],
            eroded_salary: eroded[i],
            target_salary: target[i],
        })
        .collect();

    Ok(SalaryTable::new(rows, opts.policy))
}
