use crate::data::Observations;
use crate::types::{SalaryError, Year};

/// One year on the densified axis before any index ratio is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeldSalary {
    pub year: Year,
    pub salary: f64,
    /// Observation year whose value is in effect for this row.
    pub source_year: Year,
}

/// Step-hold a sparse salary series over every year in `start..=end`.
///
/// Each year takes the value of the most recent observation at or before it
/// (forward fill). Years before the first observation take the first
/// observation's value and year (backward fill).
///
/// # Errors
/// Returns `SalaryError::EmptyInput` if there are no observations and
/// `SalaryError::InvalidConfig` if `end < start`.
pub fn step_hold(obs: &Observations, start: Year, end: Year) -> Result<Vec<HeldSalary>, SalaryError> {
    let mut points = obs.iter().peekable();
    let first = *points.peek().ok_or(SalaryError::EmptyInput)?;
    if end < start {
        return Err(SalaryError::InvalidConfig(format!(
            "axis end {end} precedes axis start {start}"
        )));
    }

    let rows = end
        .checked_sub(start)
        .and_then(|span| usize::try_from(span).ok())
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| {
            SalaryError::InvalidConfig(format!("axis {start}..={end} is too long"))
        })?;

    let mut held = first;
    let mut out = Vec::with_capacity(rows);
    for year in start..=end {
        while let Some(&(obs_year, salary)) = points.peek() {
            if obs_year > year {
                break;
            }
            held = (obs_year, salary);
            points.next();
        }
        out.push(HeldSalary {
            year,
            salary: held.1,
            source_year: held.0,
        });
    }

    Ok(out)
}
