use serde::Serialize;

/// Calendar year used as key for both the price index and salary observations.
pub type Year = i32;

/// Which year a row's index ratio is anchored on.
///
/// # Example
/// ```
/// use salary_cpi::ReferencePolicy;
/// let fixed = ReferencePolicy::Fixed(2002);
/// assert_eq!(fixed.fixed_year(), Some(2002));
/// assert_eq!(ReferencePolicy::default(), ReferencePolicy::Floating);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Every row is expressed relative to this single year.
    Fixed(Year),
    /// Every row is expressed relative to the most recent observation at or before it.
    #[default]
    Floating,
}

impl ReferencePolicy {
    pub fn fixed_year(&self) -> Option<Year> {
        match self {
            Self::Fixed(year) => Some(*year),
            Self::Floating => None,
        }
    }
}

/// Options for one adjustment run.
///
/// # Example
/// ```
/// use salary_cpi::{AdjustOptions, ReferencePolicy};
/// let opts = AdjustOptions {
///     policy: ReferencePolicy::Fixed(2010),
///     axis_start: Some(2000),
///     axis_end: None,
/// };
/// ```
#[derive(Clone, Debug, Default)]
pub struct AdjustOptions {
    pub policy: ReferencePolicy,
    /// First year of the output axis. Defaults to the first observation year;
    /// an earlier year backward-fills from the first observation.
    pub axis_start: Option<Year>,
    /// Last year of the output axis. Defaults to the index's last known year.
    pub axis_end: Option<Year>,
}

impl AdjustOptions {
    pub fn with_policy(policy: ReferencePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}

/// One year of the densified salary table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SalaryRow {
    pub year: Year,
    /// Step-held salary in effect for this year.
    #[serde(rename = "Salary")]
    pub salary: f64,
    /// Year whose index anchors this row's ratio.
    #[serde(rename = "Reference Year")]
    pub reference_year: Year,
    /// `salary` re-expressed in this year's money (loss of real value).
    #[serde(rename = "Eroded Salary")]
    pub eroded_salary: f64,
    /// Salary needed this year to keep the purchasing power held at `reference_year`.
    #[serde(rename = "Target Salary")]
    pub target_salary: f64,
}

/// Value columns of a [`SalaryRow`], in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SalaryColumn {
    Salary,
    ErodedSalary,
    TargetSalary,
}

impl SalaryColumn {
    pub const ALL: [SalaryColumn; 3] = [Self::Salary, Self::ErodedSalary, Self::TargetSalary];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::ErodedSalary => "Eroded Salary",
            Self::TargetSalary => "Target Salary",
        }
    }

    pub fn value(&self, row: &SalaryRow) -> f64 {
        match self {
            Self::Salary => row.salary,
            Self::ErodedSalary => row.eroded_salary,
            Self::TargetSalary => row.target_salary,
        }
    }
}

/// Coarse classification of [`SalaryError`] for the presentation boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input; show as a validation message.
    InvalidInput,
    /// A year the price index cannot answer for.
    Lookup,
    /// Malformed or unreadable index data.
    Data,
}

/// Library error type.
#[derive(thiserror::Error, Debug)]
pub enum SalaryError {
    #[error("empty input: at least one salary observation is required")]
    EmptyInput,
    #[error("invalid salary for year {year}: {reason}")]
    InvalidSalary { year: Year, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("year {year} is outside the price index range {min}..={max}")]
    YearOutOfRange { year: Year, min: Year, max: Year },
    #[error("price index has no entry for year {0}")]
    MissingYear(Year),
    #[error("input lengths mismatch")]
    LengthMismatch,
    #[error("invalid price index value for year {year}: {value}")]
    InvalidIndex { year: Year, value: f64 },
    #[error("duplicate price index year {0}")]
    DuplicateIndexYear(Year),
    #[error("price index series is empty")]
    EmptyIndex,
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SalaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::InvalidSalary { .. } | Self::InvalidConfig(_) => {
                ErrorKind::InvalidInput
            }
            Self::YearOutOfRange { .. } | Self::MissingYear(_) => ErrorKind::Lookup,
            Self::LengthMismatch
            | Self::InvalidIndex { .. }
            | Self::DuplicateIndexYear(_)
            | Self::EmptyIndex
            | Self::MissingColumn(_)
            | Self::MalformedRow { .. }
            | Self::Csv(_)
            | Self::Io(_) => ErrorKind::Data,
        }
    }

    /// The offending year, when the error is about one.
    pub fn year(&self) -> Option<Year> {
        match self {
            Self::InvalidSalary { year, .. }
            | Self::YearOutOfRange { year, .. }
            | Self::InvalidIndex { year, .. } => Some(*year),
            Self::MissingYear(year) | Self::DuplicateIndexYear(year) => Some(*year),
            _ => None,
        }
    }
}
