//! Calendar value types stepped over by tempora ranges.
//!
//! [`Date`] counts days and [`YearMonth`] counts months, both from January 1st
//! of year 1 in the proleptic Gregorian calendar. The [`adjusters`] module
//! provides the step functions used for arbitrary-step ranges ("next Monday",
//! "last day of month", ...). Both types implement
//! [`tempora_ranges::Steppable`], so they can be walked by fixed-step ranges.

pub mod adjusters;
pub mod date;
pub mod day_of_week;
pub mod step;
pub mod year_month;


pub use date::Date;
pub use day_of_week::DayOfWeek;
pub use year_month::YearMonth;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;
pub const MONTHS_PER_YEAR: i32 = 12;
pub const DAYS_PER_WEEK: i32 = 7;

pub const DAYS_PER_YEAR: i32 = 365;
pub const DAYS_PER_4_YEARS: i32 = DAYS_PER_YEAR * 4 + 1; // 1461
pub const DAYS_PER_100_YEARS: i32 = DAYS_PER_4_YEARS * 25 - 1; // 36524
pub const DAYS_PER_400_YEARS: i32 = DAYS_PER_100_YEARS * 4 + 1; // 146097
pub const DAYS_TO_10000: i32 = DAYS_PER_400_YEARS * 25 - 366; // 3652059
pub const MAX_DAYS: i32 = DAYS_TO_10000 - 1;
pub const MAX_MONTHS: i32 = MAX_YEAR * MONTHS_PER_YEAR - 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("A valid date must be between '0001-01-01' and '9999-12-31'")]
    DateOverflow,

    #[error("Unable to parse '{input}', expected {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },
}

pub type DateResult = std::result::Result<Date, DateTimeError>;
pub type YearMonthResult = std::result::Result<YearMonth, DateTimeError>;

impl From<DateTimeError> for tempora_common::Error {
    fn from(e: DateTimeError) -> Self {
        match e {
            DateTimeError::DateOverflow => tempora_common::Error::out_of_range("date", Box::new(e)),
            other => tempora_common::Error::invalid_arg("date", other.to_string()),
        }
    }
}
