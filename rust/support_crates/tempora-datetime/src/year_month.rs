use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A month of a specific year, such as `2016-01`.
///
/// Stored as the number of months elapsed since January of year 1, so that
/// month stepping and month distances are integer operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    months: i32,
}

impl YearMonth {
    pub const MIN: YearMonth = YearMonth { months: 0 };
    pub const MAX: YearMonth = YearMonth { months: MAX_MONTHS };

    /// Creates a year-month value.
    ///
    /// # Panics
    /// Panics if `year` is outside `1..=9999` or `month` outside `1..=12`.
    ///
    /// # Examples
    /// ```rust
    /// # use tempora_datetime::YearMonth;
    /// let ym = YearMonth::of(2016, 2);
    /// assert_eq!(ym.length_of_month(), 29);
    /// ```
    pub fn of(year: i32, month: i32) -> YearMonth {
        Self::try_of(year, month).expect("invalid year-month")
    }

    pub fn try_of(year: i32, month: i32) -> YearMonthResult {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateTimeError::InvalidArgument(format!("year={year}")));
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(DateTimeError::InvalidArgument(format!("month={month}")));
        }
        Ok(YearMonth {
            months: (year - MIN_YEAR) * MONTHS_PER_YEAR + month - 1,
        })
    }

    pub fn try_from_months(months: i64) -> YearMonthResult {
        if !(0..=MAX_MONTHS as i64).contains(&months) {
            Err(DateTimeError::DateOverflow)
        } else {
            Ok(YearMonth {
                months: months as i32,
            })
        }
    }

    /// Returns the number of months elapsed since January of year 1.
    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn year(&self) -> i32 {
        self.months / MONTHS_PER_YEAR + MIN_YEAR
    }

    pub fn month(&self) -> i32 {
        self.months % MONTHS_PER_YEAR + 1
    }

    pub fn length_of_month(&self) -> i32 {
        Date::days_in_month(self.year(), self.month())
    }

    pub fn first_day(&self) -> Date {
        Date::from_ymd(self.year(), self.month(), 1)
    }

    pub fn last_day(&self) -> Date {
        Date::from_ymd(self.year(), self.month(), self.length_of_month())
    }

    /// Returns the date at `day` of this month, if it exists.
    pub fn at_day(&self, day: i32) -> DateResult {
        Date::try_from_ymd(self.year(), self.month(), day)
    }
}

// Arithmetic
impl YearMonth {
    pub fn checked_add_months(self, months: i64) -> Option<YearMonth> {
        let result = (self.months as i64).checked_add(months)?;
        YearMonth::try_from_months(result).ok()
    }

    /// Returns the month `months` months after this one (before it, when negative).
    ///
    /// # Panics
    /// Panics if the result falls outside `0001-01..=9999-12`.
    pub fn plus_months(self, months: i64) -> YearMonth {
        self.checked_add_months(months).unwrap_or_else(|| {
            panic!("YearMonth overflow: cannot move {self} by {months} months")
        })
    }

    /// Returns the signed number of months from `self` to `end`.
    pub fn months_until(&self, end: &YearMonth) -> i64 {
        end.months as i64 - self.months as i64
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DateTimeError::Parse {
            input: s.to_string(),
            expected: "a month formatted as YYYY-MM",
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(parse_error)?;
        let year = year.parse::<i32>().map_err(|_| parse_error())?;
        let month = month.parse::<i32>().map_err(|_| parse_error())?;
        YearMonth::try_of(year, month)
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DateTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
