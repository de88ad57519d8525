use super::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAYS_TO_MONTH_365: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const DAYS_TO_MONTH_366: [i32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// A calendar date without a time-of-day component.
///
/// Stored as the number of days elapsed since January 1, 0001, which makes
/// ordering, day arithmetic and distance computations plain integer operations.
/// Valid dates span `0001-01-01` through `9999-12-31`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    days: i32,
}

impl Date {
    pub const MIN: Date = Date { days: 0 };
    pub const MAX: Date = Date { days: MAX_DAYS };

    /// Returns the number of days elapsed since January 1, 0001.
    ///
    /// # Examples
    /// ```rust
    /// # use tempora_datetime::Date;
    /// assert_eq!(Date::from_ymd(1, 1, 2).days(), 1);
    /// ```
    pub fn days(&self) -> i32 {
        self.days
    }
}

// Constructors
impl Date {
    /// Creates a date from the number of days since January 1, 0001.
    ///
    /// # Panics
    /// Panics if `days` is negative or exceeds [`MAX_DAYS`].
    /// For fallible construction, use `try_from_days`.
    pub fn from_days(days: i32) -> Date {
        assert!(
            (0..=MAX_DAYS).contains(&days),
            "Invalid days argument: Date::from_days({days}) - must be within 0..={MAX_DAYS}"
        );
        Date { days }
    }

    /// Attempts to create a date from the number of days since January 1, 0001.
    ///
    /// # Returns
    /// * `Ok(Date)` if `0 <= days <= MAX_DAYS`
    /// * `Err(DateTimeError::DateOverflow)` otherwise
    pub fn try_from_days(days: i64) -> DateResult {
        if !(0..=MAX_DAYS as i64).contains(&days) {
            Err(DateTimeError::DateOverflow)
        } else {
            Ok(Date { days: days as i32 })
        }
    }

    /// Creates a date from the specified year, month, and day.
    ///
    /// # Panics
    /// Panics if the components do not denote a valid date.
    ///
    /// # Examples
    /// ```rust
    /// # use tempora_datetime::Date;
    /// let date = Date::from_ymd(2016, 1, 4);
    /// assert_eq!((date.year(), date.month(), date.day()), (2016, 1, 4));
    /// ```
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Date {
        Self::try_from_ymd(year, month, day).expect("invalid date")
    }

    /// Attempts to create a date from the specified year, month, and day.
    pub fn try_from_ymd(year: i32, month: i32, day: i32) -> DateResult {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateTimeError::InvalidArgument(format!("year={year}")));
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(DateTimeError::InvalidArgument(format!("month={month}")));
        }

        let days = Self::days_to_month(year);
        if day < 1 || day > days[month as usize] - days[(month - 1) as usize] {
            return Err(DateTimeError::InvalidArgument(format!("day={day}")));
        }

        let y = year - 1;
        let n = y * 365 + y / 4 - y / 100 + y / 400 + days[(month - 1) as usize] + day - 1;
        Ok(Date { days: n })
    }
}

// Public get methods
impl Date {
    pub fn year(&self) -> i32 {
        self.create_naive_representation().year()
    }

    pub fn month(&self) -> i32 {
        self.create_naive_representation().month() as i32
    }

    pub fn day(&self) -> i32 {
        self.create_naive_representation().day() as i32
    }

    /// Returns the ordinal day of the year (1 = January 1st).
    pub fn day_of_year(&self) -> i32 {
        self.create_naive_representation().ordinal() as i32
    }

    /// Returns the day of the week.
    ///
    /// January 1, 0001 is a Monday in the proleptic Gregorian calendar.
    ///
    /// # Examples
    /// ```rust
    /// # use tempora_datetime::{Date, DayOfWeek};
    /// assert_eq!(Date::from_ymd(2016, 1, 1).day_of_week(), DayOfWeek::Friday);
    /// ```
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_index((self.days + 1) % DAYS_PER_WEEK)
    }

    /// Returns the month this date falls in.
    pub fn year_month(&self) -> YearMonth {
        let naive = self.create_naive_representation();
        YearMonth::of(naive.year(), naive.month() as i32)
    }
}

// Arithmetic
impl Date {
    /// Returns the date `days` days after this one (before it, when negative),
    /// or `None` if the result falls outside the supported range.
    pub fn checked_add_days(self, days: i64) -> Option<Date> {
        let result = (self.days as i64).checked_add(days)?;
        Date::try_from_days(result).ok()
    }

    /// Returns the date `days` days after this one (before it, when negative).
    ///
    /// # Panics
    /// Panics if the result falls outside `0001-01-01..=9999-12-31`.
    pub fn plus_days(self, days: i64) -> Date {
        self.checked_add_days(days).unwrap_or_else(|| {
            panic!("Date overflow: cannot move {self} by {days} days")
        })
    }

    /// Returns the signed number of days from `self` to `end`.
    ///
    /// Positive when `end` is later than `self`.
    pub fn days_until(&self, end: &Date) -> i64 {
        end.days as i64 - self.days as i64
    }
}

impl Date {
    pub fn create_naive_representation(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.days + 1).expect("naive_date")
    }

    fn from_naive(naive: NaiveDate) -> DateResult {
        if !(MIN_YEAR..=MAX_YEAR).contains(&naive.year()) {
            return Err(DateTimeError::DateOverflow);
        }
        Date::try_from_days(naive.num_days_from_ce() as i64 - 1)
    }
}

// Static utility methods
impl Date {
    pub fn is_leap_year(year: i32) -> bool {
        assert!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "Invalid year argument: Date::is_leap_year({year})"
        );
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    pub fn days_in_month(year: i32, month: i32) -> i32 {
        assert!(
            (1..=MONTHS_PER_YEAR).contains(&month),
            "Invalid month argument: Date::days_in_month({month})"
        );
        let days = Self::days_to_month(year);
        days[month as usize] - days[(month - 1) as usize]
    }

    fn days_to_month(year: i32) -> &'static [i32; 13] {
        // is_leap_year checks the year argument
        if Date::is_leap_year(year) {
            &DAYS_TO_MONTH_366
        } else {
            &DAYS_TO_MONTH_365
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let naive = self.create_naive_representation();
        write!(
            f,
            "{:04}-{:02}-{:02}",
            naive.year(),
            naive.month(),
            naive.day()
        )
    }
}

impl FromStr for Date {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive =
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| DateTimeError::Parse {
                input: s.to_string(),
                expected: "a date formatted as YYYY-MM-DD",
            })?;
        Date::from_naive(naive)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for Date {
    type Error = DateTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
