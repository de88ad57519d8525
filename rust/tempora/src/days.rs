//! Ranges of consecutive [`Date`] values.

use tempora_datetime::{Date, YearMonth};
use tempora_ranges::{FixedStepSequence, SequenceIter};

/// A lazy, exactly sized, splittable range of dates one day apart.
pub type DayRange = SequenceIter<FixedStepSequence<Date>>;

/// Every date from `start` to `end_exclusive`, in the direction of
/// `end_exclusive`.
///
/// # Examples
///
/// ```
/// use tempora::{Date, days};
///
/// let dates: Vec<Date> = days::range(Date::from_ymd(2016, 1, 3), Date::from_ymd(2016, 1, 1)).collect();
/// assert_eq!(dates, vec![Date::from_ymd(2016, 1, 3), Date::from_ymd(2016, 1, 2)]);
/// ```
pub fn range(start: Date, end_exclusive: Date) -> DayRange {
    tempora_ranges::range(start, end_exclusive)
}

/// Every date from `start` to `end_inclusive`, in the direction of
/// `end_inclusive`.
pub fn range_closed(start: Date, end_inclusive: Date) -> DayRange {
    tempora_ranges::range_closed(start, end_inclusive)
}

/// Every date of `month`, first to last.
pub fn in_month(month: YearMonth) -> DayRange {
    range_closed(month.first_day(), month.last_day())
}
