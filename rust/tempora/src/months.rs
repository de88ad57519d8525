//! Ranges of consecutive [`YearMonth`] values.

use tempora_common::Result;
use tempora_datetime::YearMonth;
use tempora_ranges::{FixedStepSequence, SequenceIter};

/// A lazy, exactly sized, splittable range of months one month apart.
pub type MonthRange = SequenceIter<FixedStepSequence<YearMonth>>;

pub fn range(start: YearMonth, end_exclusive: YearMonth) -> MonthRange {
    tempora_ranges::range(start, end_exclusive)
}

pub fn range_closed(start: YearMonth, end_inclusive: YearMonth) -> MonthRange {
    tempora_ranges::range_closed(start, end_inclusive)
}

/// January through December of `year`.
///
/// # Errors
///
/// Returns `ErrorKind::InvalidArgument` if `year` is outside `1..=9999`.
pub fn in_year(year: i32) -> Result<MonthRange> {
    let first = YearMonth::try_of(year, 1)?;
    Ok(range_closed(first, YearMonth::of(year, 12)))
}
