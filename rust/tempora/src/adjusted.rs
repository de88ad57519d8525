//! [`Date`] ranges that advance by an adjuster instead of a fixed unit.
//!
//! The adjuster runs once per produced date, including the last one, so it
//! must be able to step one adjustment past the end bound. Ranges are
//! ascending when `start <= end` and descending otherwise; the adjuster has
//! to move in that direction.
//!
//! [`weekdays`] is the exception: its dates are a fixed seven days apart, so
//! it is built as an exactly sized day range.

use log::trace;
use tempora_datetime::{Date, DayOfWeek};
use tempora_ranges::{
    ArbitraryStepSequence, BoundStyle, Direction, FixedStepSequence, SequenceIter, Steppable,
};

use crate::days::DayRange;

const DAYS_PER_WEEK: u64 = 7;

/// A lazy range of dates advanced by the adjuster `F`. Its length is not
/// known up front and it is consumed on a single thread.
pub type AdjustedRange<F> = SequenceIter<ArbitraryStepSequence<Date, F>>;

/// Dates from `start` produced by repeatedly applying `adjuster`, stopping
/// before a date that reaches `end_exclusive`.
pub fn range<F>(start: Date, end_exclusive: Date, adjuster: F) -> AdjustedRange<F>
where
    F: Fn(&Date) -> Date,
{
    tempora_ranges::range_by(start, end_exclusive, adjuster)
}

/// Dates from `start` produced by repeatedly applying `adjuster`, stopping
/// after `end_inclusive`.
///
/// # Examples
///
/// ```
/// use tempora::{Date, DayOfWeek, adjusted, adjusters};
///
/// let mondays: Vec<Date> = adjusted::range_closed(
///     Date::from_ymd(2016, 1, 31),
///     Date::from_ymd(2016, 1, 1),
///     adjusters::previous(DayOfWeek::Monday),
/// )
/// .collect();
/// assert_eq!(mondays[1], Date::from_ymd(2016, 1, 25));
/// assert_eq!(mondays.last(), Some(&Date::from_ymd(2016, 1, 4)));
/// ```
pub fn range_closed<F>(start: Date, end_inclusive: Date, adjuster: F) -> AdjustedRange<F>
where
    F: Fn(&Date) -> Date,
{
    tempora_ranges::range_closed_by(start, end_inclusive, adjuster)
}

/// Every date falling on `day` between `start` and `end`, walking from
/// `start` towards `end`. Unlike [`range`], `start` itself is only produced
/// if it falls on `day`.
///
/// The dates are seven days apart and counted up front, so the result is an
/// exactly sized, splittable [`DayRange`] that never steps outside the
/// supported calendar span.
pub fn weekdays(start: Date, end: Date, day: DayOfWeek, bound: BoundStyle) -> DayRange {
    let direction = Direction::between(&start, &end);
    let offset = match direction {
        Direction::Ascending => start.day_of_week().days_until(day),
        Direction::Descending => day.days_until(start.day_of_week()),
    } as u64;
    let distance = Date::units_between(&start, &end).unsigned_abs();
    let reach = match bound {
        BoundStyle::Inclusive => Some(distance),
        BoundStyle::Exclusive => distance.checked_sub(1),
    };
    let count = match reach {
        Some(reach) if offset <= reach => (reach - offset) / DAYS_PER_WEEK + 1,
        _ => 0,
    };
    trace!("weekdays: {count} x {day} from {start}, {direction:?}");
    if count == 0 {
        return SequenceIter::empty();
    }
    let first = start.step_by(direction.units(offset));
    SequenceIter::new(FixedStepSequence::with_stride(
        first,
        count,
        direction,
        DAYS_PER_WEEK,
    ))
}
