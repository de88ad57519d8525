//! Step functions over [`Date`] values.
//!
//! Each adjuster is a plain `Fn(&Date) -> Date` and can be handed directly to
//! an arbitrary-step range. Adjusters panic when the adjusted date would leave
//! the supported `0001-01-01..=9999-12-31` span.
//!
//! An adjuster used as a range step must make progress towards the range end:
//! `last_day_of_month` and the `*_or_same` adjusters are idempotent on their
//! fixed points and would never terminate as a step. They are meant for
//! computing range bounds.

use crate::{Date, DayOfWeek};

/// The first date strictly after the input that falls on `day`.
///
/// # Examples
/// ```rust
/// # use tempora_datetime::{Date, DayOfWeek, adjusters};
/// let next_monday = adjusters::next(DayOfWeek::Monday);
/// assert_eq!(next_monday(&Date::from_ymd(2016, 1, 1)), Date::from_ymd(2016, 1, 4));
/// assert_eq!(next_monday(&Date::from_ymd(2016, 1, 4)), Date::from_ymd(2016, 1, 11));
/// ```
pub fn next(day: DayOfWeek) -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    move |date: &Date| {
        let ahead = date.day_of_week().days_until(day);
        let ahead = if ahead == 0 { 7 } else { ahead };
        date.plus_days(ahead as i64)
    }
}

/// The input itself if it falls on `day`, otherwise the next such date.
pub fn next_or_same(day: DayOfWeek) -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    move |date: &Date| date.plus_days(date.day_of_week().days_until(day) as i64)
}

/// The last date strictly before the input that falls on `day`.
pub fn previous(day: DayOfWeek) -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    move |date: &Date| {
        let back = day.days_until(date.day_of_week());
        let back = if back == 0 { 7 } else { back };
        date.plus_days(-(back as i64))
    }
}

/// The input itself if it falls on `day`, otherwise the previous such date.
pub fn previous_or_same(day: DayOfWeek) -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    move |date: &Date| date.plus_days(-(day.days_until(date.day_of_week()) as i64))
}

pub fn first_day_of_month() -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    |date: &Date| date.year_month().first_day()
}

pub fn last_day_of_month() -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    |date: &Date| date.year_month().last_day()
}

pub fn first_day_of_next_month() -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    |date: &Date| date.year_month().plus_months(1).first_day()
}

pub fn first_day_of_previous_month() -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    |date: &Date| date.year_month().plus_months(-1).first_day()
}

/// Moves the input by a fixed number of days; negative values move backwards.
pub fn plus_days(days: i64) -> impl Fn(&Date) -> Date + Copy + Send + Sync + 'static {
    move |date: &Date| date.plus_days(days)
}
