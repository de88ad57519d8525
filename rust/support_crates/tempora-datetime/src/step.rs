//! Unit stepping for the calendar types: one day for [`Date`], one month for
//! [`YearMonth`].

use tempora_ranges::Steppable;

use crate::{Date, YearMonth};

impl Steppable for Date {
    #[inline]
    fn step_by(&self, count: i64) -> Self {
        self.plus_days(count)
    }

    #[inline]
    fn units_between(start: &Self, end: &Self) -> i64 {
        start.days_until(end)
    }
}

impl Steppable for YearMonth {
    #[inline]
    fn step_by(&self, count: i64) -> Self {
        self.plus_months(count)
    }

    #[inline]
    fn units_between(start: &Self, end: &Self) -> i64 {
        start.months_until(end)
    }
}
