//! Weekdays command implementation

use anyhow::Result;
use tempora::{Date, DayOfWeek, adjusted};

use super::RangeArgs;

pub fn run(start: Date, end: Date, day: DayOfWeek, args: RangeArgs) -> Result<()> {
    tracing::debug!(%start, %end, %day, closed = args.closed, "walking weekdays");
    super::print_range(adjusted::weekdays(start, end, day, args.bound()), &args)
}
