//! Days command implementation

use anyhow::Result;
use tempora::{Date, days};

use super::RangeArgs;

pub fn run(start: Date, end: Date, args: RangeArgs) -> Result<()> {
    super::print_range(day_range(start, end, &args), &args)
}

fn day_range(start: Date, end: Date, args: &RangeArgs) -> days::DayRange {
    tracing::debug!(%start, %end, closed = args.closed, "walking days");
    if args.closed {
        days::range_closed(start, end)
    } else {
        days::range(start, end)
    }
}
