//! Months command implementation

use anyhow::Result;
use tempora::{YearMonth, months};

use super::RangeArgs;

pub fn run(start: YearMonth, end: YearMonth, args: RangeArgs) -> Result<()> {
    super::print_range(month_range(start, end, &args), &args)
}

fn month_range(start: YearMonth, end: YearMonth, args: &RangeArgs) -> months::MonthRange {
    tracing::debug!(%start, %end, closed = args.closed, "walking months");
    if args.closed {
        months::range_closed(start, end)
    } else {
        months::range(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use crate::commands::test_support::{args, render};

    #[test]
    fn test_months_across_year() {
        let a = args(true, OutputFormat::Text);
        let range = month_range(YearMonth::of(2015, 12), YearMonth::of(2016, 2), &a);
        assert_eq!(render(range, &a), "2015-12\n2016-01\n2016-02\n");
    }

    #[test]
    fn test_months_empty() {
        let a = args(false, OutputFormat::Json);
        let range = month_range(YearMonth::of(2016, 5), YearMonth::of(2016, 5), &a);
        let values: Vec<String> = serde_json::from_str(&render(range, &a)).unwrap();
        assert!(values.is_empty());
    }
}
