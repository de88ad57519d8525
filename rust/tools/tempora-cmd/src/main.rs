use anyhow::Result;
use clap::{Parser, Subcommand};
use tempora::{Date, DayOfWeek, YearMonth};

mod commands;
mod logging;

use commands::RangeArgs;

#[derive(Parser)]
#[command(name = "tempora-cmd")]
#[command(about = "Command-line utility for walking date and month ranges")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every date between two dates, e.g. `days 2016-01-01 2016-02-01`
    Days {
        /// First date (YYYY-MM-DD)
        start: Date,

        /// End date (YYYY-MM-DD); an earlier date walks backwards
        end: Date,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// List every month between two months, e.g. `months 2016-01 2016-12`
    Months {
        /// First month (YYYY-MM)
        start: YearMonth,

        /// End month (YYYY-MM); an earlier month walks backwards
        end: YearMonth,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// List every date falling on a given weekday between two dates
    Weekdays {
        /// First date (YYYY-MM-DD)
        start: Date,

        /// End date (YYYY-MM-DD); an earlier date walks backwards
        end: Date,

        /// Day of the week, full name or three-letter abbreviation
        #[arg(short, long)]
        day: DayOfWeek,

        #[command(flatten)]
        range: RangeArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Days { start, end, range } => commands::days::run(start, end, range),
        Commands::Months { start, end, range } => commands::months::run(start, end, range),
        Commands::Weekdays {
            start,
            end,
            day,
            range,
        } => commands::weekdays::run(start, end, day, range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;

    #[test]
    fn test_parse_days() {
        let cli = Cli::try_parse_from(["tempora-cmd", "days", "2016-01-01", "2016-01-31", "--closed"])
            .unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Days { start, end, range } => {
                assert_eq!(start, Date::from_ymd(2016, 1, 1));
                assert_eq!(end, Date::from_ymd(2016, 1, 31));
                assert!(range.closed);
                assert!(!range.parallel);
                assert_eq!(range.format, OutputFormat::Text);
                assert_eq!(range.min_len, 1);
            }
            _ => panic!("expected days command"),
        }
    }

    #[test]
    fn test_parse_months_parallel_json() {
        let cli = Cli::try_parse_from([
            "tempora-cmd",
            "-vv",
            "months",
            "2016-12",
            "2016-01",
            "--parallel",
            "--threads",
            "2",
            "--min-len",
            "4",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Months { start, end, range } => {
                assert_eq!(start, YearMonth::of(2016, 12));
                assert_eq!(end, YearMonth::of(2016, 1));
                assert!(range.parallel);
                assert_eq!(range.threads, Some(2));
                assert_eq!(range.min_len, 4);
                assert_eq!(range.format, OutputFormat::Json);
            }
            _ => panic!("expected months command"),
        }
    }

    #[test]
    fn test_parse_weekdays() {
        let cli = Cli::try_parse_from([
            "tempora-cmd",
            "weekdays",
            "2016-01-01",
            "2016-01-31",
            "--day",
            "mon",
            "--count",
        ])
        .unwrap();
        match cli.command {
            Commands::Weekdays { day, range, .. } => {
                assert_eq!(day, DayOfWeek::Monday);
                assert!(range.count);
            }
            _ => panic!("expected weekdays command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Cli::try_parse_from(["tempora-cmd", "days", "2016-02-30", "2016-03-01"]).is_err());
        assert!(Cli::try_parse_from(["tempora-cmd", "months", "2016-01"]).is_err());
        assert!(
            Cli::try_parse_from(["tempora-cmd", "weekdays", "2016-01-01", "2016-01-31"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["tempora-cmd", "days", "2016-01-01", "2016-01-31", "--threads", "2"])
                .is_err()
        );
    }
}
