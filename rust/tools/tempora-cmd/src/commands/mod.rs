//! Command implementations for tempora-cmd

use std::fmt::Display;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::iter::ParallelIterator;
use serde::Serialize;
use tempora::ranges::{BoundStyle, SplitSequence};
use tempora::{ParallelOptions, SequenceIter};

pub mod days;
pub mod months;
pub mod weekdays;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Text,
    /// A single JSON array (or `{"count": n}` with `--count`)
    Json,
}

/// Options shared by every range command.
#[derive(Args, Clone, Debug)]
pub struct RangeArgs {
    /// Include the end bound
    #[arg(long)]
    pub closed: bool,

    /// Print only the number of values in the range
    #[arg(long)]
    pub count: bool,

    /// Consume the range on a rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (defaults to one per CPU)
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Smallest number of values handed to a single worker
    #[arg(long, default_value_t = 1)]
    pub min_len: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RangeArgs {
    pub fn bound(&self) -> BoundStyle {
        if self.closed {
            BoundStyle::Inclusive
        } else {
            BoundStyle::Exclusive
        }
    }

    pub fn parallel_options(&self) -> ParallelOptions {
        ParallelOptions {
            threads: self.threads,
            min_len: self.min_len,
        }
    }
}

/// Consumes `range` as `args` asks and prints the result to stdout.
pub fn print_range<S>(range: SequenceIter<S>, args: &RangeArgs) -> Result<()>
where
    S: SplitSequence + Send,
    S::Item: Display + Serialize + Send,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_range(range, args, &mut out)?;
    out.flush().context("Failed to flush output")
}

pub fn write_range<S, W>(range: SequenceIter<S>, args: &RangeArgs, out: &mut W) -> Result<()>
where
    S: SplitSequence + Send,
    S::Item: Display + Serialize + Send,
    W: Write,
{
    if args.count {
        let count = if args.parallel {
            in_pool(range, args, |par| par.count())?
        } else {
            range.count()
        };
        tracing::info!(count, "counted range");
        return match args.format {
            OutputFormat::Text => writeln!(out, "{count}").context("Failed to write count"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &serde_json::json!({ "count": count }))
                    .context("Failed to write count as JSON")?;
                writeln!(out).context("Failed to write count")
            }
        };
    }

    if args.parallel {
        let values: Vec<S::Item> = in_pool(range, args, |par| par.collect())?;
        tracing::info!(len = values.len(), "collected range in parallel");
        write_values(values, args.format, out)
    } else {
        write_values(range, args.format, out)
    }
}

fn in_pool<S, R, F>(range: SequenceIter<S>, args: &RangeArgs, consume: F) -> Result<R>
where
    S: SplitSequence + Send,
    S::Item: Send,
    R: Send,
    F: FnOnce(tempora::ParSequence<S>) -> R + Send,
{
    let options = args.parallel_options();
    let pool = options
        .build_pool()
        .context("Failed to start worker threads")?;
    tracing::debug!(threads = pool.current_num_threads(), min_len = options.min_len, "consuming range in parallel");
    let par = options.par_sequence(range);
    Ok(pool.install(|| consume(par)))
}

fn write_values<I, W>(values: I, format: OutputFormat, out: &mut W) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for value in values {
                writeln!(out, "{value}").context("Failed to write value")?;
            }
        }
        OutputFormat::Json => {
            let values: Vec<I::Item> = values.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &values)
                .context("Failed to write values as JSON")?;
            writeln!(out).context("Failed to write value")?;
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::{args, render};
    use super::*;

    #[test]
    fn test_text_output() {
        let out = render(tempora::ranges::range(3i32, 0), &args(false, OutputFormat::Text));
        assert_eq!(out, "3\n2\n1\n");
    }

    #[test]
    fn test_json_output() {
        let out = render(tempora::ranges::range(0i32, 3), &args(false, OutputFormat::Json));
        let values: Vec<i32> = serde_json::from_str(&out).unwrap();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_count_output() {
        let mut a = args(true, OutputFormat::Json);
        a.count = true;
        let out = render(tempora::ranges::range_closed(1i32, 100), &a);
        assert_eq!(out.trim(), r#"{"count":100}"#);

        a.format = OutputFormat::Text;
        a.parallel = true;
        a.threads = Some(2);
        let out = render(tempora::ranges::range_closed(1i32, 100), &a);
        assert_eq!(out, "100\n");
    }

    #[test]
    fn test_parallel_output_keeps_order() {
        let mut a = args(false, OutputFormat::Text);
        a.parallel = true;
        a.threads = Some(3);
        a.min_len = 2;
        let out = render(tempora::ranges::range(0i32, 50), &a);
        let expected: String = (0..50).map(|v| format!("{v}\n")).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_bound_style() {
        assert_eq!(args(true, OutputFormat::Text).bound(), BoundStyle::Inclusive);
        assert_eq!(args(false, OutputFormat::Text).bound(), BoundStyle::Exclusive);
    }
}
