//! # Tempora: lazy calendar ranges
//!
//! Tempora walks ranges of dates and months one element at a time, forwards
//! or backwards, without materializing them. Ranges over days and months
//! advance by one unit and know their exact length, so they can be skipped
//! through in a single jump and split across rayon worker threads. Ranges
//! driven by an adjuster ("next Monday", "first day of next month") advance
//! by whatever the adjuster returns and stop once they pass the end bound.
//!
//! ## Module Organization
//!
//! * [`days`] - Day-by-day [`Date`] ranges
//! * [`months`] - Month-by-month [`YearMonth`] ranges
//! * [`adjusted`] - [`Date`] ranges advanced by an adjuster
//! * [`common`] - Shared error and result types
//! * [`datetime`] - Calendar value types and adjusters
//! * [`ranges`] - The generic sequence machinery behind every range
//!
//! ## Example
//!
//! ```
//! use tempora::{Date, DayOfWeek, adjusted, adjusters, days};
//!
//! let start = Date::from_ymd(2016, 1, 1);
//! let end = Date::from_ymd(2016, 1, 31);
//!
//! assert_eq!(days::range_closed(start, end).count(), 31);
//!
//! let mondays: Vec<u32> = adjusted::range_closed(start, end, adjusters::next(DayOfWeek::Monday))
//!     .map(|d| d.day() as u32)
//!     .collect();
//! assert_eq!(mondays, vec![1, 4, 11, 18, 25]);
//! ```

pub mod adjusted;
pub mod days;
pub mod months;

pub use tempora_common as common;
pub use tempora_datetime as datetime;
pub use tempora_ranges as ranges;

pub use tempora_common::{Error, ErrorKind, Result};
pub use tempora_datetime::{Date, DayOfWeek, YearMonth, adjusters};
pub use tempora_ranges::{ParSequence, ParallelOptions, SequenceIter};
