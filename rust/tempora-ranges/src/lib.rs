//! Lazy, splittable sequences over ranges of steppable values.
//!
//! This crate walks a range of ordered values (dates, months, integers) one
//! element at a time without materializing it, forward or backward, with the
//! end bound included or excluded. Two sequence variants back every range:
//!
//! - [`FixedStepSequence`] - advances by one unit per element over an exactly
//!   known count and supports binary splitting for parallel consumption.
//! - [`ArbitraryStepSequence`] - advances by applying a caller-supplied step
//!   function until the current value passes the end bound. Its size is unknown
//!   and it never splits.
//!
//! # Key Types
//!
//! - [`Steppable`] - Capability a value type provides to fixed-step ranges
//! - [`SplitSequence`] - The cursor protocol shared by both variants
//! - [`SequenceIter`] - Lazy `Iterator` driver over any [`SplitSequence`]
//! - [`ParSequence`] - Rayon `ParallelIterator` driver that splits the sequence
//!   across worker threads
//! - [`range`], [`range_closed`], [`range_by`], [`range_closed_by`] - Factories
//!   that pick direction and bound style from their inputs
//! - [`RangeBuilder`] - Assembles a range from optional parts, rejecting missing ones

pub mod arbitrary_step;
pub mod builder;
pub mod factory;
pub mod fixed_step;
pub mod iter;
pub mod parallel;
pub mod split_sequence;
pub mod step;

pub use arbitrary_step::{ArbitraryStepSequence, Termination};
pub use builder::RangeBuilder;
pub use factory::{range, range_by, range_closed, range_closed_by};
pub use fixed_step::FixedStepSequence;
pub use iter::SequenceIter;
pub use parallel::{ParSequence, ParallelOptions};
pub use split_sequence::{BoundStyle, Characteristics, Direction, SizeEstimate, SplitSequence};
pub use step::Steppable;
