use tempora_common::{Result, require_arg};

use crate::arbitrary_step::ArbitraryStepSequence;
use crate::factory;
use crate::fixed_step::FixedStepSequence;
use crate::iter::SequenceIter;
use crate::split_sequence::BoundStyle;
use crate::step::Steppable;

/// Assembles a range from parts supplied one at a time, for callers whose
/// bounds or step come from optional input.
///
/// A missing part is reported when the range is built, before any element
/// is produced. The end bound is excluded unless [`inclusive`](Self::inclusive)
/// is called.
///
/// # Examples
///
/// ```
/// use tempora_ranges::RangeBuilder;
///
/// let values: Vec<i32> = RangeBuilder::new()
///     .start(10)
///     .end(4)
///     .inclusive()
///     .step(|v: &i32| v - 3)
///     .build_by()
///     .unwrap()
///     .collect();
/// assert_eq!(values, vec![10, 7, 4]);
///
/// let err = RangeBuilder::<i32>::new().start(1).build().unwrap_err();
/// assert_eq!(err.to_string(), "missing argument end");
/// ```
#[derive(Clone, Debug)]
pub struct RangeBuilder<T, F = fn(&T) -> T> {
    start: Option<T>,
    end: Option<T>,
    step: Option<F>,
    bound: BoundStyle,
}

impl<T> RangeBuilder<T> {
    pub fn new() -> Self {
        RangeBuilder {
            start: None,
            end: None,
            step: None,
            bound: BoundStyle::Exclusive,
        }
    }
}

impl<T> Default for RangeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> RangeBuilder<T, F> {
    pub fn start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: T) -> Self {
        self.end = Some(end);
        self
    }

    pub fn maybe_start(mut self, start: Option<T>) -> Self {
        self.start = start;
        self
    }

    pub fn maybe_end(mut self, end: Option<T>) -> Self {
        self.end = end;
        self
    }

    pub fn bound(mut self, bound: BoundStyle) -> Self {
        self.bound = bound;
        self
    }

    pub fn inclusive(self) -> Self {
        self.bound(BoundStyle::Inclusive)
    }

    pub fn exclusive(self) -> Self {
        self.bound(BoundStyle::Exclusive)
    }

    /// Sets the step function used by [`build_by`](Self::build_by).
    pub fn step<G>(self, step: G) -> RangeBuilder<T, G> {
        self.maybe_step(Some(step))
    }

    pub fn maybe_step<G>(self, step: Option<G>) -> RangeBuilder<T, G> {
        RangeBuilder {
            start: self.start,
            end: self.end,
            step,
            bound: self.bound,
        }
    }

    /// Builds a fixed-step range over the natural unit of `T`. Any step
    /// function is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::MissingArgument` if the start or end is unset.
    pub fn build(self) -> Result<SequenceIter<FixedStepSequence<T>>>
    where
        T: Steppable,
    {
        let RangeBuilder {
            start, end, bound, ..
        } = self;
        let start = require_arg!(start);
        let end = require_arg!(end);
        Ok(match bound {
            BoundStyle::Inclusive => factory::range_closed(start, end),
            BoundStyle::Exclusive => factory::range(start, end),
        })
    }

    /// Builds a range advanced by the step function.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::MissingArgument` if the start, end or step
    /// function is unset.
    pub fn build_by(self) -> Result<SequenceIter<ArbitraryStepSequence<T, F>>>
    where
        T: Clone + Ord,
        F: Fn(&T) -> T,
    {
        let RangeBuilder {
            start,
            end,
            step,
            bound,
        } = self;
        let start = require_arg!(start);
        let end = require_arg!(end);
        let step = require_arg!(step);
        Ok(match bound {
            BoundStyle::Inclusive => factory::range_closed_by(start, end, step),
            BoundStyle::Exclusive => factory::range_by(start, end, step),
        })
    }
}
