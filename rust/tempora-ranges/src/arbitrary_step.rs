//! Sequences advancing by a caller-supplied step function until they pass an
//! end value.

use std::fmt;

use crate::split_sequence::{BoundStyle, Characteristics, Direction, SizeEstimate, SplitSequence};

/// The stop condition of an [`ArbitraryStepSequence`]: traversal direction
/// combined with whether the end value is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Stops once `current > last`.
    AscendingInclusive,
    /// Stops once `current >= last`.
    AscendingExclusive,
    /// Stops once `current < last`.
    DescendingInclusive,
    /// Stops once `current <= last`.
    DescendingExclusive,
}

impl Termination {
    pub fn new(direction: Direction, bound: BoundStyle) -> Termination {
        match (direction, bound) {
            (Direction::Ascending, BoundStyle::Inclusive) => Termination::AscendingInclusive,
            (Direction::Ascending, BoundStyle::Exclusive) => Termination::AscendingExclusive,
            (Direction::Descending, BoundStyle::Inclusive) => Termination::DescendingInclusive,
            (Direction::Descending, BoundStyle::Exclusive) => Termination::DescendingExclusive,
        }
    }

    /// Picks the termination for a range from `start` to `last`: ascending
    /// when `start <= last`, descending otherwise.
    pub fn between<T: Ord>(start: &T, last: &T, bound: BoundStyle) -> Termination {
        Termination::new(Direction::between(start, last), bound)
    }

    pub fn direction(self) -> Direction {
        match self {
            Termination::AscendingInclusive | Termination::AscendingExclusive => {
                Direction::Ascending
            }
            Termination::DescendingInclusive | Termination::DescendingExclusive => {
                Direction::Descending
            }
        }
    }

    pub fn bound_style(self) -> BoundStyle {
        match self {
            Termination::AscendingInclusive | Termination::DescendingInclusive => {
                BoundStyle::Inclusive
            }
            Termination::AscendingExclusive | Termination::DescendingExclusive => {
                BoundStyle::Exclusive
            }
        }
    }

    /// Returns `true` if `current` lies at or beyond the point where a range
    /// ending at `last` stops.
    #[inline]
    pub fn is_past<T: Ord>(self, current: &T, last: &T) -> bool {
        match self {
            Termination::AscendingInclusive => current > last,
            Termination::AscendingExclusive => current >= last,
            Termination::DescendingInclusive => current < last,
            Termination::DescendingExclusive => current <= last,
        }
    }
}

/// A sequence that starts at `current` and replaces it with `step(current)`
/// after each element, until the [`Termination`] condition holds against
/// `last`.
///
/// The number of elements is unknown up front, so the size is reported as
/// [`SizeEstimate::Unbounded`] and the sequence never splits.
///
/// The direction is fixed at construction. A step function that moves away
/// from `last`, or that stops making progress, yields an endless sequence;
/// keeping the step consistent with the direction is up to the caller.
#[derive(Clone)]
pub struct ArbitraryStepSequence<T, F> {
    current: T,
    last: T,
    step: F,
    termination: Termination,
}

impl<T, F> ArbitraryStepSequence<T, F>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    const CHARACTERISTICS: Characteristics =
        Characteristics::IMMUTABLE.union(Characteristics::NONNULL);

    pub fn new(start: T, last: T, step: F, termination: Termination) -> Self {
        ArbitraryStepSequence {
            current: start,
            last,
            step,
            termination,
        }
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn last(&self) -> &T {
        &self.last
    }

    /// The next value to be produced, if the sequence is not exhausted.
    pub fn peek(&self) -> Option<&T> {
        (!self.is_at_end()).then_some(&self.current)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.termination.is_past(&self.current, &self.last)
    }
}

impl<T, F> SplitSequence for ArbitraryStepSequence<T, F>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn estimate_size(&self) -> SizeEstimate {
        SizeEstimate::Unbounded
    }

    fn try_advance<A>(&mut self, action: A) -> bool
    where
        A: FnOnce(T),
    {
        if self.is_at_end() {
            return false;
        }
        action(self.current.clone());
        self.current = (self.step)(&self.current);
        true
    }

    fn for_each_remaining<A>(&mut self, mut action: A)
    where
        A: FnMut(T),
    {
        while !self.is_at_end() {
            action(self.current.clone());
            self.current = (self.step)(&self.current);
        }
    }

    fn split(&mut self) -> Option<Self> {
        None
    }

    fn characteristics(&self) -> Characteristics {
        Self::CHARACTERISTICS
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ArbitraryStepSequence<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArbitraryStepSequence")
            .field("current", &self.current)
            .field("last", &self.last)
            .field("termination", &self.termination)
            .finish_non_exhaustive()
    }
}
