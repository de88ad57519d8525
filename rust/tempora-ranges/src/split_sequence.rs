//! The cursor protocol shared by every range sequence.

use bitflags::bitflags;

/// Number of elements a sequence has left to produce.
///
/// Sequences whose end is found by comparison rather than counting report
/// [`SizeEstimate::Unbounded`] instead of a sentinel count, so that the
/// estimate can never be mistaken for a real length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeEstimate {
    Exact(u64),
    Unbounded,
}

impl SizeEstimate {
    /// Returns the count if it is known.
    pub fn exact(self) -> Option<u64> {
        match self {
            SizeEstimate::Exact(n) => Some(n),
            SizeEstimate::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, SizeEstimate::Unbounded)
    }

    /// Converts the estimate into an `Iterator::size_hint` pair.
    pub fn size_hint(self) -> (usize, Option<usize>) {
        match self {
            SizeEstimate::Exact(n) => match usize::try_from(n) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            SizeEstimate::Unbounded => (0, None),
        }
    }
}

bitflags! {
    /// Traits of a sequence and its elements that a consumption driver may
    /// rely on.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Characteristics: u32 {
        /// `estimate_size` is an exact count.
        const SIZED = 1 << 0;
        /// Every sequence produced by `split` is `SIZED` as well.
        const SUBSIZED = 1 << 1;
        /// Elements come out in a defined traversal order, preserved by `split`.
        const ORDERED = 1 << 2;
        /// No two elements compare equal.
        const DISTINCT = 1 << 3;
        /// Every element is a present value.
        const NONNULL = 1 << 4;
        /// The source range cannot change while it is traversed.
        const IMMUTABLE = 1 << 5;
    }
}

/// Traversal direction of a range, fixed once when the range is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Ascending when `start <= end`, descending otherwise.
    pub fn between<T: Ord>(start: &T, end: &T) -> Direction {
        if start <= end {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// `1` for ascending, `-1` for descending.
    #[inline]
    pub fn signum(self) -> i64 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    /// Scales a unit count by this direction's sign.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds `i64::MAX`.
    #[inline]
    pub fn units(self, count: u64) -> i64 {
        let count = i64::try_from(count).expect("step count exceeds i64::MAX");
        count * self.signum()
    }
}

/// Whether the end value of a range is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundStyle {
    Inclusive,
    Exclusive,
}

/// A lazy cursor over a range that can hand part of its remaining elements to
/// another cursor.
///
/// A sequence owns its position exclusively. Concurrency comes only from
/// [`split`](SplitSequence::split): the two resulting sequences cover disjoint,
/// contiguous parts of the original and may be consumed on different threads.
pub trait SplitSequence: Sized {
    type Item;

    /// Number of elements left, or [`SizeEstimate::Unbounded`] if unknown.
    fn estimate_size(&self) -> SizeEstimate;

    /// Passes the next element to `action` and advances past it.
    ///
    /// Returns `false` without calling `action` once the sequence is exhausted;
    /// every later call returns `false` as well.
    fn try_advance<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(Self::Item);

    /// Passes every remaining element to `action`, in traversal order.
    fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(Self::Item),
    {
        while self.try_advance(&mut action) {}
    }

    /// Splits off the trailing part of the remaining elements into a new
    /// sequence, or returns `None` if this sequence cannot be divided.
    ///
    /// Draining `self` and then the returned sequence yields exactly the
    /// elements `self` would have produced without the split.
    fn split(&mut self) -> Option<Self>;

    fn characteristics(&self) -> Characteristics;

    fn has_characteristics(&self, characteristics: Characteristics) -> bool {
        self.characteristics().contains(characteristics)
    }

    /// The remaining count if the sequence is `SIZED`.
    fn exact_size(&self) -> Option<u64> {
        if self.has_characteristics(Characteristics::SIZED) {
            self.estimate_size().exact()
        } else {
            None
        }
    }

    /// Returns the next element, advancing past it.
    fn next_value(&mut self) -> Option<Self::Item> {
        let mut slot = None;
        self.try_advance(|value| slot = Some(value));
        slot
    }

    /// Discards up to `n` elements and returns how many were discarded.
    fn skip_ahead(&mut self, n: u64) -> u64 {
        let mut skipped = 0;
        while skipped < n && self.try_advance(|_| {}) {
            skipped += 1;
        }
        skipped
    }
}
