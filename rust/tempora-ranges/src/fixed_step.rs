//! Sequences advancing by a fixed number of units per element over an exactly
//! known count.

use log::trace;

use crate::split_sequence::{Characteristics, Direction, SizeEstimate, SplitSequence};
use crate::step::Steppable;

/// A sequence producing `remaining` values, starting at `current` and moving
/// `stride` units (one, unless built with [`with_stride`](Self::with_stride))
/// per element in a fixed [`Direction`].
///
/// The size is always exact, which allows halving the sequence for parallel
/// consumption: [`split`](SplitSequence::split) keeps the elements nearest to
/// the current position and hands the far half to a new sequence.
///
/// The cursor never steps past the last element it produces, so a range that
/// ends at the largest representable value is safe to traverse.
#[derive(Clone, Debug)]
pub struct FixedStepSequence<T> {
    /// The next value to produce, meaningful while `remaining > 0`.
    current: T,
    /// Elements left, `current` included.
    remaining: u64,
    direction: Direction,
    /// Units between consecutive elements, at least 1.
    stride: u64,
}

impl<T: Steppable> FixedStepSequence<T> {
    const CHARACTERISTICS: Characteristics = Characteristics::SIZED
        .union(Characteristics::SUBSIZED)
        .union(Characteristics::ORDERED)
        .union(Characteristics::DISTINCT)
        .union(Characteristics::NONNULL)
        .union(Characteristics::IMMUTABLE);

    /// Creates a sequence of `count` values starting at `start`.
    ///
    /// # Arguments
    ///
    /// * `start` - The first value produced.
    /// * `count` - The exact number of values produced.
    /// * `direction` - Whether each value is one unit above or below the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds `i64::MAX`, the largest distance a single
    /// step can cover.
    pub fn new(start: T, count: u64, direction: Direction) -> Self {
        Self::with_stride(start, count, direction, 1)
    }

    /// Creates a sequence of `count` values starting at `start`, each `stride`
    /// units away from the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero or if `count * stride` exceeds `i64::MAX`.
    pub fn with_stride(start: T, count: u64, direction: Direction, stride: u64) -> Self {
        assert!(stride > 0, "FixedStepSequence stride must be positive");
        assert!(
            count
                .checked_mul(stride)
                .is_some_and(|span| span <= i64::MAX as u64),
            "FixedStepSequence span too large: {count} elements of {stride} units"
        );
        FixedStepSequence {
            current: start,
            remaining: count,
            direction,
            stride,
        }
    }

    pub fn ascending(start: T, count: u64) -> Self {
        Self::new(start, count, Direction::Ascending)
    }

    pub fn descending(start: T, count: u64) -> Self {
        Self::new(start, count, Direction::Descending)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Signed unit distance covered by `count` elements.
    #[inline]
    fn span(&self, count: u64) -> i64 {
        self.direction.units(count * self.stride)
    }

    /// The next value to be produced, if any.
    pub fn peek(&self) -> Option<&T> {
        (self.remaining > 0).then_some(&self.current)
    }

    /// Returns the current value and moves the cursor to its successor.
    ///
    /// The successor is only computed when another element remains.
    #[inline]
    fn take_current(&mut self) -> T {
        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
        if self.remaining == 0 {
            self.current.clone()
        } else {
            let next = self.current.step_by(self.span(1));
            std::mem::replace(&mut self.current, next)
        }
    }
}

impl<T: Steppable> SplitSequence for FixedStepSequence<T> {
    type Item = T;

    fn estimate_size(&self) -> SizeEstimate {
        SizeEstimate::Exact(self.remaining)
    }

    fn try_advance<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(T),
    {
        if self.remaining == 0 {
            return false;
        }
        action(self.take_current());
        true
    }

    fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(T),
    {
        while self.remaining > 0 {
            action(self.take_current());
        }
    }

    /// Keeps the first `remaining - remaining / 2` elements and returns a
    /// sequence over the last `remaining / 2`.
    ///
    /// Sequences with fewer than two elements are not split.
    fn split(&mut self) -> Option<Self> {
        if self.remaining < 2 {
            return None;
        }
        let half = self.remaining / 2;
        self.remaining -= half;
        let start = self.current.step_by(self.span(self.remaining));
        trace!(
            "split fixed-step sequence: kept {}, handed off {half}",
            self.remaining
        );
        Some(FixedStepSequence {
            current: start,
            remaining: half,
            direction: self.direction,
            stride: self.stride,
        })
    }

    fn characteristics(&self) -> Characteristics {
        Self::CHARACTERISTICS
    }

    /// Jumps over up to `n` elements with a single step.
    fn skip_ahead(&mut self, n: u64) -> u64 {
        let skipped = n.min(self.remaining);
        self.remaining -= skipped;
        if skipped > 0 && self.remaining > 0 {
            self.current = self.current.step_by(self.span(skipped));
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: Steppable>(mut seq: FixedStepSequence<T>) -> Vec<T> {
        let mut out = Vec::new();
        seq.for_each_remaining(|v| out.push(v));
        out
    }

    #[test]
    fn test_ascending() {
        let seq = FixedStepSequence::ascending(5i32, 4);
        assert_eq!(seq.estimate_size(), SizeEstimate::Exact(4));
        assert_eq!(drain(seq), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_descending() {
        let seq = FixedStepSequence::descending(5i32, 3);
        assert_eq!(drain(seq), vec![5, 4, 3]);
    }

    #[test]
    fn test_try_advance_counts_down() {
        let mut seq = FixedStepSequence::ascending(0u8, 2);
        let mut seen = Vec::new();
        assert!(seq.try_advance(|v| seen.push(v)));
        assert_eq!(seq.remaining(), 1);
        assert_eq!(seq.peek(), Some(&1));
        assert!(seq.try_advance(|v| seen.push(v)));
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.peek(), None);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut seq = FixedStepSequence::ascending(0i32, 1);
        assert!(seq.try_advance(|_| {}));
        for _ in 0..3 {
            assert!(!seq.try_advance(|_| panic!("exhausted sequence produced a value")));
        }
        assert_eq!(seq.next_value(), None);
    }

    #[test]
    fn test_never_steps_past_last_element() {
        // Stepping past u8::MAX would panic.
        let seq = FixedStepSequence::ascending(250u8, 6);
        assert_eq!(drain(seq), vec![250, 251, 252, 253, 254, 255]);

        let seq = FixedStepSequence::descending(2u8, 3);
        assert_eq!(drain(seq), vec![2, 1, 0]);
    }

    #[test]
    fn test_split_small_sequences() {
        let mut empty = FixedStepSequence::ascending(0i32, 0);
        assert!(empty.split().is_none());

        let mut single = FixedStepSequence::ascending(0i32, 1);
        assert!(single.split().is_none());
        assert_eq!(single.remaining(), 1);

        let mut pair = FixedStepSequence::ascending(0i32, 2);
        let right = pair.split().unwrap();
        assert_eq!(drain(pair), vec![0]);
        assert_eq!(drain(right), vec![1]);
    }

    #[test]
    fn test_split_keeps_lower_half_ascending() {
        let mut left = FixedStepSequence::ascending(10i32, 5);
        let right = left.split().unwrap();
        assert_eq!(left.remaining(), 3);
        assert_eq!(right.remaining(), 2);
        assert_eq!(drain(left), vec![10, 11, 12]);
        assert_eq!(drain(right), vec![13, 14]);
    }

    #[test]
    fn test_split_keeps_leading_half_descending() {
        let mut left = FixedStepSequence::descending(10i32, 5);
        let right = left.split().unwrap();
        assert_eq!(drain(left), vec![10, 9, 8]);
        assert_eq!(drain(right), vec![7, 6]);
    }

    #[test]
    fn test_split_after_partial_consumption() {
        let mut seq = FixedStepSequence::ascending(0i32, 10);
        assert_eq!(seq.next_value(), Some(0));
        assert_eq!(seq.next_value(), Some(1));
        let right = seq.split().unwrap();
        assert_eq!(seq.remaining() + right.remaining(), 8);
        let mut all = drain(seq);
        all.extend(drain(right));
        assert_eq!(all, (2..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_concatenation_for_all_small_sizes() {
        for direction in [Direction::Ascending, Direction::Descending] {
            for n in 0..64u64 {
                let expected = drain(FixedStepSequence::new(1000i32, n, direction));
                let mut left = FixedStepSequence::new(1000i32, n, direction);
                match left.split() {
                    Some(right) => {
                        assert!(n >= 2);
                        assert_eq!(left.remaining() + right.remaining(), n);
                        let mut actual = drain(left);
                        actual.extend(drain(right));
                        assert_eq!(actual, expected, "n={n} {direction:?}");
                    }
                    None => assert!(n < 2),
                }
            }
        }
    }

    #[test]
    fn test_skip_ahead() {
        let mut seq = FixedStepSequence::ascending(1i32, 12);
        assert_eq!(seq.skip_ahead(10), 10);
        assert_eq!(drain(seq), vec![11, 12]);

        let mut seq = FixedStepSequence::descending(5i32, 3);
        assert_eq!(seq.skip_ahead(10), 3);
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.next_value(), None);

        let mut seq = FixedStepSequence::ascending(254u8, 2);
        assert_eq!(seq.skip_ahead(2), 2);
        assert_eq!(seq.next_value(), None);
    }

    #[test]
    fn test_stride() {
        let seq = FixedStepSequence::with_stride(3i32, 4, Direction::Ascending, 7);
        assert_eq!(seq.stride(), 7);
        assert_eq!(drain(seq), vec![3, 10, 17, 24]);

        let seq = FixedStepSequence::with_stride(24i32, 4, Direction::Descending, 7);
        assert_eq!(drain(seq), vec![24, 17, 10, 3]);

        // The last element sits at the type limit; no step past it is taken.
        let seq = FixedStepSequence::with_stride(241u8, 3, Direction::Ascending, 7);
        assert_eq!(drain(seq), vec![241, 248, 255]);
    }

    #[test]
    fn test_stride_split_and_skip() {
        for n in 0..40u64 {
            let expected = drain(FixedStepSequence::with_stride(0i32, n, Direction::Descending, 3));
            let mut left = FixedStepSequence::with_stride(0i32, n, Direction::Descending, 3);
            if let Some(right) = left.split() {
                let mut actual = drain(left);
                actual.extend(drain(right));
                assert_eq!(actual, expected, "n={n}");
            }
        }

        let mut seq = FixedStepSequence::with_stride(0i32, 10, Direction::Ascending, 5);
        assert_eq!(seq.skip_ahead(8), 8);
        assert_eq!(drain(seq), vec![40, 45]);
    }

    #[test]
    #[should_panic(expected = "span too large")]
    fn test_count_beyond_i64_rejected() {
        let _ = FixedStepSequence::ascending(0i32, u64::MAX);
    }

    #[test]
    #[should_panic(expected = "span too large")]
    fn test_stride_overflow_rejected() {
        let _ = FixedStepSequence::with_stride(0i32, i64::MAX as u64, Direction::Ascending, 2);
    }

    #[test]
    fn test_characteristics() {
        let seq = FixedStepSequence::ascending(0i32, 3);
        assert!(seq.has_characteristics(
            Characteristics::SIZED | Characteristics::SUBSIZED | Characteristics::ORDERED
        ));
        assert!(seq.has_characteristics(
            Characteristics::DISTINCT | Characteristics::NONNULL | Characteristics::IMMUTABLE
        ));
        assert_eq!(seq.exact_size(), Some(3));
    }
}
