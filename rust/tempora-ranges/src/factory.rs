//! Range factories: pick direction and bound style from the bounds and wrap
//! the matching sequence in a lazy [`SequenceIter`].
//!
//! Reversed bounds are never an error; `start > end` walks the range
//! backwards.

use log::trace;

use crate::arbitrary_step::{ArbitraryStepSequence, Termination};
use crate::fixed_step::FixedStepSequence;
use crate::iter::SequenceIter;
use crate::split_sequence::{BoundStyle, Direction};
use crate::step::Steppable;

/// Values from `start` up to, or down to, `end`, one unit per element, with
/// `end` excluded.
///
/// Produces `|units_between(start, end)|` elements; equal bounds produce
/// nothing.
///
/// # Examples
///
/// ```
/// let up: Vec<i32> = tempora_ranges::range(1, 4).collect();
/// assert_eq!(up, vec![1, 2, 3]);
/// let down: Vec<i32> = tempora_ranges::range(3, 1).collect();
/// assert_eq!(down, vec![3, 2]);
/// ```
pub fn range<T: Steppable>(start: T, end: T) -> SequenceIter<FixedStepSequence<T>> {
    let distance = T::units_between(&start, &end);
    if distance == 0 {
        trace!("range: empty");
        return SequenceIter::empty();
    }
    fixed(start, distance, distance.unsigned_abs())
}

/// Values from `start` up to, or down to, `end`, one unit per element, with
/// `end` included.
///
/// Produces `|units_between(start, end)| + 1` elements; equal bounds produce
/// the single shared value.
pub fn range_closed<T: Steppable>(start: T, end: T) -> SequenceIter<FixedStepSequence<T>> {
    let distance = T::units_between(&start, &end);
    fixed(start, distance, distance.unsigned_abs() + 1)
}

fn fixed<T: Steppable>(start: T, distance: i64, count: u64) -> SequenceIter<FixedStepSequence<T>> {
    let direction = if distance >= 0 {
        Direction::Ascending
    } else {
        Direction::Descending
    };
    trace!("range: {direction:?}, {count} elements");
    SequenceIter::new(FixedStepSequence::new(start, count, direction))
}

/// Values produced by applying `step` repeatedly from `start`, stopping
/// before a value that reaches `end`.
///
/// Ascending when `start <= end`, descending otherwise. The step function
/// must move towards `end` in that direction.
///
/// # Examples
///
/// ```
/// let evens: Vec<i32> = tempora_ranges::range_by(0, 7, |v: &i32| v + 2).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub fn range_by<T, F>(start: T, end: T, step: F) -> SequenceIter<ArbitraryStepSequence<T, F>>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    arbitrary(start, end, step, BoundStyle::Exclusive)
}

/// Like [`range_by`], but a value equal to `end` is produced.
pub fn range_closed_by<T, F>(
    start: T,
    end: T,
    step: F,
) -> SequenceIter<ArbitraryStepSequence<T, F>>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    arbitrary(start, end, step, BoundStyle::Inclusive)
}

fn arbitrary<T, F>(
    start: T,
    end: T,
    step: F,
    bound: BoundStyle,
) -> SequenceIter<ArbitraryStepSequence<T, F>>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    let termination = Termination::between(&start, &end, bound);
    trace!("range_by: {termination:?}");
    SequenceIter::new(ArbitraryStepSequence::new(start, end, step, termination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split_sequence::SplitSequence;

    #[test]
    fn test_range_empty() {
        let iter = range(5i32, 5);
        assert!(iter.sequence().is_none());
        assert_eq!(iter.count(), 0);
    }

    #[test]
    fn test_range_ascending() {
        assert_eq!(range(1i32, 3).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_range_descending() {
        let iter = range(3i32, 1);
        assert_eq!(iter.sequence().unwrap().direction(), Direction::Descending);
        assert_eq!(iter.collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_range_closed() {
        assert_eq!(range_closed(1i32, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(range_closed(3i32, 1).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(range_closed(7i32, 7).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_range_closed_at_type_limits() {
        let values: Vec<u8> = range_closed(253u8, 255).collect();
        assert_eq!(values, vec![253, 254, 255]);
        let values: Vec<u8> = range_closed(2u8, 0).collect();
        assert_eq!(values, vec![2, 1, 0]);
        assert_eq!(range_closed(i32::MIN, i32::MAX).len(), 1usize << 32);
    }

    #[test]
    fn test_range_skip() {
        let values: Vec<i32> = range_closed(1, 12).skip(10).collect();
        assert_eq!(values, vec![11, 12]);
    }

    #[test]
    fn test_exact_count() {
        fastrand::seed(7);
        for _ in 0..200 {
            let start = fastrand::i32(-1000..1000);
            let end = fastrand::i32(-1000..1000);
            let distance = (end - start).unsigned_abs() as usize;
            assert_eq!(range(start, end).count(), distance);
            assert_eq!(range_closed(start, end).count(), distance + 1);
            assert_eq!(range(start, end).len(), distance);
        }
    }

    #[test]
    fn test_range_by_selects_termination() {
        let seq = range_by(0, 10, |v: &i32| v + 1).into_sequence().unwrap();
        assert_eq!(seq.termination(), Termination::AscendingExclusive);
        let seq = range_closed_by(10, 0, |v: &i32| v - 1)
            .into_sequence()
            .unwrap();
        assert_eq!(seq.termination(), Termination::DescendingInclusive);
        let seq = range_by(5, 5, |v: &i32| v + 1).into_sequence().unwrap();
        assert_eq!(seq.termination(), Termination::AscendingExclusive);
    }

    #[test]
    fn test_range_by_values() {
        assert_eq!(
            range_by(0, 9, |v: &i32| v + 3).collect::<Vec<_>>(),
            vec![0, 3, 6]
        );
        assert_eq!(
            range_closed_by(0, 9, |v: &i32| v + 3).collect::<Vec<_>>(),
            vec![0, 3, 6, 9]
        );
        assert_eq!(
            range_closed_by(9, 0, |v: &i32| v - 4).collect::<Vec<_>>(),
            vec![9, 5, 1]
        );
        assert_eq!(
            range_by(9, 1, |v: &i32| v - 4).collect::<Vec<_>>(),
            vec![9, 5]
        );
    }

    #[test]
    fn test_range_by_equal_bounds() {
        assert_eq!(range_by(4, 4, |v: &i32| v + 1).count(), 0);
        assert_eq!(
            range_closed_by(4, 4, |v: &i32| v + 1).collect::<Vec<_>>(),
            vec![4]
        );
    }

    #[test]
    fn test_range_by_is_unbounded() {
        let mut iter = range_by(0, 9, |v: &i32| v + 3);
        assert!(iter.split().is_none());
        assert!(iter.sequence().unwrap().estimate_size().is_unbounded());
    }
}
