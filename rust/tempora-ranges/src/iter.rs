//! Lazy sequential driver over a [`SplitSequence`].

use std::iter::FusedIterator;

use crate::arbitrary_step::ArbitraryStepSequence;
use crate::fixed_step::FixedStepSequence;
use crate::split_sequence::{Characteristics, SizeEstimate, SplitSequence};
use crate::step::Steppable;

/// An `Iterator` pulling elements from a [`SplitSequence`] one at a time.
///
/// An empty range carries no sequence at all. Bulk consumers (`for_each`,
/// `count`) are routed to the sequence's own `for_each_remaining` and size,
/// and `nth` (and therefore `skip`) uses the sequence's `skip_ahead`, which
/// is a single jump for fixed-step sequences.
#[derive(Clone, Debug)]
pub struct SequenceIter<S> {
    inner: Option<S>,
}

impl<S: SplitSequence> SequenceIter<S> {
    pub fn new(sequence: S) -> Self {
        SequenceIter {
            inner: Some(sequence),
        }
    }

    /// An iterator producing nothing.
    pub fn empty() -> Self {
        SequenceIter { inner: None }
    }

    pub fn sequence(&self) -> Option<&S> {
        self.inner.as_ref()
    }

    pub fn into_sequence(self) -> Option<S> {
        self.inner
    }

    pub fn estimate_size(&self) -> SizeEstimate {
        self.inner
            .as_ref()
            .map_or(SizeEstimate::Exact(0), |seq| seq.estimate_size())
    }

    /// Characteristics of the underlying sequence; an empty iterator is
    /// trivially sized, ordered and distinct.
    pub fn characteristics(&self) -> Characteristics {
        self.inner
            .as_ref()
            .map_or(Characteristics::all(), |seq| seq.characteristics())
    }

    /// Splits the remaining elements, see [`SplitSequence::split`].
    pub fn split(&mut self) -> Option<Self> {
        self.inner.as_mut()?.split().map(SequenceIter::new)
    }
}

impl<S: SplitSequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.estimate_size().size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let seq = self.inner.as_mut()?;
        let n = n as u64;
        if seq.skip_ahead(n) < n {
            return None;
        }
        seq.next_value()
    }

    fn for_each<G>(self, f: G)
    where
        G: FnMut(Self::Item),
    {
        if let Some(mut seq) = self.inner {
            seq.for_each_remaining(f);
        }
    }

    fn count(self) -> usize {
        if let Some(n) = self.inner.as_ref().and_then(|seq| seq.exact_size()) {
            if let Ok(n) = usize::try_from(n) {
                return n;
            }
        }
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }
}

impl<S: SplitSequence> FusedIterator for SequenceIter<S> {}

impl<T: Steppable> ExactSizeIterator for SequenceIter<FixedStepSequence<T>> {}

impl<T: Steppable> IntoIterator for FixedStepSequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self)
    }
}

impl<T, F> IntoIterator for ArbitraryStepSequence<T, F>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = SequenceIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self)
    }
}
