//! Parallel consumption of range sequences on a rayon thread pool.

use log::debug;
use rayon::iter::plumbing::{
    Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tempora_common::{Error, Result};

use crate::arbitrary_step::ArbitraryStepSequence;
use crate::fixed_step::FixedStepSequence;
use crate::iter::SequenceIter;
use crate::split_sequence::{SizeEstimate, SplitSequence};
use crate::step::Steppable;

/// Settings for running range consumption in parallel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Number of worker threads; `None` lets rayon pick one per logical CPU.
    pub threads: Option<usize>,
    /// Minimum number of elements a worker receives before the sequence
    /// stops splitting.
    pub min_len: u64,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        ParallelOptions {
            threads: None,
            min_len: 1,
        }
    }
}

impl ParallelOptions {
    /// Builds a dedicated thread pool for range consumption.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidArgument` for a zero thread count and
    /// `ErrorKind::Runtime` if the pool cannot be started.
    pub fn build_pool(&self) -> Result<rayon::ThreadPool> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("tempora_range_{i}"));
        if let Some(threads) = self.threads {
            tempora_common::verify_arg!(threads, threads > 0);
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| Error::runtime("failed to start range thread pool", e))?;
        debug!(
            "started range thread pool with {} threads",
            pool.current_num_threads()
        );
        Ok(pool)
    }

    /// Wraps `sequence` for parallel consumption using these options'
    /// minimum split length.
    pub fn par_sequence<S>(&self, sequence: SequenceIter<S>) -> ParSequence<S>
    where
        S: SplitSequence + Send,
        S::Item: Send,
    {
        sequence.into_par_iter().with_min_len(self.min_len)
    }
}

/// A rayon `ParallelIterator` over a [`SplitSequence`].
///
/// Work is divided with the sequence's own `split`, so ordered reductions
/// such as `collect::<Vec<_>>()` see the elements in traversal order. A
/// sequence that never splits runs on a single worker.
#[derive(Clone, Debug)]
pub struct ParSequence<S> {
    inner: Option<S>,
    min_len: u64,
}

impl<S> ParSequence<S>
where
    S: SplitSequence + Send,
    S::Item: Send,
{
    pub fn new(sequence: S) -> Self {
        ParSequence {
            inner: Some(sequence),
            min_len: 1,
        }
    }

    /// Stops splitting once a part would hold fewer than `min_len` elements.
    pub fn with_min_len(mut self, min_len: u64) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    pub fn min_len(&self) -> u64 {
        self.min_len
    }
}

impl<S> ParallelIterator for ParSequence<S>
where
    S: SplitSequence + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        match self.inner {
            Some(sequence) => bridge_unindexed(
                SequenceProducer {
                    sequence,
                    min_len: self.min_len,
                },
                consumer,
            ),
            None => consumer.into_folder().complete(),
        }
    }
}

struct SequenceProducer<S> {
    sequence: S,
    min_len: u64,
}

impl<S> SequenceProducer<S>
where
    S: SplitSequence,
{
    fn is_worth_splitting(&self) -> bool {
        match self.sequence.estimate_size() {
            SizeEstimate::Exact(n) => n / 2 >= self.min_len,
            SizeEstimate::Unbounded => true,
        }
    }
}

impl<S> UnindexedProducer for SequenceProducer<S>
where
    S: SplitSequence + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn split(mut self) -> (Self, Option<Self>) {
        if !self.is_worth_splitting() {
            return (self, None);
        }
        let min_len = self.min_len;
        let right = self
            .sequence
            .split()
            .map(|sequence| SequenceProducer { sequence, min_len });
        if let Some(right) = &right {
            debug!(
                "split range for parallel work: {:?} | {:?}",
                self.sequence.estimate_size(),
                right.sequence.estimate_size()
            );
        }
        (self, right)
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(SequenceIter::new(self.sequence))
    }
}

impl<S> IntoParallelIterator for SequenceIter<S>
where
    S: SplitSequence + Send,
    S::Item: Send,
{
    type Iter = ParSequence<S>;
    type Item = S::Item;

    fn into_par_iter(self) -> Self::Iter {
        ParSequence {
            inner: self.into_sequence(),
            min_len: 1,
        }
    }
}

impl<T> IntoParallelIterator for FixedStepSequence<T>
where
    T: Steppable + Send,
{
    type Iter = ParSequence<Self>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        ParSequence::new(self)
    }
}

impl<T, F> IntoParallelIterator for ArbitraryStepSequence<T, F>
where
    T: Clone + Ord + Send,
    F: Fn(&T) -> T + Send,
{
    type Iter = ParSequence<Self>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        ParSequence::new(self)
    }
}
