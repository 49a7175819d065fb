//! Fork-join evaluation of merge-safe [`Strategy`]s.
//!
//! The input is split into partitions, every worker thread folds its
//! partitions into a private state, and the partial states are sent back
//! over a channel and combined pairwise as a reduction tree. States are never
//! shared: each one is owned by exactly one worker until it is handed over
//! to the merging side, so no locking is involved.
//!
//! Partial states arrive in completion order, so only strategies declaring
//! [`Characteristics::UNORDERED`] are accepted.
//!
//! # Examples
//!
//! ```
//! use fold_merge::{bits::{BitString, parse_tokens}, fork_join::ForkJoin};
//!
//! let tokens = parse_tokens("7,1-3,5").unwrap();
//! let bits = ForkJoin::new().workers(2).collect(&BitString::new(), tokens);
//!
//! assert_eq!(bits.unwrap(), "1110101");
//! ```

use std::{num::NonZeroUsize, sync::mpsc, thread};

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, debug_span, trace};

use crate::strategy::{Characteristics, Strategy};

/// An error returned by [`ForkJoin`] evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForkJoinError {
    /// The strategy must be folded in order and cannot be partitioned.
    #[error("strategy cannot be evaluated out of order (characteristics: {characteristics:?})")]
    NotMergeSafe { characteristics: Characteristics },

    /// A worker panicked while folding its partitions.
    #[error("fork-join worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

/// Configuration of a fork-join run.
///
/// Zero values passed to the builder methods are treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkJoin {
    workers: NonZeroUsize,
    chunk_size: Option<NonZeroUsize>,
}

impl ForkJoin {
    /// Uses as many workers as the machine has available parallelism, and
    /// splits the input evenly between them.
    pub fn new() -> Self {
        Self {
            workers: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            chunk_size: None,
        }
    }

    /// Sets the maximum number of worker threads.
    #[inline]
    pub fn workers(self, workers: usize) -> Self {
        Self {
            workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    /// Sets how many items go into each partition.
    ///
    /// By default the input is split into one partition per worker.
    #[inline]
    pub fn chunk_size(self, chunk_size: usize) -> Self {
        Self {
            chunk_size: Some(NonZeroUsize::new(chunk_size).unwrap_or(NonZeroUsize::MIN)),
            ..self
        }
    }

    #[inline]
    pub fn worker_count(&self) -> usize {
        self.workers.get()
    }

    /// The partition size used for an input of `len` items.
    pub fn chunk_size_for(&self, len: usize) -> usize {
        match self.chunk_size {
            Some(size) => size.get(),
            None => len.div_ceil(self.workers.get()).max(1),
        }
    }

    /// Splits `items` into partitions of [`chunk_size_for`](Self::chunk_size_for) items
    /// and evaluates them with [`collect_partitioned`](Self::collect_partitioned).
    pub fn collect<S>(&self, strategy: &S, items: Vec<S::Item>) -> Result<S::Output, ForkJoinError>
    where
        S: Strategy + Sync,
        S::Item: Send,
        S::State: Send,
    {
        let chunk_size = self.chunk_size_for(items.len());
        let chunks = items.into_iter().chunks(chunk_size);
        let partitions: Vec<Vec<_>> = chunks.into_iter().map(|chunk| chunk.collect()).collect();

        self.collect_partitioned(strategy, partitions)
    }

    /// Folds caller-supplied partitions in parallel and combines the results.
    ///
    /// Partitions are dealt round-robin to at most [`worker_count`](Self::worker_count)
    /// workers. Empty partitions are allowed. With no partitions at all the output is
    /// the finished empty state.
    pub fn collect_partitioned<S>(
        &self,
        strategy: &S,
        partitions: Vec<Vec<S::Item>>,
    ) -> Result<S::Output, ForkJoinError>
    where
        S: Strategy + Sync,
        S::Item: Send,
        S::State: Send,
    {
        let characteristics = strategy.characteristics();
        if !characteristics.is_merge_safe() {
            return Err(ForkJoinError::NotMergeSafe { characteristics });
        }

        let worker_count = self.workers.get().min(partitions.len());
        debug!(
            partitions = partitions.len(),
            workers = worker_count,
            "starting fork-join collection"
        );

        let mut batches: Vec<Vec<Vec<S::Item>>> =
            std::iter::repeat_with(Vec::new).take(worker_count).collect();
        for (index, partition) in partitions.into_iter().enumerate() {
            batches[index % worker_count].push(partition);
        }

        let merged = thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();

            let handles: Vec<_> = batches
                .into_iter()
                .enumerate()
                .map(|(worker, batch)| {
                    let tx = tx.clone();
                    scope.spawn(move || {
                        let _span = debug_span!("fork_join_worker", worker).entered();

                        let mut state = strategy.supply();
                        let mut folded = 0_usize;
                        for item in batch.into_iter().flatten() {
                            strategy.accumulate(&mut state, item);
                            folded += 1;
                        }
                        trace!(folded, "partial state ready");

                        // The receiver outlives every worker inside this scope.
                        let _ = tx.send(state);
                    })
                })
                .collect();
            // Only the workers' senders may keep the channel open.
            drop(tx);

            let merged = rx.into_iter().tree_reduce(|a, b| {
                trace!("combining partial states");
                strategy.combine(a, b)
            });

            // Join every worker so a second panic cannot escape the scope.
            let mut panicked = None;
            for (worker, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    panicked.get_or_insert(worker);
                }
            }

            match panicked {
                Some(worker) => Err(ForkJoinError::WorkerPanicked { worker }),
                None => Ok(merged),
            }
        })?;

        let state = merged.unwrap_or_else(|| strategy.supply());
        Ok(strategy.finish(state))
    }
}

impl Default for ForkJoin {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
