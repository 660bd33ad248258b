//! Fan-out/fan-in task pool
//!
//! Runs independent jobs concurrently and hands the results back in input
//! order. Each job reports `(index, outcome)` over a channel; the caller
//! places outcomes by index once every job has been joined, so completion
//! order never leaks into the output.
//!
//! A pool remembers the lowest position whose job failed. Jobs at higher
//! positions that have not started yet are skipped, and nested pools created
//! from a skipped slot skip all of their own jobs. Jobs at lower positions
//! always run, which keeps the reported failure deterministic.
//!
//! With the `std` feature jobs run on the rayon thread pool inside a scope
//! tied to the call. Without it they run in order on the calling thread.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

const NO_FAILURE: usize = usize::MAX;

/// One fan-out group, alive for a single encode/decode call
#[derive(Debug)]
pub struct TaskPool<'p> {
    parent: Option<Slot<'p>>,
    first_failure: AtomicUsize,
}

/// Position of a job inside its pool
#[derive(Debug, Clone, Copy)]
pub struct Slot<'p> {
    pool: &'p TaskPool<'p>,
    index: usize,
}

/// Why a pool run did not produce a full result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupted<E> {
    /// The job at `index` failed; it is the lowest failing position
    Failed {
        /// Position of the failing job
        index: usize,
        /// Error returned by the job
        error: E,
    },
    /// An enclosing job was cancelled, so this pool skipped its work
    Cancelled,
}

enum Outcome<T, E> {
    Done(Result<T, E>),
    Skipped,
}

impl<'p> Slot<'p> {
    /// Position of the job in the original input order
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when an earlier sibling (or an ancestor's sibling) already failed
    pub fn is_cancelled(&self) -> bool {
        self.index > self.pool.first_failure.load(Ordering::Acquire)
            || self.pool.parent.is_some_and(|parent| parent.is_cancelled())
    }
}

impl TaskPool<'static> {
    /// Create a top-level pool
    pub fn new() -> Self {
        Self {
            parent: None,
            first_failure: AtomicUsize::new(NO_FAILURE),
        }
    }
}

impl Default for TaskPool<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> TaskPool<'p> {
    /// Create a pool for work spawned from inside the job at `slot`
    pub fn nested(slot: Slot<'p>) -> Self {
        Self {
            parent: Some(slot),
            first_failure: AtomicUsize::new(NO_FAILURE),
        }
    }

    /// Lowest failed position recorded so far
    pub fn first_failure(&self) -> Option<usize> {
        match self.first_failure.load(Ordering::Acquire) {
            NO_FAILURE => None,
            index => Some(index),
        }
    }

    /// Run `work` once per input and collect results in input order
    ///
    /// Every job is joined before this returns, on success and failure alike.
    /// On failure the error of the lowest failing position is returned.
    pub fn run<I, T, E, F>(&self, inputs: Vec<I>, work: F) -> Result<Vec<T>, Interrupted<E>>
    where
        I: Send,
        T: Send,
        E: Send,
        F: Fn(Slot<'_>, I) -> Result<T, E> + Sync,
    {
        let expected = inputs.len();
        tracing::trace!(jobs = expected, "fan-out");

        let mut slots: Vec<Option<T>> = (0..expected).map(|_| None).collect();
        let mut failure: Option<(usize, E)> = None;

        for (index, outcome) in self.dispatch(inputs, &work) {
            match outcome {
                Outcome::Done(Ok(value)) => {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(value);
                    }
                }
                Outcome::Done(Err(error)) => {
                    if failure.as_ref().map_or(true, |(first, _)| index < *first) {
                        failure = Some((index, error));
                    }
                }
                Outcome::Skipped => {}
            }
        }

        if let Some((index, error)) = failure {
            return Err(Interrupted::Failed { index, error });
        }

        // A gap without a failure means an enclosing job was cancelled.
        slots
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or(Interrupted::Cancelled)
    }

    fn execute<I, T, E, F>(&self, index: usize, input: I, work: &F) -> Outcome<T, E>
    where
        F: Fn(Slot<'_>, I) -> Result<T, E>,
    {
        let slot = Slot { pool: self, index };
        if slot.is_cancelled() {
            return Outcome::Skipped;
        }

        let result = work(slot, input);
        if result.is_err() {
            self.first_failure.fetch_min(index, Ordering::AcqRel);
        }
        Outcome::Done(result)
    }

    #[cfg(feature = "std")]
    fn dispatch<I, T, E, F>(&self, inputs: Vec<I>, work: &F) -> Vec<(usize, Outcome<T, E>)>
    where
        I: Send,
        T: Send,
        E: Send,
        F: Fn(Slot<'_>, I) -> Result<T, E> + Sync,
    {
        // Nothing to overlap with; skip the scope.
        if inputs.len() <= 1 {
            return inputs
                .into_iter()
                .enumerate()
                .map(|(index, input)| (index, self.execute(index, input, work)))
                .collect();
        }

        let (tx, rx) = crossbeam_channel::bounded(inputs.len());

        rayon::scope(|scope| {
            for (index, input) in inputs.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let outcome = self.execute(index, input, work);
                    // Capacity covers every job and the receiver outlives the scope.
                    if tx.send((index, outcome)).is_err() {
                        tracing::error!(index, "result channel closed before job finished");
                    }
                });
            }
        });

        drop(tx);
        rx.into_iter().collect()
    }

    #[cfg(not(feature = "std"))]
    fn dispatch<I, T, E, F>(&self, inputs: Vec<I>, work: &F) -> Vec<(usize, Outcome<T, E>)>
    where
        F: Fn(Slot<'_>, I) -> Result<T, E>,
    {
        inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| (index, self.execute(index, input, work)))
            .collect()
    }
}
