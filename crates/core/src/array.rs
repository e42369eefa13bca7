//! The instrumented container.
//!
//! A [`TracedArray`] wraps a fixed-length sequence of payloads and records a
//! [`Snapshot`] after every meaningful operation:
//!
//! | Operation                         | Counter            | Snapshot                       |
//! |-----------------------------------|--------------------|--------------------------------|
//! | [`get`](TracedArray::get)         | `accesses += 1`    | [`Action::Access`], verbose only |
//! | [`set`](TracedArray::set)         | none               | [`Action::Write`]              |
//! | [`swap`](TracedArray::swap)       | `accesses += 2`, `swaps += 1` | [`Action::Swap`]    |
//! | [`swap_silent`](TracedArray::swap_silent) | `swaps += 1` | [`Action::Swap`]              |
//! | [`compare`](TracedArray::compare) | `comparisons += 1` | [`Action::Compare`]            |
//! | [`mark_finished`](TracedArray::mark_finished) | none   | one [`Action::None`] per position |
//!
//! # Identity tracking
//!
//! Every position holds an identity, initially equal to the position itself.
//! Swaps exchange identities along with payloads. A write moves the written
//! element's identity to the target position, and the identity it displaces
//! takes the slot the written identity came from. The permutation is therefore
//! a bijection of `0..n` after every operation, and a key lifted out of the
//! array by a shifting algorithm is followed until it is written back.

use std::{cmp::Ordering, time::Instant};

use tracing::{debug, trace, warn};

use crate::{
    Action, Annotate, Compare, Config, Counters, Error, Identity, Result, Sequence, Snapshot,
    Swap, Trace, Tracked,
};

#[cfg(test)]
mod tests;

/// Lifecycle phase of a [`TracedArray`].
///
/// The phase is reported, not enforced: operations after
/// [`mark_finished`](TracedArray::mark_finished) are still recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting operations; the trace is growing.
    Recording,

    /// The completion sweep has run.
    Finalized,
}

/// An array that counts and records every operation performed through it.
///
/// `T` is the payload type and `A` the opaque annotation type. The array never
/// interprets annotations; it only stores them and copies them into snapshots.
#[derive(Debug)]
pub struct TracedArray<T, A = ()> {
    values: Vec<T>,
    permutation: Vec<usize>,
    positions: Vec<usize>,
    counters: Counters,
    annotations: Option<Vec<Option<A>>>,
    config: Config,
    phase: Phase,
    start: Instant,
    trace: Trace<T, A>,
}

impl<T: Clone, A: Clone> TracedArray<T, A> {
    /// Creates a traced array and records the initial snapshot.
    #[must_use]
    pub fn new(values: Vec<T>, config: Config) -> Self {
        Self::build(values, None, config)
    }

    /// Creates a traced array with initial annotations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnnotationLength`] if `annotations` does not have one
    /// slot per value.
    pub fn with_annotations(
        values: Vec<T>,
        annotations: Vec<Option<A>>,
        config: Config,
    ) -> Result<Self> {
        if annotations.len() != values.len() {
            return Err(Error::AnnotationLength {
                expected: values.len(),
                actual: annotations.len(),
            });
        }
        Ok(Self::build(values, Some(annotations), config))
    }

    fn build(values: Vec<T>, annotations: Option<Vec<Option<A>>>, config: Config) -> Self {
        let n = values.len();
        let start = Instant::now();
        let initial = Snapshot {
            values: values.clone(),
            counters: Counters::default(),
            annotations: annotations.clone(),
            action: Action::None,
            permutation: (0..n).collect(),
            elapsed: start.elapsed(),
        };
        debug!(len = n, verbose = config.is_verbose(), "created traced array");

        Self {
            values,
            permutation: (0..n).collect(),
            positions: (0..n).collect(),
            counters: Counters::default(),
            annotations,
            config,
            phase: Phase::Recording,
            start,
            trace: Trace::new(initial),
        }
    }

    /// Reads the element at `position`.
    ///
    /// Increments `accesses`, and records an [`Action::Access`] snapshot if
    /// the array is verbose.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn get(&mut self, position: usize) -> Result<Tracked<T>> {
        self.check(position)?;
        self.counters.accesses += 1;
        trace!(position, "read");
        if self.config.is_verbose() {
            self.record(Action::Access { position });
        }
        Ok(self.element(position))
    }

    /// Writes `element` to `position` and records an [`Action::Write`].
    ///
    /// The element's identity moves with it (see the [module docs](self)).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position >= len`, or
    /// [`Error::ForeignElement`] if the element's identity is not one of
    /// this array's identities.
    pub fn set(&mut self, position: usize, element: Tracked<T>) -> Result<()> {
        self.check(position)?;
        let identity = element.identity().index();
        if identity >= self.len() {
            return Err(Error::ForeignElement {
                identity,
                len: self.len(),
            });
        }

        let from = self.positions[identity];
        let displaced = self.permutation[position];
        self.permutation[from] = displaced;
        self.positions[displaced] = from;
        self.permutation[position] = identity;
        self.positions[identity] = position;

        let value = element.into_value();
        self.values[position] = value.clone();
        trace!(position, identity, "write");
        self.record(Action::Write { position, value });
        Ok(())
    }

    /// Swaps positions `a` and `b`, counting both reads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either position is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.exchange(a, b, false)
    }

    /// Swaps positions `a` and `b` without counting the reads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either position is out of range.
    pub fn swap_silent(&mut self, a: usize, b: usize) -> Result<()> {
        self.exchange(a, b, true)
    }

    fn exchange(&mut self, a: usize, b: usize, silent: bool) -> Result<()> {
        self.check(a)?;
        self.check(b)?;

        if !silent {
            self.counters.accesses += 2;
        }
        self.values.swap(a, b);
        self.permutation.swap(a, b);
        self.positions[self.permutation[a]] = a;
        self.positions[self.permutation[b]] = b;
        self.counters.swaps += 1;

        trace!(a, b, silent, "swap");
        self.record(Action::Swap {
            position_a: a,
            position_b: b,
        });
        Ok(())
    }

    /// Paints every position with `marker`, one snapshot per position.
    ///
    /// Moves the array to [`Phase::Finalized`].
    pub fn mark_finished(&mut self, marker: A) {
        let n = self.len();
        self.annotations = Some(vec![None; n]);
        for position in 0..n {
            if let Some(annotations) = self.annotations.as_mut() {
                annotations[position] = Some(marker.clone());
            }
            self.record(Action::None);
        }
        self.phase = Phase::Finalized;
        debug!(len = n, snapshots = self.trace.len(), "finished");
    }

    /// Replaces all annotations, or removes them with `None`.
    ///
    /// Records nothing; the new state appears in the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnnotationLength`] if the vector does not have one slot
    /// per position.
    pub fn set_annotations(&mut self, annotations: Option<Vec<Option<A>>>) -> Result<()> {
        if let Some(slots) = &annotations {
            if slots.len() != self.len() {
                return Err(Error::AnnotationLength {
                    expected: self.len(),
                    actual: slots.len(),
                });
            }
        }
        trace!(cleared = annotations.is_none(), "replaced annotations");
        self.annotations = annotations;
        Ok(())
    }

    /// Sets or clears the annotation at a single position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn annotate(&mut self, position: usize, annotation: Option<A>) -> Result<()> {
        self.check(position)?;
        let n = self.len();
        let slots = self.annotations.get_or_insert_with(|| vec![None; n]);
        slots[position] = annotation;
        Ok(())
    }

    fn element(&self, position: usize) -> Tracked<T> {
        Tracked::new(
            Identity(self.permutation[position]),
            self.values[position].clone(),
        )
    }

    fn record(&mut self, action: Action<T>) {
        let snapshot = Snapshot {
            values: self.values.clone(),
            counters: self.counters,
            annotations: self.annotations.clone(),
            action,
            permutation: self.permutation.clone(),
            elapsed: self.start.elapsed(),
        };
        self.trace.push(snapshot);
    }
}

impl<T: Clone + PartialOrd, A: Clone> TracedArray<T, A> {
    /// Compares two elements and records an [`Action::Compare`].
    ///
    /// Each operand's current position is looked up from its identity. An
    /// operand that does not belong to this array is still compared and
    /// counted, but its position is recorded as `None`.
    pub fn compare(&mut self, a: &Tracked<T>, b: &Tracked<T>) -> Option<Ordering> {
        self.counters.comparisons += 1;
        let position_a = self.position_of(a.identity());
        let position_b = self.position_of(b.identity());
        if position_a.is_none() || position_b.is_none() {
            warn!(
                a = %a.identity(),
                b = %b.identity(),
                "compared element has no position in this array"
            );
        }
        trace!(?position_a, ?position_b, "compare");
        self.record(Action::Compare {
            position_a,
            position_b,
        });
        a.value().partial_cmp(b.value())
    }
}

impl<T, A> TracedArray<T, A> {
    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the array has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the current payloads without recording a read.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the identity currently held at each position.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Returns the current position of `identity`, if it belongs to this array.
    #[must_use]
    pub fn position_of(&self, identity: Identity) -> Option<usize> {
        self.positions.get(identity.index()).copied()
    }

    /// Returns the running counters.
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Returns the current annotations, if any.
    #[must_use]
    pub fn annotations(&self) -> Option<&[Option<A>]> {
        self.annotations.as_deref()
    }

    /// Returns the array's configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the trace recorded so far.
    #[must_use]
    pub fn trace(&self) -> &Trace<T, A> {
        &self.trace
    }

    /// Consumes the array and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<T, A> {
        self.trace
    }

    fn check(&self, position: usize) -> Result<()> {
        if position < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                position,
                len: self.len(),
            })
        }
    }
}

impl<T: Clone, A: Clone> Sequence for TracedArray<T, A> {
    type Item = Tracked<T>;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&mut self, position: usize) -> Result<Tracked<T>> {
        TracedArray::get(self, position)
    }

    fn set(&mut self, position: usize, item: Tracked<T>) -> Result<()> {
        TracedArray::set(self, position, item)
    }
}

impl<T: Clone, A: Clone> Swap for TracedArray<T, A> {
    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        TracedArray::swap(self, a, b)
    }

    fn swap_silent(&mut self, a: usize, b: usize) -> Result<()> {
        TracedArray::swap_silent(self, a, b)
    }
}

impl<T: Clone + PartialOrd, A: Clone> Compare for TracedArray<T, A> {
    fn compare(&mut self, a: &Tracked<T>, b: &Tracked<T>) -> Option<Ordering> {
        TracedArray::compare(self, a, b)
    }
}

impl<T: Clone, A: Clone> Annotate for TracedArray<T, A> {
    type Annotation = A;

    fn annotations(&self) -> Option<&[Option<A>]> {
        TracedArray::annotations(self)
    }

    fn set_annotations(&mut self, annotations: Option<Vec<Option<A>>>) -> Result<()> {
        TracedArray::set_annotations(self, annotations)
    }

    fn annotate(&mut self, position: usize, annotation: Option<A>) -> Result<()> {
        TracedArray::annotate(self, position, annotation)
    }
}
