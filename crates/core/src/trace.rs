use std::{ops::Index, slice};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Snapshot;

/// The ordered, append-only record of one run.
///
/// Index 0 is the snapshot taken when the array was created. A `Trace` handed
/// out by a [`TracedArray`] is read-only; only the array appends to it.
///
/// [`TracedArray`]: crate::TracedArray
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<T, A> {
    snapshots: Vec<Snapshot<T, A>>,
}

impl<T, A> Trace<T, A> {
    pub(crate) fn new(initial: Snapshot<T, A>) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot<T, A>) {
        self.snapshots.push(snapshot);
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    ///
    /// Traces produced by a [`TracedArray`](crate::TracedArray) always hold
    /// at least the initial snapshot. A deserialized trace may be empty, in
    /// which case [`first`](Self::first) and [`last`](Self::last) return `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot<T, A>> {
        self.snapshots.get(index)
    }

    /// Returns the initial snapshot.
    #[must_use]
    pub fn first(&self) -> Option<&Snapshot<T, A>> {
        self.snapshots.first()
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot<T, A>> {
        self.snapshots.last()
    }

    /// Iterates over the snapshots in recording order.
    pub fn iter(&self) -> slice::Iter<'_, Snapshot<T, A>> {
        self.snapshots.iter()
    }

    /// Returns the snapshots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Snapshot<T, A>] {
        &self.snapshots
    }

    /// Consumes the trace and returns its snapshots.
    #[must_use]
    pub fn into_snapshots(self) -> Vec<Snapshot<T, A>> {
        self.snapshots
    }
}

impl<T, A> Index<usize> for Trace<T, A> {
    type Output = Snapshot<T, A>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.snapshots[index]
    }
}

impl<'a, T, A> IntoIterator for &'a Trace<T, A> {
    type Item = &'a Snapshot<T, A>;
    type IntoIter = slice::Iter<'a, Snapshot<T, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

impl<T, A> IntoIterator for Trace<T, A> {
    type Item = Snapshot<T, A>;
    type IntoIter = std::vec::IntoIter<Snapshot<T, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.into_iter()
    }
}
