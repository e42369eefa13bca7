//! Capability traits that sorting algorithms are written against.
//!
//! Algorithms never reach into a container's internals. Instead they declare
//! the subset of capabilities they need:
//!
//! - [`Sequence`]: indexed reads and writes
//! - [`Swap`]: exchanging two positions
//! - [`Compare`]: ordering two elements previously read from the sequence
//! - [`Annotate`]: attaching opaque per-position markers
//!
//! [`TracedArray`](crate::TracedArray) implements all four, recording each
//! call. Other implementations (for example a plain, unrecorded wrapper) can be
//! substituted without changing any algorithm.

use std::cmp::Ordering;

use crate::Result;

/// Indexed access to a fixed-length sequence.
pub trait Sequence {
    /// The element type handed out by [`get`](Sequence::get).
    type Item;

    /// Returns the number of positions in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range.
    fn get(&mut self, position: usize) -> Result<Self::Item>;

    /// Writes `item` to `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range or `item` cannot be
    /// stored in this sequence.
    fn set(&mut self, position: usize, item: Self::Item) -> Result<()>;
}

/// Exchanging the contents of two positions.
pub trait Swap: Sequence {
    /// Swaps positions `a` and `b`, reading both through the counted path.
    ///
    /// # Errors
    ///
    /// Returns an error if either position is out of range.
    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    /// Swaps positions `a` and `b` without counting the reads.
    ///
    /// # Errors
    ///
    /// Returns an error if either position is out of range.
    fn swap_silent(&mut self, a: usize, b: usize) -> Result<()>;
}

/// Ordering elements read out of a sequence.
///
/// Every provided predicate performs exactly one call to
/// [`compare`](Compare::compare), so counting happens in one place.
pub trait Compare: Sequence {
    /// Compares two elements, returning `None` if they are incomparable.
    fn compare(&mut self, a: &Self::Item, b: &Self::Item) -> Option<Ordering>;

    /// Returns `true` if `a < b`.
    fn less(&mut self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }

    /// Returns `true` if `a > b`.
    fn greater(&mut self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Some(Ordering::Greater)
    }

    /// Returns `true` if `a <= b`.
    fn less_or_equal(&mut self, a: &Self::Item, b: &Self::Item) -> bool {
        matches!(
            self.compare(a, b),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns `true` if `a == b`.
    fn equal(&mut self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Some(Ordering::Equal)
    }
}

/// Attaching opaque markers to positions.
///
/// Annotations carry no ordering meaning. Changing them never records a
/// snapshot on its own; the new state shows up in the next recorded operation.
pub trait Annotate: Sequence {
    /// The caller-defined marker type.
    type Annotation: Clone;

    /// Returns the current annotations, if any.
    fn annotations(&self) -> Option<&[Option<Self::Annotation>]>;

    /// Replaces all annotations, or removes them with `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length differs from the sequence length.
    fn set_annotations(&mut self, annotations: Option<Vec<Option<Self::Annotation>>>)
    -> Result<()>;

    /// Sets or clears the annotation at a single position.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range.
    fn annotate(&mut self, position: usize, annotation: Option<Self::Annotation>) -> Result<()>;

    /// Removes all annotations.
    fn clear_annotations(&mut self) {
        // Clearing can never violate the length check.
        let _ = self.set_annotations(None);
    }
}
