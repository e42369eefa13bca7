use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identity of an element: its position in the initial array.
///
/// Identities never change once assigned, so an element can be followed
/// through any number of swaps and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity(pub usize);

impl Identity {
    /// Returns the identity as an index into the initial array.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for Identity {
    fn from(index: usize) -> Self {
        Identity(index)
    }
}

/// A value read out of a [`TracedArray`], tagged with its [`Identity`].
///
/// `Tracked` intentionally implements neither `PartialEq` nor `PartialOrd`.
/// Ordering is only available through [`Compare`], which counts and records
/// every comparison against the array the element came from.
///
/// [`TracedArray`]: crate::TracedArray
/// [`Compare`]: crate::Compare
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    identity: Identity,
    value: T,
}

impl<T> Tracked<T> {
    pub(crate) fn new(identity: Identity, value: T) -> Self {
        Self { identity, value }
    }

    /// Returns the stable identity of this element.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the underlying payload.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the element and returns its payload.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
