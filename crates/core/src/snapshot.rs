use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Action;

/// Running operation counters of a traced array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Counters {
    pub accesses: u64,
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    /// Returns `true` if no counter is smaller than in `earlier`.
    #[must_use]
    pub fn dominates(&self, earlier: &Counters) -> bool {
        self.accesses >= earlier.accesses
            && self.comparisons >= earlier.comparisons
            && self.swaps >= earlier.swaps
    }
}

/// An immutable, self-contained view of a traced array at one point in time.
///
/// Every field is an owned copy, so later mutations of the array never show up
/// in a snapshot that has already been recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot<T, A> {
    /// The payloads in position order.
    pub values: Vec<T>,

    /// Counter values at capture time.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub counters: Counters,

    /// Per-position annotations, if any are set.
    pub annotations: Option<Vec<Option<A>>>,

    /// The operation that produced this snapshot.
    pub action: Action<T>,

    /// `permutation[i]` is the identity of the element at position `i`.
    pub permutation: Vec<usize>,

    /// Time since the array was created.
    #[cfg_attr(feature = "serde", serde(with = "seconds"))]
    pub elapsed: Duration,
}

impl<T, A> Snapshot<T, A> {
    /// Returns the number of positions captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the captured array was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the permutation maps positions onto `0..n` one-to-one.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let n = self.permutation.len();
        let mut seen = vec![false; n];
        self.permutation.iter().all(|&identity| {
            identity < n && !std::mem::replace(&mut seen[identity], true)
        })
    }
}

/// Serializes a [`Duration`] as floating-point seconds.
#[cfg(feature = "serde")]
mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(super) fn serialize<S: Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(elapsed.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
