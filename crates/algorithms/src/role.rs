use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The part a position plays at some point during an algorithm.
///
/// Annotated algorithm variants mark positions with roles. The traced array
/// stores them as opaque annotations; assigning colors or styles is left to
/// whatever consumes the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Role {
    /// Lower bound of the active quicksort range.
    Low,

    /// Upper bound of the active quicksort range.
    High,

    /// Final position of a quicksort pivot.
    Partition,

    /// Depth of a position in the heap, root at 0.
    HeapLevel(u32),

    /// Position in the left run of an active merge.
    MergeLeft,

    /// Position in the right run of an active merge.
    MergeRight,

    /// Position written from the bucket of this digit during a radix pass.
    Bucket(u8),

    /// Painted by the completion sweep.
    Finished,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
            Self::Partition => write!(f, "partition"),
            Self::HeapLevel(level) => write!(f, "heap level {level}"),
            Self::MergeLeft => write!(f, "merge left"),
            Self::MergeRight => write!(f, "merge right"),
            Self::Bucket(digit) => write!(f, "bucket {digit}"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_camel_case() {
        assert_eq!(serde_json::to_value(Role::MergeLeft).unwrap(), json!("mergeLeft"));
        assert_eq!(
            serde_json::to_value(Role::HeapLevel(2)).unwrap(),
            json!({ "heapLevel": 2 })
        );
    }
}
