#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation that triggered a [`Snapshot`].
///
/// Compare positions are resolved from element identities at the time of the
/// comparison and are `None` when an operand does not belong to the array.
///
/// [`Snapshot`]: crate::Snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Action<T> {
    /// No operation: the initial snapshot and completion sweep steps.
    None,

    /// A plain read (only recorded for verbose arrays).
    Access { position: usize },

    /// A payload was written to `position`.
    Write { position: usize, value: T },

    /// Two positions were exchanged.
    Swap {
        #[cfg_attr(feature = "serde", serde(rename = "positionA"))]
        position_a: usize,
        #[cfg_attr(feature = "serde", serde(rename = "positionB"))]
        position_b: usize,
    },

    /// Two elements were compared.
    Compare {
        #[cfg_attr(feature = "serde", serde(rename = "positionA"))]
        position_a: Option<usize>,
        #[cfg_attr(feature = "serde", serde(rename = "positionB"))]
        position_b: Option<usize>,
    },
}

/// Payload-free discriminant of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    None,
    Access,
    Write,
    Swap,
    Compare,
}

impl<T> Action<T> {
    /// Returns the kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::None => ActionKind::None,
            Self::Access { .. } => ActionKind::Access,
            Self::Write { .. } => ActionKind::Write,
            Self::Swap { .. } => ActionKind::Swap,
            Self::Compare { .. } => ActionKind::Compare,
        }
    }

    /// Returns the positions touched by this action, skipping unresolved ones.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        match self {
            Self::None => Vec::new(),
            Self::Access { position } | Self::Write { position, .. } => vec![*position],
            Self::Swap {
                position_a,
                position_b,
            } => vec![*position_a, *position_b],
            Self::Compare {
                position_a,
                position_b,
            } => position_a.iter().chain(position_b).copied().collect(),
        }
    }
}

impl ActionKind {
    /// All kinds, in declaration order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::None,
        ActionKind::Access,
        ActionKind::Write,
        ActionKind::Swap,
        ActionKind::Compare,
    ];

    /// Returns the lowercase tag used in serialized traces.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Access => "access",
            Self::Write => "write",
            Self::Swap => "swap",
            Self::Compare => "compare",
        }
    }
}
