//! Structural validation of recorded traces.
//!
//! [`check_trace`] walks a trace once and reports the first snapshot that
//! breaks one of the guarantees a [`TracedArray`] makes about what it records:
//!
//! - the first snapshot has no action, zero counters, and the identity
//!   permutation
//! - every snapshot has the same length, and its values, permutation, and
//!   annotations all agree on it
//! - every permutation is a bijection on `0..n`
//! - action positions are in range
//! - counters and elapsed time never decrease
//!
//! [`TracedArray`]: sortscope_core::TracedArray

use sortscope_core::{Action, Counters, Snapshot};
use thiserror::Error;
use tracing::debug;

/// The first broken guarantee found in a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("trace has no snapshots")]
    Empty,

    #[error("initial snapshot has a {kind} action")]
    InitialAction { kind: &'static str },

    #[error("initial snapshot has non-zero counters: {counters:?}")]
    InitialCounters { counters: Counters },

    #[error("initial snapshot permutation is not the identity")]
    InitialPermutation,

    #[error("snapshot {index}: {field} has length {actual}, expected {expected}")]
    Length {
        index: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("snapshot {index}: permutation is not a bijection")]
    NotBijection { index: usize },

    #[error("snapshot {index}: action position {position} is out of range for length {len}")]
    ActionPosition {
        index: usize,
        position: usize,
        len: usize,
    },

    #[error("snapshot {index}: counters decreased")]
    CountersDecreased { index: usize },

    #[error("snapshot {index}: elapsed time decreased")]
    ElapsedDecreased { index: usize },
}

/// Checks a finished trace.
///
/// # Errors
///
/// Returns the first [`Violation`] found, scanning snapshots in order.
pub fn check_trace<T, A>(snapshots: &[Snapshot<T, A>]) -> Result<(), Violation> {
    let Some(initial) = snapshots.first() else {
        return Err(Violation::Empty);
    };

    if !matches!(initial.action, Action::None) {
        return Err(Violation::InitialAction {
            kind: initial.action.kind().as_str(),
        });
    }
    if initial.counters != Counters::default() {
        return Err(Violation::InitialCounters {
            counters: initial.counters,
        });
    }
    if !initial
        .permutation
        .iter()
        .enumerate()
        .all(|(position, &identity)| position == identity)
    {
        return Err(Violation::InitialPermutation);
    }

    let n = initial.len();
    for (index, snapshot) in snapshots.iter().enumerate() {
        check_lengths(index, snapshot, n)?;

        if !snapshot.is_bijection() {
            return Err(Violation::NotBijection { index });
        }

        if let Some(position) = snapshot.action.positions().into_iter().find(|&p| p >= n) {
            return Err(Violation::ActionPosition {
                index,
                position,
                len: n,
            });
        }
    }

    for (index, (earlier, later)) in (1..).zip(snapshots.iter().zip(&snapshots[1..])) {
        if !later.counters.dominates(&earlier.counters) {
            return Err(Violation::CountersDecreased { index });
        }
        if later.elapsed < earlier.elapsed {
            return Err(Violation::ElapsedDecreased { index });
        }
    }

    debug!(snapshots = snapshots.len(), len = n, "trace checked");
    Ok(())
}

fn check_lengths<T, A>(index: usize, snapshot: &Snapshot<T, A>, n: usize) -> Result<(), Violation> {
    let fields = [
        ("values", Some(snapshot.values.len())),
        ("permutation", Some(snapshot.permutation.len())),
        ("annotations", snapshot.annotations.as_ref().map(Vec::len)),
    ];
    for (field, actual) in fields {
        match actual {
            Some(actual) if actual != n => {
                return Err(Violation::Length {
                    index,
                    field,
                    expected: n,
                    actual,
                });
            }
            _ => {}
        }
    }
    Ok(())
}
