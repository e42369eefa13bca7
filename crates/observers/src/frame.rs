//! Per-position marks for drawing a single snapshot.
//!
//! A renderer draws one bar per position and needs to know how to highlight
//! each bar. [`Frame::from_snapshot`] resolves that once, so renderers only map
//! a [`Mark`] to whatever styling they use.
//!
//! Annotations are applied first. The snapshot's action then overrides the
//! positions it touched. Unresolved compare operands touch nothing.

use std::{fmt, time::Duration};

use sortscope_core::{Action, Counters, Snapshot};

/// How one position should be highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark<A> {
    /// Nothing to highlight.
    Plain,

    /// Carries the annotation set by the algorithm.
    Annotated(A),

    /// Read by the action that produced the snapshot.
    Access,

    /// Written by the action that produced the snapshot.
    Write,

    /// Exchanged by the action that produced the snapshot.
    Swap,

    /// Compared by the action that produced the snapshot.
    Compare,
}

/// Everything needed to draw one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a, T, A> {
    pub values: &'a [T],
    pub marks: Vec<Mark<A>>,
    pub counters: Counters,
    pub elapsed: Duration,
}

impl<'a, T, A: Clone> Frame<'a, T, A> {
    /// Builds the frame for `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &'a Snapshot<T, A>) -> Self {
        let mut marks = match &snapshot.annotations {
            Some(annotations) => annotations
                .iter()
                .map(|slot| slot.clone().map_or(Mark::Plain, Mark::Annotated))
                .collect(),
            None => vec![Mark::Plain; snapshot.len()],
        };

        let overlay = match snapshot.action {
            Action::None => None,
            Action::Access { .. } => Some(Mark::Access),
            Action::Write { .. } => Some(Mark::Write),
            Action::Swap { .. } => Some(Mark::Swap),
            Action::Compare { .. } => Some(Mark::Compare),
        };
        if let Some(mark) = overlay {
            for position in snapshot.action.positions() {
                if let Some(slot) = marks.get_mut(position) {
                    *slot = mark.clone();
                }
            }
        }

        Self {
            values: &snapshot.values,
            marks,
            counters: snapshot.counters,
            elapsed: snapshot.elapsed,
        }
    }
}

impl<T, A> fmt::Display for Frame<'_, T, A> {
    /// Writes the caption shown above a drawn frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "array accesses: {}", self.counters.accesses)?;
        writeln!(f, "comparisons: {}", self.counters.comparisons)?;
        writeln!(f, "swaps: {}", self.counters.swaps)?;
        write!(f, "elapsed time (s): {:.6}", self.elapsed.as_secs_f64())
    }
}
