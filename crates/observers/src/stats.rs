//! Aggregate statistics for a recorded run.

use std::{collections::BTreeMap, fmt, time::Duration};

use sortscope_core::{ActionKind, Counters, Snapshot};

/// Summary of one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStats {
    /// Number of positions in the traced array.
    pub len: usize,

    /// Number of recorded snapshots, including the initial one.
    pub snapshots: usize,

    /// Counters of the last snapshot.
    pub counters: Counters,

    /// Elapsed time of the last snapshot.
    pub elapsed: Duration,

    actions: BTreeMap<ActionKind, usize>,
}

impl TraceStats {
    /// Collects statistics from a trace's snapshots.
    ///
    /// An empty slice yields all-zero statistics.
    #[must_use]
    pub fn collect<T, A>(snapshots: &[Snapshot<T, A>]) -> Self {
        let mut actions = BTreeMap::new();
        for snapshot in snapshots {
            *actions.entry(snapshot.action.kind()).or_insert(0) += 1;
        }

        let last = snapshots.last();
        Self {
            len: last.map_or(0, Snapshot::len),
            snapshots: snapshots.len(),
            counters: last.map(|s| s.counters).unwrap_or_default(),
            elapsed: last.map(|s| s.elapsed).unwrap_or_default(),
            actions,
        }
    }

    /// Returns how many snapshots were produced by actions of `kind`.
    #[must_use]
    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.get(&kind).copied().unwrap_or(0)
    }

    /// Returns comparisons divided by array length, or zero for an empty array.
    #[must_use]
    pub fn comparisons_per_element(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        // Precision loss only matters far beyond any traceable run.
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.counters.comparisons as f64 / self.len as f64;
        ratio
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} snapshots, {} accesses, {} comparisons, {} swaps, {} writes in {:.3?}",
            self.snapshots,
            self.counters.accesses,
            self.counters.comparisons,
            self.counters.swaps,
            self.count(ActionKind::Write),
            self.elapsed,
        )
    }
}
