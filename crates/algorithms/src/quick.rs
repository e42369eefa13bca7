//! Quicksort with the Lomuto partition scheme.
//!
//! The last element of each range is the pivot. [`quick_annotated`] marks the
//! active range bounds with [`Role::Low`] and [`Role::High`] and, once a
//! partition completes, the pivot's final position with [`Role::Partition`].
//! Marks are reset at the start of every non-trivial range.

use sortscope_core::{Annotate, Compare, Swap};

use crate::{
    Error, Role,
    paint::{Painter, Roles},
};

/// Sorts with quicksort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn quick<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    if n > 1 {
        sort_range(seq, 0, n - 1, &mut ())?;
    }
    Ok(())
}

/// Sorts with quicksort, annotating range bounds and pivots.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn quick_annotated<S>(seq: &mut S) -> Result<(), Error>
where
    S: Swap + Compare + Annotate,
    S::Annotation: From<Role>,
{
    let n = seq.len();
    Roles.clear(seq)?;
    if n > 1 {
        sort_range(seq, 0, n - 1, &mut Roles)?;
    }
    Ok(())
}

fn sort_range<S, P>(seq: &mut S, lo: usize, hi: usize, painter: &mut P) -> Result<(), Error>
where
    S: Swap + Compare,
    P: Painter<S>,
{
    if lo >= hi {
        return Ok(());
    }

    painter.clear(seq)?;
    painter.paint(seq, lo, Some(Role::Low))?;
    painter.paint(seq, hi, Some(Role::High))?;

    let p = partition(seq, lo, hi)?;
    painter.paint(seq, p, Some(Role::Partition))?;

    if p > lo {
        sort_range(seq, lo, p - 1, painter)?;
    }
    sort_range(seq, p + 1, hi, painter)
}

/// Partitions `lo..=hi` around the element at `hi` and returns its final position.
fn partition<S: Swap + Compare>(seq: &mut S, lo: usize, hi: usize) -> Result<usize, Error> {
    let pivot = seq.get(hi)?;
    let mut i = lo;
    for j in lo..hi {
        let current = seq.get(j)?;
        if seq.less(&current, &pivot) {
            seq.swap(i, j)?;
            i += 1;
        }
    }
    seq.swap(i, hi)?;
    Ok(i)
}
