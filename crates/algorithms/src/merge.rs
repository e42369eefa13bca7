//! Top-down merge sort with a work area.
//!
//! Each merge reads both runs into a work area (counted reads), then writes
//! the merged result back position by position. Comparisons are made between
//! elements held in the work area; the traced array still attributes them to
//! the positions those elements occupy at comparison time.

use std::iter::Peekable;

use sortscope_core::{Annotate, Compare};

use crate::{
    Error, Role,
    paint::{Painter, Roles},
};

/// Sorts with merge sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn merge<S: Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    sort_range(seq, 0, n, &mut ())
}

/// Sorts with merge sort, marking the two runs of each merge.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn merge_annotated<S>(seq: &mut S) -> Result<(), Error>
where
    S: Compare + Annotate,
    S::Annotation: From<Role>,
{
    let n = seq.len();
    sort_range(seq, 0, n, &mut Roles)?;
    Roles.clear(seq)
}

/// Sorts the half-open range `lo..hi`.
fn sort_range<S, P>(seq: &mut S, lo: usize, hi: usize, painter: &mut P) -> Result<(), Error>
where
    S: Compare,
    P: Painter<S>,
{
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(seq, lo, mid, painter)?;
    sort_range(seq, mid, hi, painter)?;
    merge_runs(seq, lo, mid, hi, painter)
}

fn merge_runs<S, P>(
    seq: &mut S,
    lo: usize,
    mid: usize,
    hi: usize,
    painter: &mut P,
) -> Result<(), Error>
where
    S: Compare,
    P: Painter<S>,
{
    painter.clear(seq)?;
    for position in lo..mid {
        painter.paint(seq, position, Some(Role::MergeLeft))?;
    }
    for position in mid..hi {
        painter.paint(seq, position, Some(Role::MergeRight))?;
    }

    let mut left = read_run(seq, lo, mid)?;
    let mut right = read_run(seq, mid, hi)?;
    let mut k = lo;

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => seq.less_or_equal(l, r),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(item) = next {
            seq.set(k, item)?;
            k += 1;
        }
    }

    for item in left.chain(right) {
        seq.set(k, item)?;
        k += 1;
    }
    Ok(())
}

fn read_run<S: Compare>(
    seq: &mut S,
    from: usize,
    to: usize,
) -> Result<Peekable<std::vec::IntoIter<S::Item>>, Error> {
    let run = (from..to)
        .map(|position| seq.get(position))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(run.into_iter().peekable())
}
