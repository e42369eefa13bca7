//! Heapsort over an implicit binary max-heap.
//!
//! [`heap_annotated`] marks every position still inside the heap with its
//! [`Role::HeapLevel`], repainting after each extraction so the heap visibly
//! shrinks level by level while the sorted tail is left unmarked.

use sortscope_core::{Annotate, Compare, Swap};

use crate::{
    Error, Role,
    paint::{Painter, Roles},
};

/// Sorts with heapsort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn heap<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    heapsort(seq, &mut ())
}

/// Sorts with heapsort, annotating heap levels.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn heap_annotated<S>(seq: &mut S) -> Result<(), Error>
where
    S: Swap + Compare + Annotate,
    S::Annotation: From<Role>,
{
    heapsort(seq, &mut Roles)
}

fn heapsort<S, P>(seq: &mut S, painter: &mut P) -> Result<(), Error>
where
    S: Swap + Compare,
    P: Painter<S>,
{
    let n = seq.len();
    paint_levels(seq, n, painter)?;

    for start in (0..n / 2).rev() {
        sift_down(seq, start, n)?;
    }

    for end in (1..n).rev() {
        seq.swap(0, end)?;
        paint_levels(seq, end, painter)?;
        sift_down(seq, 0, end)?;
    }
    Ok(())
}

/// Restores the heap property for the subtree at `root` within `0..end`.
fn sift_down<S: Swap + Compare>(seq: &mut S, mut root: usize, end: usize) -> Result<(), Error> {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return Ok(());
        }

        let mut child = left;
        if left + 1 < end {
            let a = seq.get(left)?;
            let b = seq.get(left + 1)?;
            if seq.less(&a, &b) {
                child = left + 1;
            }
        }

        let parent = seq.get(root)?;
        let larger = seq.get(child)?;
        if !seq.less(&parent, &larger) {
            return Ok(());
        }
        seq.swap(root, child)?;
        root = child;
    }
}

fn paint_levels<S, P>(seq: &mut S, heap_len: usize, painter: &mut P) -> Result<(), Error>
where
    S: Swap + Compare,
    P: Painter<S>,
{
    painter.clear(seq)?;
    for position in 0..heap_len {
        painter.paint(seq, position, Some(Role::HeapLevel(level(position))))?;
    }
    Ok(())
}

/// Depth of `position` in a binary heap rooted at 0.
fn level(position: usize) -> u32 {
    (position + 1).ilog2()
}
