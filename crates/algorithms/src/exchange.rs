//! Sorts that only ever exchange two positions.
//!
//! - [`bubble`]: repeated adjacent passes, each settling the largest element
//! - [`cocktail`]: bubble sort alternating direction on every pass
//! - [`gnome`]: walks back after each swap until the prefix is ordered
//! - [`comb`]: bubble sort over a gap that shrinks by a factor of 1.3

use sortscope_core::{Compare, Swap};

use crate::Error;

/// Sorts with bubble sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn bubble<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if out_of_order(seq, j, j + 1)? {
                seq.swap(j, j + 1)?;
            }
        }
    }
    Ok(())
}

/// Sorts with cocktail shaker sort.
///
/// Stops as soon as a full pass in either direction makes no swap.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn cocktail<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    if n < 2 {
        return Ok(());
    }

    loop {
        let mut swapped = false;
        for i in 0..n - 1 {
            if out_of_order(seq, i, i + 1)? {
                seq.swap(i, i + 1)?;
                swapped = true;
            }
        }
        if !swapped {
            return Ok(());
        }

        swapped = false;
        for i in (0..n - 1).rev() {
            if out_of_order(seq, i, i + 1)? {
                seq.swap(i, i + 1)?;
                swapped = true;
            }
        }
        if !swapped {
            return Ok(());
        }
    }
}

/// Sorts with gnome sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn gnome<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    let mut i = 1;
    while i < n {
        if i > 0 && out_of_order(seq, i - 1, i)? {
            seq.swap(i - 1, i)?;
            i -= 1;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Sorts with comb sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn comb<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    let mut gap = n;
    let mut sorted = false;

    while !sorted {
        gap = gap * 10 / 13;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }

        for i in 0..n.saturating_sub(gap) {
            if out_of_order(seq, i, i + gap)? {
                seq.swap(i, i + gap)?;
                sorted = false;
            }
        }
    }
    Ok(())
}

/// Reads positions `a` and `b` and returns whether `seq[a] > seq[b]`.
pub(crate) fn out_of_order<S: Compare>(seq: &mut S, a: usize, b: usize) -> Result<bool, Error> {
    let left = seq.get(a)?;
    let right = seq.get(b)?;
    Ok(seq.greater(&left, &right))
}
