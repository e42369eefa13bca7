//! Deliberately inefficient recursive sorts.
//!
//! Both are correct but far slower than any practical sort, which makes them
//! useful for producing long traces from small inputs:
//!
//! - [`slow`]: "multiply and surrender"; super-polynomial comparison count
//! - [`stooge`]: sorts overlapping two-thirds three times; roughly `O(n^2.71)`

use sortscope_core::{Compare, Swap};

use crate::{Error, exchange::out_of_order};

/// Sorts with slowsort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn slow<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    if n > 1 {
        slow_range(seq, 0, n - 1)?;
    }
    Ok(())
}

fn slow_range<S: Swap + Compare>(seq: &mut S, i: usize, j: usize) -> Result<(), Error> {
    if i >= j {
        return Ok(());
    }
    let m = (i + j) / 2;
    slow_range(seq, i, m)?;
    slow_range(seq, m + 1, j)?;
    if out_of_order(seq, m, j)? {
        seq.swap(j, m)?;
    }
    slow_range(seq, i, j - 1)
}

/// Sorts with stooge sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn stooge<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    if n > 0 {
        stooge_range(seq, 0, n - 1)?;
    }
    Ok(())
}

fn stooge_range<S: Swap + Compare>(seq: &mut S, i: usize, j: usize) -> Result<(), Error> {
    if out_of_order(seq, i, j)? {
        seq.swap(i, j)?;
    }
    let len = j - i + 1;
    if len > 2 {
        let t = len / 3;
        stooge_range(seq, i, j - t)?;
        stooge_range(seq, i + t, j)?;
        stooge_range(seq, i, j - t)?;
    }
    Ok(())
}
