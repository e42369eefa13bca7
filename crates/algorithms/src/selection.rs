//! Selection sort.

use sortscope_core::{Compare, Swap};

use crate::{Error, exchange::out_of_order};

/// Sorts by repeatedly swapping the smallest remaining element into place.
///
/// Performs `n(n-1)/2` comparisons and at most `n-1` swaps; a position that
/// already holds its minimum is not swapped.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn selection<S: Swap + Compare>(seq: &mut S) -> Result<(), Error> {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if out_of_order(seq, min, j)? {
                min = j;
            }
        }
        if min != i {
            seq.swap(i, min)?;
        }
    }
    Ok(())
}
