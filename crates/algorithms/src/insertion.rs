//! Shifting sorts: [`insertion`] and its gapped generalization [`shell`].
//!
//! Both lift a key out of the sequence, shift larger elements up with writes,
//! and write the key back into the gap. The traced array moves the key's
//! identity along with the gap, so comparisons against the lifted key are
//! attributed to the right position.

use sortscope_core::Compare;

use crate::Error;

/// Gap sequence used by [`shell`] (Ciura), largest first.
pub const SHELL_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Sorts with insertion sort.
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn insertion<S: Compare>(seq: &mut S) -> Result<(), Error> {
    gapped_insertion(seq, 1)
}

/// Sorts with Shell sort over [`SHELL_GAPS`].
///
/// # Errors
///
/// Returns an error if the sequence rejects an operation.
pub fn shell<S: Compare>(seq: &mut S) -> Result<(), Error> {
    for gap in SHELL_GAPS {
        gapped_insertion(seq, gap)?;
    }
    Ok(())
}

fn gapped_insertion<S: Compare>(seq: &mut S, gap: usize) -> Result<(), Error> {
    for i in gap..seq.len() {
        let key = seq.get(i)?;
        let mut j = i;
        while j >= gap {
            let prev = seq.get(j - gap)?;
            if !seq.greater(&prev, &key) {
                break;
            }
            seq.set(j, prev)?;
            j -= gap;
        }
        seq.set(j, key)?;
    }
    Ok(())
}
