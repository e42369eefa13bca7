//! JSON export of recorded snapshots.
//!
//! Snapshots serialize with the field names and action tags that external
//! renderers read:
//!
//! ```json
//! {"values":[2,1],"accesses":0,"comparisons":1,"swaps":0,"annotations":null,
//!  "action":{"kind":"compare","positionA":0,"positionB":1},
//!  "permutation":[0,1],"elapsed":0.000012}
//! ```

use std::io::{self, Write};

use serde::Serialize;
use sortscope_core::Snapshot;
use tracing::debug;

/// Serializes snapshots as a compact JSON array.
///
/// # Errors
///
/// Returns an error if a payload or annotation fails to serialize.
pub fn to_json<T, A>(snapshots: &[Snapshot<T, A>]) -> serde_json::Result<String>
where
    T: Serialize,
    A: Serialize,
{
    serde_json::to_string(snapshots)
}

/// Serializes snapshots as an indented JSON array.
///
/// # Errors
///
/// Returns an error if a payload or annotation fails to serialize.
pub fn to_json_pretty<T, A>(snapshots: &[Snapshot<T, A>]) -> serde_json::Result<String>
where
    T: Serialize,
    A: Serialize,
{
    serde_json::to_string_pretty(snapshots)
}

/// Writes one JSON object per snapshot, each on its own line.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_json_lines<T, A, W>(snapshots: &[Snapshot<T, A>], mut writer: W) -> io::Result<()>
where
    T: Serialize,
    A: Serialize,
    W: Write,
{
    for snapshot in snapshots {
        serde_json::to_writer(&mut writer, snapshot)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    debug!(snapshots = snapshots.len(), "wrote json lines");
    Ok(())
}
