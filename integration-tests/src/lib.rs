//! Shared fixtures for the cross-crate tests in `tests/`.

use proptest::prelude::*;
use sortscope_algorithms::Algorithm;

/// Shuffled permutations of `1..=k` for `k` in `0..=max_len`.
pub fn permutations(max_len: u32) -> impl Strategy<Value = Vec<u32>> {
    (0..=max_len).prop_flat_map(|k| Just((1..=k).collect::<Vec<_>>()).prop_shuffle())
}

/// Any algorithm from [`Algorithm::ALL`].
pub fn algorithms() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}
