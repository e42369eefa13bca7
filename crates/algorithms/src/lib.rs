//! Sorting algorithms for sortscope.
//!
//! Every algorithm is a free function generic over the capability traits in
//! [`sortscope_core`]. Algorithms only read, write, swap, compare, and
//! (optionally) annotate through those traits, so running one against a
//! [`TracedArray`] produces a complete trace without any algorithm knowing
//! about recording.
//!
//! # Algorithms
//!
//! | Module          | Functions                                  | Needs          |
//! |-----------------|--------------------------------------------|----------------|
//! | [`exchange`]    | `bubble`, `cocktail`, `gnome`, `comb`      | swap, compare  |
//! | [`selection`]   | `selection`                                | swap, compare  |
//! | [`insertion`]   | `insertion`, `shell`                       | compare        |
//! | [`quick`]       | `quick`, `quick_annotated`                 | swap, compare  |
//! | [`heap`]        | `heap`, `heap_annotated`                   | swap, compare  |
//! | [`merge`]       | `merge`, `merge_annotated`                 | compare        |
//! | [`radix`]       | `radix`, `radix_annotated`                 | [`RadixKey`] payloads |
//! | [`pathological`]| `slow`, `stooge`                           | swap, compare  |
//!
//! The `_annotated` variants additionally mark positions with a [`Role`],
//! which requires `Annotate::Annotation: From<Role>`.
//!
//! [`TracedArray`]: sortscope_core::TracedArray

mod algorithm;
mod error;
mod paint;
mod role;

#[cfg(test)]
mod test_utils;

pub mod exchange;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod pathological;
pub mod quick;
pub mod radix;
pub mod selection;

pub use algorithm::{Algorithm, ParseAlgorithmError, sort, sort_by_comparison};
pub use error::Error;
pub use radix::RadixKey;
pub use role::Role;
