//! Core traits and types for sortscope.
//!
//! This crate defines the instrumented container that sorting algorithms run
//! against, and the trace it records:
//!
//! - [`TracedArray`]: an array that counts and records every read, write,
//!   swap, and comparison performed through it
//! - [`Tracked`]: an element carrying a stable [`Identity`] so it can be
//!   followed as it moves
//! - [`Snapshot`] and [`Trace`]: the immutable, ordered record of a run
//! - [`Sequence`], [`Swap`], [`Compare`], [`Annotate`]: the capability traits
//!   algorithms are written against
//!
//! # Features
//!
//! - `serde` (default): derives `Serialize` and `Deserialize` for the trace
//!   types so consumers can export them.

mod action;
mod array;
mod capability;
mod config;
mod element;
mod error;
mod snapshot;
mod trace;

pub use action::{Action, ActionKind};
pub use array::{Phase, TracedArray};
pub use capability::{Annotate, Compare, Sequence, Swap};
pub use config::Config;
pub use element::{Identity, Tracked};
pub use error::{Error, Result};
pub use snapshot::{Counters, Snapshot};
pub use trace::Trace;
