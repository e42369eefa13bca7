//! Consumers for sortscope traces.
//!
//! A [`Trace`] is plain data, so consumers only need read access to its
//! snapshots. Every function here takes a slice of snapshots, which lets the
//! same code work on a [`Trace`] from a live array and on snapshots loaded
//! back from JSON.
//!
//! # Modules
//!
//! - [`check`]: validates a finished trace ([`check_trace`], [`Violation`])
//! - [`stats`]: aggregate counts for a run ([`TraceStats`])
//! - [`frame`]: per-position marks for renderers ([`Frame`], [`Mark`])
//! - [`export`]: JSON output ([`to_json`], [`to_json_pretty`], [`write_json_lines`])
//!
//! [`Trace`]: sortscope_core::Trace
//! [`check_trace`]: check::check_trace
//! [`Violation`]: check::Violation
//! [`TraceStats`]: stats::TraceStats
//! [`Frame`]: frame::Frame
//! [`Mark`]: frame::Mark
//! [`to_json`]: export::to_json
//! [`to_json_pretty`]: export::to_json_pretty
//! [`write_json_lines`]: export::write_json_lines

pub mod check;
pub mod export;
pub mod frame;
pub mod stats;
