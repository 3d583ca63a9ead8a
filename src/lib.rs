//! # Introduction
//!
//! rimpvar provides the state primitive of a reversible imperative runtime: a
//! named integer that can be assigned (forward execution) and un-assigned
//! (backward execution) without losing information. Every assignment records
//! the signed delta it applied, so undoing it is exact.
//!
//! ## Layout
//!
//! ```text
//! config → ReversibleVariable ─ DeltaHistory
//!                 │
//!                 └─ EventSink (TracingSink | TraceLog) → trace lines
//! ```
//!
//! 1. [`memory`]: the [`DeltaHistory`](memory::DeltaHistory) core and the
//!    [`ReversibleVariable`](memory::ReversibleVariable) built on it.
//! 2. [`trace`]: structured events describing each operation and the sinks
//!    that observe them.
//! 3. [`config`]: resolution of the `RIMP_DEBUG` switch at the process boundary.
//! 4. [`cli`]: argument parsing for the `rimpvar` binary.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use rimpvar::memory::ReversibleVariable;
//!
//! let mut x = ReversibleVariable::new("x", false);
//! x.assign(5);
//! x.assign(2);
//! assert_eq!(x.inspect().to_string(), "x: 2\t [0 5 -3 ]");
//!
//! x.unassign().unwrap();
//! assert_eq!(x.get(), 5);
//! ```

pub mod cli;
pub mod config;
pub mod memory;
pub mod trace;
pub mod ui;
