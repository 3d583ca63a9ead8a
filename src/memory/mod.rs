//! Reversible variable model
//!
//! This module provides the state primitive for reversible execution:
//! - [`history`]: the pure value + delta stack with its construction sentinel
//! - [`variable`]: [`ReversibleVariable`], a named integer built on that history
//! - [`snapshot`]: owned inspection records and their one-line rendering
//! - [`errors`]: the [`HistoryError`] returned when there is nothing left to undo
//!
//! # Invariants
//!
//! At every observable instant:
//! ```text
//! value == d0 + d1 + ... + dn      (d0 is the sentinel, always 0)
//! ```
//! `assign` pushes exactly one delta and `unassign` pops exactly one, so an
//! assignment followed by an un-assignment restores both value and history.

pub mod errors;
pub mod history;
pub mod snapshot;
pub mod variable;

pub use errors::HistoryError;
pub use history::{Delta, DeltaHistory, Transition, SENTINEL};
pub use snapshot::VariableSnapshot;
pub use variable::ReversibleVariable;
