//! Reversible integer variable
//!
//! A [`ReversibleVariable`] pairs a name with a [`DeltaHistory`]. Forward
//! execution calls [`assign`](ReversibleVariable::assign); backward execution
//! calls [`unassign`](ReversibleVariable::unassign), which is the exact inverse
//! of the most recent assignment.
//!
//! Debug tracing is opt-in per variable. When enabled, each operation is
//! reported to the variable's [`EventSink`] after the state transition has
//! completed.

use super::errors::HistoryError;
use super::history::{Delta, DeltaHistory};
use super::snapshot::VariableSnapshot;
use crate::trace::{EventSink, TracingSink, VariableEvent};
use std::fmt;

/// Named integer with an invertible assignment history
#[derive(Debug, Clone)]
pub struct ReversibleVariable<S: EventSink = TracingSink> {
    name: String,
    history: DeltaHistory,
    debug: bool,
    sink: S,
}

impl ReversibleVariable {
    /// Create a variable that traces through `tracing` when `debug` is set
    pub fn new(name: impl Into<String>, debug: bool) -> Self {
        Self::with_sink(name, debug, TracingSink)
    }
}

impl<S: EventSink> ReversibleVariable<S> {
    /// Create a variable reporting to a custom sink
    pub fn with_sink(name: impl Into<String>, debug: bool, sink: S) -> Self {
        let variable = ReversibleVariable {
            name: name.into(),
            history: DeltaHistory::new(),
            debug,
            sink,
        };
        variable.emit(VariableEvent::Created {
            name: &variable.name,
        });
        variable
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Current value
    pub fn get(&self) -> i32 {
        let value = self.history.value();
        self.emit(VariableEvent::Read {
            name: &self.name,
            value,
        });
        value
    }

    /// Move to `value`, recording the delta needed to come back
    pub fn assign(&mut self, value: i32) {
        let transition = self.history.push(value);
        self.emit(VariableEvent::Assigned {
            name: &self.name,
            value: transition.value,
            depth: transition.depth,
        });
    }

    /// Undo the most recent assignment.
    ///
    /// Fails with [`HistoryError::Underflow`] once only the construction
    /// sentinel remains; the variable is left untouched in that case.
    pub fn unassign(&mut self) -> Result<(), HistoryError> {
        match self.history.pop() {
            Some(transition) => {
                self.emit(VariableEvent::Unassigned {
                    name: &self.name,
                    value: transition.value,
                    depth: transition.depth,
                });
                Ok(())
            }
            None => {
                self.emit(VariableEvent::UnassignFailed { name: &self.name });
                Err(HistoryError::Underflow {
                    name: self.name.clone(),
                })
            }
        }
    }

    /// Undo every assignment; returns how many were undone
    pub fn rewind(&mut self) -> usize {
        let mut undone = 0;
        while self.history.can_pop() && self.unassign().is_ok() {
            undone += 1;
        }
        undone
    }

    /// History length, sentinel included
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_unassign(&self) -> bool {
        self.history.can_pop()
    }

    /// Copy of the delta history in push order, sentinel first
    pub fn history(&self) -> Vec<Delta> {
        self.history.to_vec()
    }

    /// Snapshot of name, value and history for display
    pub fn inspect(&self) -> VariableSnapshot {
        VariableSnapshot {
            name: self.name.clone(),
            value: self.history.value(),
            history: self.history.to_vec(),
        }
    }

    fn emit(&self, event: VariableEvent<'_>) {
        if self.debug {
            self.sink.record(&event);
        }
    }
}

impl<S: EventSink> fmt::Display for ReversibleVariable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
