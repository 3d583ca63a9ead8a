//! Diagnostic events emitted by reversible variables
//!
//! Variables never print. When debugging is enabled they describe each
//! operation as a [`VariableEvent`] and hand it to an [`EventSink`]:
//!
//! - [`TracingSink`]: forwards events to [`tracing`] under the `rimpvar` target
//! - [`TraceLog`]: keeps the rendered lines in memory (used by the TUI, and handy in tests)

use std::cell::RefCell;
use std::fmt;

/// One observable operation on a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableEvent<'a> {
    Created {
        name: &'a str,
    },
    Assigned {
        name: &'a str,
        value: i32,
        depth: usize,
    },
    Unassigned {
        name: &'a str,
        value: i32,
        depth: usize,
    },
    UnassignFailed {
        name: &'a str,
    },
    Read {
        name: &'a str,
        value: i32,
    },
}

impl VariableEvent<'_> {
    pub fn name(&self) -> &str {
        match self {
            VariableEvent::Created { name }
            | VariableEvent::Assigned { name, .. }
            | VariableEvent::Unassigned { name, .. }
            | VariableEvent::UnassignFailed { name }
            | VariableEvent::Read { name, .. } => name,
        }
    }
}

impl fmt::Display for VariableEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableEvent::Created { name } => write!(f, "created {}", name),
            VariableEvent::Assigned { name, value, depth } => {
                write!(f, "assigned {} to {} (history size {})", name, value, depth)
            }
            VariableEvent::Unassigned { name, value, depth } => {
                write!(
                    f,
                    "unassigned {} to {} (history size {})",
                    name, value, depth
                )
            }
            VariableEvent::UnassignFailed { name } => {
                write!(f, "unassigning {} failed: history is empty", name)
            }
            VariableEvent::Read { name, value } => write!(f, "read {}: {}", name, value),
        }
    }
}

/// Receiver for variable events
pub trait EventSink {
    fn record(&self, event: &VariableEvent<'_>);
}

/// Sink that forwards every event to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &VariableEvent<'_>) {
        match *event {
            VariableEvent::Created { name } => {
                tracing::debug!(target: "rimpvar", variable = name, "created");
            }
            VariableEvent::Assigned { name, value, depth } => {
                tracing::debug!(target: "rimpvar", variable = name, value, depth, "assigned");
            }
            VariableEvent::Unassigned { name, value, depth } => {
                tracing::debug!(target: "rimpvar", variable = name, value, depth, "unassigned");
            }
            VariableEvent::UnassignFailed { name } => {
                tracing::warn!(target: "rimpvar", variable = name, "unassign failed: history is empty");
            }
            VariableEvent::Read { name, value } => {
                tracing::debug!(target: "rimpvar", variable = name, value, "read");
            }
        }
    }
}

/// In-memory record of rendered event lines
#[derive(Debug, Default)]
pub struct TraceLog {
    lines: RefCell<Vec<String>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded line, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl EventSink for TraceLog {
    fn record(&self, event: &VariableEvent<'_>) {
        self.lines.borrow_mut().push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines_report_values_and_depth() {
        let assigned = VariableEvent::Assigned {
            name: "x",
            value: 5,
            depth: 2,
        };
        assert_eq!(assigned.to_string(), "assigned x to 5 (history size 2)");
        assert_eq!(assigned.name(), "x");

        let failed = VariableEvent::UnassignFailed { name: "y" };
        assert_eq!(failed.to_string(), "unassigning y failed: history is empty");
    }

    #[test]
    fn test_trace_log_records_in_order() {
        let log = TraceLog::new();
        assert!(log.is_empty());

        log.record(&VariableEvent::Created { name: "x" });
        log.record(&VariableEvent::Read { name: "x", value: 0 });

        assert_eq!(log.lines(), vec!["created x", "read x: 0"]);
        log.clear();
        assert_eq!(log.len(), 0);
    }
}
