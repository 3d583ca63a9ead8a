// Integration tests for reversible variables

use rimpvar::memory::{HistoryError, ReversibleVariable};
use rimpvar::trace::TraceLog;

#[test]
fn test_assign_unassign_walkthrough() {
    let mut x = ReversibleVariable::new("x", false);
    assert_eq!(x.get(), 0);

    x.assign(5);
    assert_eq!(x.get(), 5);
    assert_eq!(x.history(), vec![0, 5]);

    x.assign(2);
    assert_eq!(x.get(), 2);
    assert_eq!(x.history(), vec![0, 5, -3]);

    x.unassign().expect("undo assign(2)");
    assert_eq!(x.get(), 5);
    assert_eq!(x.history(), vec![0, 5]);

    x.unassign().expect("undo assign(5)");
    assert_eq!(x.get(), 0);
    assert_eq!(x.history(), vec![0]);

    let result = x.unassign();
    assert_eq!(
        result,
        Err(HistoryError::Underflow {
            name: "x".to_string()
        })
    );
    assert_eq!(x.get(), 0);
    assert_eq!(x.history(), vec![0]);
}

#[test]
fn test_negative_assignment() {
    let mut y = ReversibleVariable::new("y", false);
    y.assign(-10);
    assert_eq!(y.get(), -10);
    assert_eq!(y.history(), vec![0, -10]);

    y.unassign().expect("undo assign(-10)");
    assert_eq!(y.get(), 0);
}

#[test]
fn test_inspect_line() {
    let mut x = ReversibleVariable::new("x", false);
    x.assign(5);
    x.assign(2);

    let snapshot = x.inspect();
    assert_eq!(snapshot.to_string(), "x: 2\t [0 5 -3 ]");
    assert_eq!(snapshot.sum_expression(), "0 + 5 + -3");

    // Inspection does not mutate
    assert_eq!(x.depth(), 3);
    assert_eq!(x.get(), 2);
}

#[test]
fn test_inspect_fresh_variable() {
    let x = ReversibleVariable::new("counter", false);
    assert_eq!(x.inspect().to_string(), "counter: 0\t [0 ]");
}

#[test]
fn test_underflow_error_message() {
    let mut x = ReversibleVariable::new("x", false);
    let err = x.unassign().unwrap_err();
    assert_eq!(
        err.to_string(),
        "history underflow: 'x' has no assignment left to undo"
    );
}

#[test]
fn test_interleaved_forward_and_backward() {
    let mut x = ReversibleVariable::new("x", false);
    x.assign(1);
    x.assign(10);
    x.unassign().unwrap();
    x.assign(100);
    assert_eq!(x.history(), vec![0, 1, 99]);
    x.unassign().unwrap();
    x.unassign().unwrap();
    assert_eq!(x.get(), 0);
    assert!(!x.can_unassign());
}

#[test]
fn test_trace_reports_name_value_and_depth() {
    let mut x = ReversibleVariable::with_sink("x", true, TraceLog::new());
    x.assign(-4);
    x.unassign().unwrap();

    let lines = x.sink().lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "created x");
    assert!(lines[1].contains("-4") && lines[1].contains("size 2"));
    assert!(lines[2].contains("to 0") && lines[2].contains("size 1"));
}
