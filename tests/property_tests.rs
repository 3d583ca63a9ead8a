// Property tests for the assign/unassign laws

use proptest::prelude::*;
use rimpvar::memory::{HistoryError, ReversibleVariable};

#[derive(Debug, Clone)]
enum Op {
    Assign(i32),
    Unassign,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Assign),
        1 => Just(Op::Unassign),
    ]
}

fn assert_sum_invariant(x: &ReversibleVariable) {
    assert_eq!(x.history().iter().sum::<i64>(), i64::from(x.get()));
}

proptest! {
    #[test]
    fn assign_then_unassign_is_identity(prefix in prop::collection::vec(any::<i32>(), 0..16), target in any::<i32>()) {
        let mut x = ReversibleVariable::new("x", false);
        for v in &prefix {
            x.assign(*v);
        }
        let value_before = x.get();
        let history_before = x.history();

        x.assign(target);
        x.unassign().unwrap();

        prop_assert_eq!(x.get(), value_before);
        prop_assert_eq!(x.history(), history_before);
    }

    #[test]
    fn value_equals_sum_of_history(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut x = ReversibleVariable::new("x", false);
        for v in &values {
            x.assign(*v);
            assert_sum_invariant(&x);
        }
        if let Some(last) = values.last() {
            prop_assert_eq!(x.get(), *last);
        }
    }

    #[test]
    fn depth_tracks_successful_operations(ops in prop::collection::vec(op(), 0..64)) {
        let mut x = ReversibleVariable::new("x", false);
        prop_assert_eq!(x.depth(), 1);

        for op in ops {
            let depth_before = x.depth();
            match op {
                Op::Assign(v) => {
                    x.assign(v);
                    prop_assert_eq!(x.depth(), depth_before + 1);
                }
                Op::Unassign => match x.unassign() {
                    Ok(()) => prop_assert_eq!(x.depth(), depth_before - 1),
                    Err(_) => prop_assert_eq!(depth_before, 1),
                },
            }
            prop_assert!(x.depth() >= 1);
            assert_sum_invariant(&x);
        }
    }

    #[test]
    fn unassign_restores_values_in_reverse(values in prop::collection::vec(any::<i32>(), 1..32)) {
        let mut x = ReversibleVariable::new("x", false);
        for v in &values {
            x.assign(*v);
        }
        for expected in values.iter().rev().skip(1) {
            x.unassign().unwrap();
            prop_assert_eq!(x.get(), *expected);
        }
        x.unassign().unwrap();
        prop_assert_eq!(x.get(), 0);
    }

    #[test]
    fn underflow_leaves_state_unchanged(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let mut x = ReversibleVariable::new("x", false);
        for v in &values {
            x.assign(*v);
        }
        prop_assert_eq!(x.rewind(), values.len());

        let err = x.unassign().unwrap_err();
        prop_assert_eq!(err, HistoryError::Underflow { name: "x".to_string() });
        prop_assert_eq!(x.get(), 0);
        prop_assert_eq!(x.history(), vec![0]);
    }
}
