//! Read-only inspection of a variable
//!
//! A [`VariableSnapshot`] is an owned copy of everything observable about a
//! variable at one instant. Rendering it never touches the variable itself.

use super::history::Delta;
use std::fmt;

/// Owned view of a variable's name, value and history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSnapshot {
    pub name: String,
    pub value: i32,
    pub history: Vec<Delta>, // Push order, sentinel first
}

impl VariableSnapshot {
    /// History length, sentinel included
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Render the history as the sum that reconstructs the value
    ///
    /// ```text
    /// 0 + 5 + -3
    /// ```
    pub fn sum_expression(&self) -> String {
        self.history
            .iter()
            .map(|delta| delta.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Value held after each entry of the history, oldest first
    pub fn running_values(&self) -> Vec<i64> {
        self.history
            .iter()
            .scan(0i64, |acc, delta| {
                *acc += delta;
                Some(*acc)
            })
            .collect()
    }
}

/// `<name>: <value>\t [<d1> <d2> ... <dn> ]`
impl fmt::Display for VariableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}\t [", self.name, self.value)?;
        for delta in &self.history {
            write!(f, "{} ", delta)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(history: Vec<Delta>) -> VariableSnapshot {
        let value = history.iter().sum::<i64>() as i32;
        VariableSnapshot {
            name: "x".to_string(),
            value,
            history,
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(snapshot(vec![0, 5, -3]).to_string(), "x: 2\t [0 5 -3 ]");
        assert_eq!(snapshot(vec![0]).to_string(), "x: 0\t [0 ]");
    }

    #[test]
    fn test_sum_expression() {
        assert_eq!(snapshot(vec![0, 5, -3]).sum_expression(), "0 + 5 + -3");
        assert_eq!(snapshot(vec![0]).sum_expression(), "0");
    }

    #[test]
    fn test_running_values() {
        let snap = snapshot(vec![0, 5, -3, 10]);
        assert_eq!(snap.running_values(), vec![0, 5, 2, 12]);
        assert_eq!(snap.depth(), 4);
    }
}
