//! Delta history for a reversible variable
//!
//! [`DeltaHistory`] is the pure state core: the current value plus the stack of
//! signed deltas that produced it. It performs no I/O and knows nothing about
//! names or tracing; each mutation hands back a [`Transition`] describing what
//! happened so an observer can report it.
//!
//! # Sentinel
//!
//! The construction step is recorded as a delta of [`SENTINEL`]. It is held
//! apart from the undoable deltas, so the history can never become empty and a
//! pop past the sentinel is simply refused.
//!
//! # Delta width
//!
//! Values are `i32`, deltas are `i64`. The difference of any two `i32` values
//! fits in an `i64`, so `value == sum(history)` holds exactly, with no wrapping.

/// Signed change applied by a single assignment
pub type Delta = i64;

/// Delta recorded for the construction step
pub const SENTINEL: Delta = 0;

/// Result of a successful push or pop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Delta that was pushed or popped
    pub delta: Delta,
    /// Value after the transition
    pub value: i32,
    /// History length after the transition, sentinel included
    pub depth: usize,
}

/// Current value plus the deltas that reconstruct it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeltaHistory {
    value: i32,
    deltas: Vec<Delta>, // Undoable deltas only; the sentinel is implicit
}

impl DeltaHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Number of entries, sentinel included (always >= 1)
    pub fn len(&self) -> usize {
        self.deltas.len() + 1
    }

    /// Always false; present so `len` has its usual companion
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when at least one assignment can be undone
    pub fn can_pop(&self) -> bool {
        !self.deltas.is_empty()
    }

    /// Most recent delta (the sentinel when nothing has been assigned)
    pub fn top(&self) -> Delta {
        self.deltas.last().copied().unwrap_or(SENTINEL)
    }

    /// Deltas in push order, sentinel first
    pub fn iter(&self) -> impl Iterator<Item = Delta> + '_ {
        std::iter::once(SENTINEL).chain(self.deltas.iter().copied())
    }

    /// Owned copy of the full delta sequence
    pub fn to_vec(&self) -> Vec<Delta> {
        self.iter().collect()
    }

    /// Sum of every recorded delta; equals `value` at all times
    pub fn sum(&self) -> i64 {
        self.iter().sum()
    }

    /// Record `new_value - value` and move to `new_value`
    pub fn push(&mut self, new_value: i32) -> Transition {
        let delta = i64::from(new_value) - i64::from(self.value);
        self.deltas.push(delta);
        self.value = new_value;

        Transition {
            delta,
            value: self.value,
            depth: self.len(),
        }
    }

    /// Undo the most recent delta, or return `None` if only the sentinel is left.
    ///
    /// State is untouched when `None` is returned.
    pub fn pop(&mut self) -> Option<Transition> {
        let delta = self.deltas.pop()?;
        // Every partial sum of the history is a value the variable once held,
        // so the result is always within i32 range.
        self.value = (i64::from(self.value) - delta) as i32;

        Some(Transition {
            delta,
            value: self.value,
            depth: self.len(),
        })
    }

    /// Value the next `pop` would restore, if any
    pub fn peek_restore(&self) -> Option<i32> {
        self.deltas
            .last()
            .map(|delta| (i64::from(self.value) - delta) as i32)
    }
}
