//! TUI pane rendering modules
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! live in [`App`](crate::ui::App) and are passed in by reference.
//!
//! - [`variable`]: name, value, inspection line and the sum that reconstructs it
//! - [`history`]: one row per delta with the value held after it
//! - [`trace`]: debug trace lines recorded by the variable
//! - [`status`]: status bar with keybindings and step position

mod utils;

pub mod history;
pub mod status;
pub mod trace;
pub mod variable;

pub use history::render_history_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
pub use variable::render_variable_pane;
