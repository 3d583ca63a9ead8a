//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI steps one variable forward and backward through a scripted list of
//! target values:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]**: stateless render functions (variable, history, trace, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] with a variable recording into a
//! [`TraceLog`](crate::trace::TraceLog) and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
