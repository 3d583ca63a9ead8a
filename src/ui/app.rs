//! Main TUI application state and logic

use crate::memory::ReversibleVariable;
use crate::trace::TraceLog;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    History,
    Trace,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::History => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::History,
        }
    }
}

/// The main application state
pub struct App {
    /// The variable being stepped
    pub variable: ReversibleVariable<TraceLog>,

    /// Values assigned by forward steps, in order
    pub targets: Vec<i32>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub history_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app stepping `variable` through `targets`
    pub fn new(variable: ReversibleVariable<TraceLog>, targets: Vec<i32>) -> Self {
        App {
            variable,
            targets,
            focused_pane: FocusedPane::History,
            history_scroll: 0,
            trace_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Index of the current step (0 = freshly constructed)
    pub fn position(&self) -> usize {
        self.variable.depth() - 1
    }

    /// Number of positions, the construction step included
    pub fn total_steps(&self) -> usize {
        self.targets.len() + 1
    }

    /// Target the next forward step would assign
    pub fn next_target(&self) -> Option<i32> {
        self.targets.get(self.position()).copied()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.try_step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Variable (top) | History (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        let snapshot = self.variable.inspect();

        super::panes::render_variable_pane(frame, left_rows[0], &snapshot, self.next_target());

        super::panes::render_history_pane(
            frame,
            left_rows[1],
            &snapshot,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            columns[1],
            self.variable.sink(),
            self.variable.debug_enabled(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.position(),
            self.total_steps(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.try_step_forward() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                while self.try_step_forward() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let undone = self.variable.rewind();
                self.trace_scroll = usize::MAX;
                self.status_message = format!("Jumped to start ({} undone)", undone);
            }
            _ => {}
        }
    }

    /// Assign the next scripted target; false at the end of the script
    pub fn try_step_forward(&mut self) -> bool {
        match self.next_target() {
            Some(value) => {
                self.variable.assign(value);
                self.trace_scroll = usize::MAX;
                true
            }
            None => false,
        }
    }

    /// Step forward in execution
    pub fn step_forward(&mut self) {
        match self.next_target() {
            Some(value) => {
                self.try_step_forward();
                self.status_message = format!("Assigned {} := {}", self.variable.name(), value);
            }
            None => {
                self.status_message = "Cannot step forward: end of script".to_string();
            }
        }
    }

    /// Step backward in execution
    pub fn step_backward(&mut self) {
        match self.variable.unassign() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
        self.trace_scroll = usize::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(targets: Vec<i32>) -> App {
        App::new(
            ReversibleVariable::with_sink("x", true, TraceLog::new()),
            targets,
        )
    }

    #[test]
    fn test_forward_steps_follow_script() {
        let mut app = app(vec![5, 2]);
        assert_eq!(app.next_target(), Some(5));

        app.step_forward();
        app.step_forward();
        assert_eq!(app.variable.history(), vec![0, 5, -3]);
        assert_eq!(app.position(), 2);
        assert_eq!(app.next_target(), None);

        app.step_forward();
        assert_eq!(app.status_message, "Cannot step forward: end of script");
        assert_eq!(app.variable.depth(), 3);
    }

    #[test]
    fn test_backward_then_forward_replays_same_target() {
        let mut app = app(vec![5, 2]);
        app.step_forward();
        app.step_forward();
        app.step_backward();
        assert_eq!(app.next_target(), Some(2));
        app.step_forward();
        assert_eq!(app.variable.inspect().to_string(), "x: 2\t [0 5 -3 ]");
    }

    #[test]
    fn test_backward_at_start_reports_underflow() {
        let mut app = app(vec![1]);
        app.step_backward();
        assert!(app.status_message.starts_with("Cannot step backward: history underflow"));
        assert_eq!(app.variable.depth(), 1);
    }

    #[test]
    fn test_jump_keys() {
        let mut app = app(vec![1, 2, 3]);
        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.position(), 3);
        assert_eq!(app.variable.get(), 3);

        app.handle_key_event(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.position(), 0);
        assert_eq!(app.status_message, "Jumped to start (3 undone)");

        app.handle_key_event(KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(app.variable.get(), 2);
        assert_eq!(app.total_steps(), 4);
    }
}
