//! Delta history pane rendering
//!
//! One row per history entry, oldest first:
//! ```text
//!   #0   sentinel       0  → 0
//!   #1   +5                → 5
//! ▶ #2   -3                → 2
//! ```
//! The newest entry is highlighted.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::memory::VariableSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the delta stack of `snapshot`
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &VariableSnapshot,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" History ", is_focused);
    let running = snapshot.running_values();
    let newest = snapshot.depth() - 1;

    let all_items: Vec<ListItem> = snapshot
        .history
        .iter()
        .zip(running.iter())
        .enumerate()
        .map(|(idx, (delta, value))| {
            let is_newest = idx == newest;
            let marker = if is_newest { "▶ " } else { "  " };
            let delta_text = if idx == 0 {
                "sentinel".to_string()
            } else {
                format!("{:+}", delta)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(
                    format!("#{:<4}", idx),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<14}", delta_text),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled("→ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);

            let style = if is_newest {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let visible = visible_height(area);
    clamp_scroll(scroll_offset, all_items.len(), visible);

    let items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
