//! Debug trace pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::trace::TraceLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the trace lines recorded by the variable
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    log: &TraceLog,
    debug_enabled: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Trace ", is_focused);
    let lines = log.lines();

    if lines.is_empty() {
        let placeholder = if debug_enabled {
            "(no trace yet)"
        } else {
            "(tracing off, set RIMP_DEBUG=1)"
        };
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .map(|line| ListItem::new(line).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
