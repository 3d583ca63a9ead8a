//! Variable summary pane rendering

use crate::memory::VariableSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render name, value, the `inspect` line and the next scripted target
pub fn render_variable_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &VariableSnapshot,
    next_target: Option<i32>,
) {
    let block = Block::default()
        .title(" Variable ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);

    let next = match next_target {
        Some(value) => Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        None => Span::styled("(end of script)", label),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                snapshot.name.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" = ", label),
            Span::styled(
                snapshot.value.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.number)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("inspect  ", label),
            // Tabs do not render in ratatui cells
            Span::styled(
                snapshot.to_string().replace('\t', "  "),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("sum      ", label),
            Span::styled(
                format!("{} = {}", snapshot.sum_expression(), snapshot.value),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("depth    ", label),
            Span::styled(snapshot.depth().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::from(vec![Span::styled("next     ", label), next]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
