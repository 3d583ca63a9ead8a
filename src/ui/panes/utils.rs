//! Helpers shared by the scrolling panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus highlight applied
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, min 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `scroll_offset` so the last page stays full
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible: usize) {
    if total_items > visible {
        *scroll_offset = (*scroll_offset).min(total_items - visible);
    } else {
        *scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);

        let mut offset = 2;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_visible_height_accounts_for_borders() {
        assert_eq!(visible_height(Rect::new(0, 0, 10, 12)), 10);
        assert_eq!(visible_height(Rect::new(0, 0, 10, 1)), 1);
    }
}
