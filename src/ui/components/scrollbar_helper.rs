//! Scrollbar shared by the scrollable lists.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_state(&mut self, total_items: usize, current_position: usize) {
        self.state = self.state.content_length(total_items).position(current_position);
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Splits `rect` into the list area and, when the items overflow, a
    /// one-column scrollbar area inside the right border.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;
        if !Self::needs_scrollbar(total_items, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrollbar_only_when_items_overflow() {
        let rect = Rect::new(0, 0, 40, 10);
        assert_eq!(ScrollbarHelper::calculate_areas(rect, 8), (rect, None));

        let (content, bar) = ScrollbarHelper::calculate_areas(rect, 9);
        assert_eq!(content.width, 39);
        assert_eq!(bar, Some(Rect::new(39, 1, 1, 8)));
    }
}
