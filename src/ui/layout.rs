//! Screen geometry.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas shared by every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Navbar on the first line, status bar on the last, content in between
    #[must_use]
    pub fn main_layout(area: Rect) -> MainLayout {
        let [navbar, content, status] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).areas(area);
        MainLayout { navbar, content, status }
    }

    /// `percent_x` by `percent_y` of `area`, centered.
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
    }

    /// Centered box of `percent_x` width and a fixed number of lines,
    /// clamped to `area`.
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Length(height_lines))
    }

    fn center(area: Rect, width: Constraint, height: Constraint) -> Rect {
        let [row] = Layout::vertical([height]).flex(Flex::Center).areas(area);
        let [cell] = Layout::horizontal([width]).flex(Flex::Center).areas(row);
        cell
    }
}
