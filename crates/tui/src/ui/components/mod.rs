pub mod card;
pub mod charts;
pub mod money;
pub mod toast;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
