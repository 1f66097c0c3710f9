use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::QuickAddState,
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

const EXAMPLE: &str = "e.g. -4.50 Coffee #food  or  +320 Part-time job";

pub fn render(frame: &mut Frame<'_>, area: Rect, quick: &QuickAddState, theme: &Theme) {
    let card_area = centered_box(60, 6, area);
    frame.render_widget(Clear, card_area);
    let inner = Card::new("Quick Add", theme)
        .focused(true)
        .render_frame(frame, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{}│", quick.input),
                Style::default().fg(theme.text),
            ),
        ])),
        rows[0],
    );

    let status = match &quick.error {
        Some(message) => Span::styled(message.as_str(), Style::default().fg(theme.error)),
        None => Span::styled(EXAMPLE, Style::default().fg(theme.dim)),
    };
    frame.render_widget(Paragraph::new(status), rows[2]);
}
