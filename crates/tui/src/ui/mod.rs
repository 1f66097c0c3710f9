pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and subtitle
            Constraint::Min(0),    // Dashboard
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    screens::dashboard::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);

    match &state.mode {
        Mode::Dashboard => {}
        Mode::Form(form) => screens::entry_form::render(frame, area, form, &theme),
        Mode::QuickAdd(quick) => screens::quick_add::render(frame, area, quick, &theme),
    }
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Student Finance Manager",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", state.currency().code()),
                Style::default().fg(theme.dim),
            ),
        ]),
        Line::from(Span::styled(
            "Track your income, expenses and budgets",
            Style::default().fg(theme.text_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let sep = || Span::styled("  │  ", Style::default().fg(theme.border));

    let parts = match state.mode {
        Mode::Dashboard => vec![
            key("a"),
            Span::raw(" add"),
            sep(),
            key("+"),
            Span::raw(" quick add"),
            sep(),
            key("q"),
            Span::raw(" quit"),
        ],
        Mode::Form(_) => vec![
            key("Tab"),
            Span::raw(" next field"),
            sep(),
            key("Enter"),
            Span::raw(" save"),
            sep(),
            key("Esc"),
            Span::raw(" discard"),
        ],
        Mode::QuickAdd(_) => vec![
            key("Enter"),
            Span::raw(" add"),
            sep(),
            key("Esc"),
            Span::raw(" cancel"),
        ],
    };

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
