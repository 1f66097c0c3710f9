use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// Rounded panel used for every dashboard section.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
        }
    }

    /// Uses the accent border, for dialogs.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.accent),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.surface_bright))
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    /// Draws the frame and returns the area left for content.
    pub fn render_frame(&self, frame: &mut Frame<'_>, area: Rect) -> Rect {
        let inner = self.inner(area);
        frame.render_widget(self.block(), area);
        inner
    }
}

/// Overview figure: a bold value over a one-line caption.
pub struct StatCard<'a> {
    title: &'a str,
    value: String,
    value_color: Color,
    caption: &'a str,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            title,
            value: value.into(),
            value_color: theme.text,
            caption: "",
            theme,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let inner = Card::new(self.title, self.theme).render_frame(frame, area);

        let lines = vec![
            Line::from(Span::styled(
                self.value.clone(),
                Style::default()
                    .fg(self.value_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.caption,
                Style::default().fg(self.theme.dim),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
