use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    form::{EntryForm, FormField},
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, form: &EntryForm, theme: &Theme) {
    let fields = FormField::fields();
    // Field rows, a blank line, the error line and the hint line, plus borders.
    let box_height = fields.len() as u16 + 5;
    let card_area = centered_box(56, box_height, area);

    frame.render_widget(Clear, card_area);
    let inner = Card::new("Add Transaction", theme)
        .focused(true)
        .render_frame(frame, card_area);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(1)).collect();
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        render_field(frame, rows[i], form, *field, theme);
    }

    if let Some(message) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            ))
            .alignment(Alignment::Center),
            rows[fields.len() + 1],
        );
    }

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next  "),
        Span::styled("←/→", Style::default().fg(theme.accent)),
        Span::raw(" change  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        rows[fields.len() + 2],
    );
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &EntryForm,
    field: FormField,
    theme: &Theme,
) {
    let focused = form.focus == field;
    let value = form.value(field);

    let display = match field {
        FormField::Kind | FormField::Category => {
            let shown = if value.is_empty() {
                "select...".to_string()
            } else {
                value
            };
            if focused {
                format!("‹ {shown} ›")
            } else {
                shown
            }
        }
        _ if focused => format!("{value}│"),
        _ => value,
    };

    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let value_style = if focused {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.dim)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<12}", field.label()), label_style),
        Span::styled(display, value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
