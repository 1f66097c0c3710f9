use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use engine::{Currency, DATE_FORMAT, Dashboard};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::percent_bar,
            money::{
                budget_bar, budget_ratio_label, percent_used_label, remaining_label, styled_amount,
            },
        },
        theme::Theme,
    },
};

pub const EMPTY_CHART: &str = "No expense data to display";
pub const EMPTY_RECENT: &str = "No transactions yet. Add your first transaction to get started!";
pub const BUDGET_TIP: &str = "Try the 50/30/20 rule: 50% needs, 30% wants, 20% savings!";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let dashboard = state.dashboard();
    let currency = state.currency();

    // Two lines per budget row plus the tip and borders.
    let budget_height = (dashboard.budgets.len() as u16 * 2 + 4).max(7);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Overview cards
            Constraint::Length(budget_height), // Breakdown and budgets
            Constraint::Min(4),                // Recent transactions
            Constraint::Length(3),             // Quick actions
        ])
        .split(area);

    render_overview(frame, layout[0], &dashboard, currency, theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[1]);
    render_breakdown(frame, middle[0], &dashboard, currency, theme);
    render_budgets(frame, middle[1], &dashboard, currency, theme);

    render_recent(frame, layout[2], &dashboard, currency, theme);
    render_quick_actions(frame, layout[3], theme);
}

fn render_overview(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &Dashboard<'_>,
    currency: Currency,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let totals = &dashboard.totals;
    let balance_color = if totals.balance.is_negative() {
        theme.negative
    } else {
        theme.text
    };

    StatCard::new("Balance", totals.balance.format(currency), theme)
        .color(balance_color)
        .caption("Current available balance")
        .render(frame, cols[0]);
    StatCard::new("Income", format!("+{}", totals.income.format(currency)), theme)
        .color(theme.positive)
        .caption("This month's income")
        .render(frame, cols[1]);
    StatCard::new(
        "Expenses",
        format!("-{}", totals.expenses.format(currency)),
        theme,
    )
    .color(theme.negative)
    .caption("This month's spending")
    .render(frame, cols[2]);
}

fn render_breakdown(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &Dashboard<'_>,
    currency: Currency,
    theme: &Theme,
) {
    let inner = Card::new("Expense Breakdown", theme).render_frame(frame, area);

    if dashboard.breakdown.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_CHART, Style::default().fg(theme.dim))),
            inner,
        );
        return;
    }

    let bar_width = (inner.width as usize).saturating_sub(40).clamp(4, 20);
    let lines: Vec<Line> = dashboard
        .breakdown
        .iter()
        .take(inner.height as usize)
        .map(|slice| {
            let color = theme.category_color(slice.category);
            Line::from(vec![
                Span::raw(format!("{} ", slice.category.emoji())),
                Span::styled(
                    format!("{:<15}", slice.category.label()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    percent_bar(slice.share, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>5.1}% ", slice.share),
                    Style::default().fg(theme.dim),
                ),
                Span::styled(
                    slice.amount.format(currency),
                    Style::default().fg(theme.text),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_budgets(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &Dashboard<'_>,
    currency: Currency,
    theme: &Theme,
) {
    let inner = Card::new("Monthly Budget", theme).render_frame(frame, area);
    let bar_width = (inner.width as usize).saturating_sub(30).clamp(4, 20);

    let mut lines = Vec::with_capacity(dashboard.budgets.len() * 2 + 1);
    for eval in &dashboard.budgets {
        let color = theme.budget_color(eval.status);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", eval.category.emoji())),
            Span::styled(
                format!("{:<15}", eval.category.label()),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                budget_ratio_label(eval, currency),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            budget_bar(eval, bar_width, theme),
            Span::styled(
                format!(" {}", percent_used_label(eval)),
                Style::default().fg(color),
            ),
            Span::styled(
                format!("  {}", remaining_label(eval, currency)),
                Style::default().fg(theme.dim),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("💡 {BUDGET_TIP}"),
        Style::default().fg(theme.text_muted),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_recent(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &Dashboard<'_>,
    currency: Currency,
    theme: &Theme,
) {
    let inner = Card::new("Recent Transactions", theme).render_frame(frame, area);

    if dashboard.recent.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_RECENT, Style::default().fg(theme.dim))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = dashboard
        .recent
        .iter()
        .take(inner.height as usize)
        .map(|tx| {
            let badge_color = theme.category_color(tx.category);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", tx.category.emoji())),
                Span::styled(
                    format!("{:<24}", tx.description),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("[{}]", tx.category.label()),
                    Style::default()
                        .fg(badge_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}  ", tx.date.format(DATE_FORMAT)),
                    Style::default().fg(theme.dim),
                ),
                styled_amount(tx, currency, theme),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_quick_actions(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let inner = Card::new("Quick Actions", theme).render_frame(frame, area);

    let actions = Line::from(vec![
        Span::styled("[a]", Style::default().fg(theme.accent)),
        Span::raw(" Add transaction   "),
        Span::styled("[+]", Style::default().fg(theme.accent)),
        Span::raw(" Quick add   "),
        Span::styled("[q]", Style::default().fg(theme.accent)),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(actions), inner);
}
