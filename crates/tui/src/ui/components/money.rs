use engine::{BudgetEvaluation, Currency, Transaction, TransactionKind};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::{components::charts::percent_bar, theme::Theme};

/// Signed amount of a list row: `+` and green for income, `-` and red for
/// expenses.
#[must_use]
pub fn styled_amount(tx: &Transaction, currency: Currency, theme: &Theme) -> Span<'static> {
    let formatted = tx.amount.format(currency);
    let (color, prefix) = match tx.kind {
        TransactionKind::Income => (theme.positive, "+"),
        TransactionKind::Expense => (theme.negative, "-"),
    };

    Span::styled(
        format!("{prefix}{formatted}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// `"$250 / $500"`, in whole currency units.
#[must_use]
pub fn budget_ratio_label(eval: &BudgetEvaluation, currency: Currency) -> String {
    format!(
        "{} / {}",
        eval.spent.format_whole(currency),
        eval.ceiling.format_whole(currency)
    )
}

/// `"$250 left"`
#[must_use]
pub fn remaining_label(eval: &BudgetEvaluation, currency: Currency) -> String {
    format!("{} left", eval.remaining.format_whole(currency))
}

/// Progress bar of a budget row, coloured by its tier.
#[must_use]
pub fn budget_bar(eval: &BudgetEvaluation, width: usize, theme: &Theme) -> Span<'static> {
    Span::styled(
        percent_bar(eval.progress, width),
        Style::default().fg(theme.budget_color(eval.status)),
    )
}

/// `"50% used"`, rounded to a whole percent.
#[must_use]
pub fn percent_used_label(eval: &BudgetEvaluation) -> String {
    format!("{:.0}% used", eval.percentage)
}
