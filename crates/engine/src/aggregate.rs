//! Per-category spending used by the breakdown chart and the budget overview.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Category, Money, Transaction, TransactionKind};

/// Sums expense amounts per category.
///
/// Categories without expenses are absent from the map. The values always add
/// up to [`total_expenses`](crate::total_expenses).
pub fn spend_by_category(transactions: &[Transaction]) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();

    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        *totals.entry(tx.category).or_insert(Money::ZERO) += tx.amount;
    }

    totals
}

/// One slice of the spending chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub amount: Money,
    /// Percentage of total expenses, `0.0..=100.0`.
    pub share: f64,
}

/// Chart data: one slice per spending category, largest first.
///
/// Ties are broken by category order so the output is deterministic.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    breakdown_from(&spend_by_category(transactions))
}

pub(crate) fn breakdown_from(spend: &BTreeMap<Category, Money>) -> Vec<CategorySlice> {
    let total: Money = spend.values().sum();

    let mut slices: Vec<CategorySlice> = spend
        .iter()
        .map(|(&category, &amount)| CategorySlice {
            category,
            amount,
            share: amount.ratio_percent(total),
        })
        .collect();

    slices.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
    slices
}
