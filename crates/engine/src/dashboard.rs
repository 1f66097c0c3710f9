//! One-shot computation of everything the dashboard displays.

use std::collections::BTreeMap;

use crate::{
    BudgetEvaluation, BudgetPlan, Category, CategorySlice, Currency, Money, SpendModel, Totals,
    Transaction, aggregate::breakdown_from, recent_transactions, spend_by_category,
};

/// How a [`Dashboard`] is derived from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSettings {
    pub currency: Currency,
    pub budgets: BudgetPlan,
    pub spend_model: SpendModel,
    pub recent_limit: usize,
}

/// Snapshot of every derived figure, recomputed from the full transaction
/// list on each call.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard<'a> {
    pub totals: Totals,
    pub spend_by_category: BTreeMap<Category, Money>,
    pub breakdown: Vec<CategorySlice>,
    pub budgets: Vec<BudgetEvaluation>,
    pub recent: Vec<&'a Transaction>,
}

impl<'a> Dashboard<'a> {
    pub fn compute(transactions: &'a [Transaction], settings: &DashboardSettings) -> Self {
        let spend = spend_by_category(transactions);
        let breakdown = breakdown_from(&spend);
        let budgets = settings
            .budgets
            .evaluate_spend(&spend, settings.spend_model, settings.currency);

        Self {
            totals: Totals::from_transactions(transactions),
            spend_by_category: spend,
            breakdown,
            budgets,
            recent: recent_transactions(transactions, settings.recent_limit),
        }
    }
}
