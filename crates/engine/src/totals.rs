//! Derived totals over the whole transaction collection.
//!
//! Every function recomputes from scratch; nothing is maintained
//! incrementally.

use serde::Serialize;

use crate::{Money, Transaction, TransactionKind};

/// Sum of all income amounts.
pub fn total_income(transactions: &[Transaction]) -> Money {
    sum_kind(transactions, TransactionKind::Income)
}

/// Sum of all expense amounts.
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    sum_kind(transactions, TransactionKind::Expense)
}

/// Income minus expenses. May be negative.
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .map(|tx| tx.amount)
        .sum()
}

/// The three headline numbers of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let income = total_income(transactions);
        let expenses = total_expenses(transactions);
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
