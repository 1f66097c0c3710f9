//! In-memory transaction store.
//!
//! The store only ever grows: new records are inserted at the front, so
//! [`TransactionStore::all`] returns insertion order, newest first. Display
//! order by date is a separate concern handled by
//! [`recent_transactions`](crate::recent_transactions).

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    Category, Currency, EngineError, Money, ResultEngine, Transaction, TransactionInput,
    TransactionKind,
};

#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    records: Vec<Transaction>,
}

impl TransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the example records shown on first launch.
    pub fn seeded() -> ResultEngine<Self> {
        Ok(Self {
            records: seed_records()?,
        })
    }

    /// Adds `tx` at the front of the collection and returns its id.
    pub fn append(&mut self, tx: Transaction) -> Uuid {
        let id = tx.id;
        tracing::debug!(
            %id,
            kind = tx.kind.as_str(),
            category = tx.category.as_str(),
            amount = %tx.amount,
            "transaction appended"
        );
        self.records.insert(0, tx);
        id
    }

    /// Validates `input` and appends the resulting transaction.
    ///
    /// On error nothing is stored.
    pub fn submit(&mut self, input: &TransactionInput, currency: Currency) -> ResultEngine<Uuid> {
        match input.validate(currency) {
            Ok(tx) => Ok(self.append(tx)),
            Err(err) => {
                tracing::debug!(error = %err, "submission rejected");
                Err(err)
            }
        }
    }

    /// All transactions in insertion order, newest insertion first.
    pub fn all(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn seed_records() -> ResultEngine<Vec<Transaction>> {
    let seeds = [
        (
            "Textbooks",
            25_000,
            Category::Education,
            (2024, 9, 10),
            TransactionKind::Expense,
        ),
        (
            "Lunch",
            1_250,
            Category::Food,
            (2024, 9, 11),
            TransactionKind::Expense,
        ),
        (
            "Part-time job",
            32_000,
            Category::Income,
            (2024, 9, 8),
            TransactionKind::Income,
        ),
    ];

    seeds
        .into_iter()
        .map(|(description, minor, category, (y, m, d), kind)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| EngineError::InvalidDate(format!("{y}-{m}-{d}")))?;
            Transaction::new(description, Money::new(minor), category, date, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: &str) -> TransactionInput {
        TransactionInput {
            description: description.to_string(),
            amount: "10".to_string(),
            category: Some(Category::Shopping),
            date: "2024-01-01".to_string(),
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn append_inserts_at_front() {
        let mut store = TransactionStore::new();
        store.submit(&input("first"), Currency::Usd).unwrap();
        store.submit(&input("second"), Currency::Usd).unwrap();

        let descriptions: Vec<_> = store.all().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["second", "first"]);
    }

    #[test]
    fn rejected_submission_leaves_store_untouched() {
        let mut store = TransactionStore::seeded().unwrap();
        let before = store.all().to_vec();

        let err = store.submit(&input(""), Currency::Usd).unwrap_err();
        assert_eq!(err, EngineError::MissingField("description".to_string()));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn seeded_store_holds_three_examples() {
        let store = TransactionStore::seeded().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[0].description, "Textbooks");
        assert_eq!(store.all()[2].kind, TransactionKind::Income);
    }

    #[test]
    fn submit_returns_id_of_new_record() {
        let mut store = TransactionStore::new();
        let id = store.submit(&input("lookup"), Currency::Usd).unwrap();
        assert_eq!(store.all()[0].id, id);
        assert_eq!(store.all()[0].description, "lookup");
    }
}
