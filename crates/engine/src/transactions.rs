//! Transaction primitives.
//!
//! A `Transaction` is an immutable record of money coming in or going out. It
//! is built either directly with [`Transaction::new`] or from raw form fields
//! through [`TransactionInput::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, Currency, EngineError, Money, ResultEngine};

/// Date format accepted for the `date` form field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted transaction amount: one trillion major units.
pub const MAX_AMOUNT: Money = Money::new(100_000_000_000_000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Expense => Self::Income,
            Self::Income => Self::Expense,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Builds a transaction with a fresh id.
    ///
    /// Fails if the description is blank, the amount is not positive or above
    /// [`MAX_AMOUNT`], or the category is not allowed for `kind`.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> ResultEngine<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(EngineError::MissingField("description".to_string()));
        }
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount("amount must be > 0".to_string()));
        }
        if amount > MAX_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be at most {MAX_AMOUNT}"
            )));
        }
        if !category.allows(kind) {
            return Err(EngineError::CategoryMismatch(format!(
                "{} transactions cannot use category {category}",
                kind.as_str()
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description,
            amount,
            category,
            date,
            kind,
        })
    }
}

/// Raw field values of the entry form, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub category: Option<Category>,
    pub date: String,
    pub kind: TransactionKind,
}

impl TransactionInput {
    /// Turns the raw fields into a transaction.
    ///
    /// Required fields are checked first (description, amount, category,
    /// date) so a half-filled form reports the first missing field; an amount
    /// that does not parse is rejected the same way as a missing one.
    pub fn validate(&self, currency: Currency) -> ResultEngine<Transaction> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(EngineError::MissingField("description".to_string()));
        }
        if self.amount.trim().is_empty() {
            return Err(EngineError::MissingField("amount".to_string()));
        }
        let category = self
            .category
            .ok_or_else(|| EngineError::MissingField("category".to_string()))?;
        if self.date.trim().is_empty() {
            return Err(EngineError::MissingField("date".to_string()));
        }

        let amount = Money::parse_major(&self.amount, currency)?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| EngineError::InvalidDate(self.date.trim().to_string()))?;

        Transaction::new(description, amount, category, date, self.kind)
    }
}
