//! Budget evaluation: spend against a fixed ceiling per category.
//!
//! Status tiers are decided with integer arithmetic on minor units so the
//! 80% and 100% boundaries are exact; the floating point `percentage` is only
//! used for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, Currency, EngineError, Money, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// At most 80% of the ceiling.
    Ok,
    /// Above 80% and at most 100%.
    Near,
    /// Above the ceiling.
    Over,
}

impl BudgetStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Near => "near limit",
            Self::Over => "over budget",
        }
    }
}

/// Classifies `spent` against `ceiling`.
///
/// `Over` when `spent / ceiling > 100%`, else `Near` when it is above 80%,
/// else `Ok`. Both comparisons are strict.
pub fn classify(spent: Money, ceiling: Money) -> BudgetStatus {
    let spent = i128::from(spent.minor());
    let ceiling = i128::from(ceiling.minor());

    if spent > ceiling {
        BudgetStatus::Over
    } else if spent * 5 > ceiling * 4 {
        BudgetStatus::Near
    } else {
        BudgetStatus::Ok
    }
}

/// Result of evaluating one budget row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    pub category: Category,
    pub spent: Money,
    pub ceiling: Money,
    /// `spent / ceiling * 100`, unbounded.
    pub percentage: f64,
    pub status: BudgetStatus,
    /// `ceiling - spent`, floored at zero.
    pub remaining: Money,
    /// `percentage` capped at 100 for progress bars.
    pub progress: f64,
}

/// Evaluates a single `(spent, ceiling)` pair.
pub fn evaluate(category: Category, spent: Money, ceiling: Money) -> BudgetEvaluation {
    let percentage = spent.ratio_percent(ceiling);
    BudgetEvaluation {
        category,
        spent,
        ceiling,
        percentage,
        status: classify(spent, ceiling),
        remaining: (ceiling - spent).max(Money::ZERO),
        progress: percentage.min(100.0),
    }
}

/// Where the per-category `spent` figure comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendModel {
    /// Actual per-category sums from [`crate::spend_by_category`].
    #[default]
    Actual,
    /// Fixed shares of total expenses, as the first version of the dashboard
    /// displayed them: education is a flat 250, food 40%, entertainment 20%
    /// and transportation 15% of all expenses, with fallback figures when
    /// nothing has been spent yet.
    ReferenceShares,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: Category,
    pub ceiling: Money,
}

/// The budget table. Row order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetPlan {
    lines: Vec<BudgetLine>,
}

impl BudgetPlan {
    /// Builds a plan, rejecting non-positive ceilings, income rows and
    /// duplicated categories.
    pub fn new(lines: Vec<BudgetLine>) -> ResultEngine<Self> {
        for (i, line) in lines.iter().enumerate() {
            if !line.ceiling.is_positive() {
                return Err(EngineError::InvalidBudget(format!(
                    "ceiling for {} must be > 0",
                    line.category
                )));
            }
            if line.category == Category::Income {
                return Err(EngineError::InvalidBudget(
                    "income cannot have a spending budget".to_string(),
                ));
            }
            if lines[..i].iter().any(|l| l.category == line.category) {
                return Err(EngineError::InvalidBudget(format!(
                    "{} is budgeted twice",
                    line.category
                )));
            }
        }
        Ok(Self { lines })
    }

    /// The default monthly budgets: education 500, food 300, entertainment
    /// 150, transportation 100.
    pub fn reference(currency: Currency) -> Self {
        let line = |category, major| BudgetLine {
            category,
            ceiling: Money::from_major(major, currency),
        };
        Self {
            lines: vec![
                line(Category::Education, 500),
                line(Category::Food, 300),
                line(Category::Entertainment, 150),
                line(Category::Transportation, 100),
            ],
        }
    }

    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    /// Evaluates every row against an already aggregated spend map.
    pub fn evaluate_spend(
        &self,
        spend: &BTreeMap<Category, Money>,
        model: SpendModel,
        currency: Currency,
    ) -> Vec<BudgetEvaluation> {
        let total: Money = spend.values().sum();

        self.lines
            .iter()
            .map(|line| {
                let actual = spend.get(&line.category).copied().unwrap_or(Money::ZERO);
                let spent = match model {
                    SpendModel::Actual => actual,
                    SpendModel::ReferenceShares => {
                        reference_spend(line.category, total, currency).unwrap_or(actual)
                    }
                };
                let evaluation = evaluate(line.category, spent, line.ceiling);
                if evaluation.status == BudgetStatus::Over {
                    tracing::warn!(
                        category = line.category.as_str(),
                        spent = %spent,
                        ceiling = %line.ceiling,
                        "budget exceeded"
                    );
                }
                evaluation
            })
            .collect()
    }
}

/// Spend figure of the fixed-share model, or `None` for categories the model
/// does not cover.
fn reference_spend(category: Category, total: Money, currency: Currency) -> Option<Money> {
    let share = |pct: u32, fallback: i64| {
        if total.is_zero() {
            Money::from_major(fallback, currency)
        } else {
            total.percent_of(pct)
        }
    };

    match category {
        Category::Education => Some(Money::from_major(250, currency)),
        Category::Food => Some(share(40, 150)),
        Category::Entertainment => Some(share(20, 75)),
        Category::Transportation => Some(share(15, 50)),
        Category::Shopping | Category::Health | Category::Income | Category::Other => None,
    }
}
