//! Domain core of the Tally finance dashboard.
//!
//! The engine owns the in-memory [`TransactionStore`] and the pure functions
//! that derive everything the dashboard shows from it: totals, spending per
//! category, budget status and the recent transactions list.
//!
//! ```rust
//! use engine::{Currency, Dashboard, DashboardSettings, BudgetPlan, SpendModel, TransactionStore};
//!
//! let store = TransactionStore::seeded().unwrap();
//! let settings = DashboardSettings {
//!     currency: Currency::Usd,
//!     budgets: BudgetPlan::reference(Currency::Usd),
//!     spend_model: SpendModel::Actual,
//!     recent_limit: engine::RECENT_LIMIT,
//! };
//! let dashboard = Dashboard::compute(store.all(), &settings);
//! assert_eq!(dashboard.totals.balance.format(Currency::Usd), "$57.50");
//! ```

pub use aggregate::{CategorySlice, category_breakdown, spend_by_category};
pub use budget::{
    BudgetEvaluation, BudgetLine, BudgetPlan, BudgetStatus, SpendModel, classify, evaluate,
};
pub use category::Category;
pub use currency::Currency;
pub use dashboard::{Dashboard, DashboardSettings};
pub use error::EngineError;
pub use money::Money;
pub use presenter::{RECENT_LIMIT, recent_transactions};
pub use store::TransactionStore;
pub use totals::{Totals, balance, total_expenses, total_income};
pub use transactions::{DATE_FORMAT, MAX_AMOUNT, Transaction, TransactionInput, TransactionKind};

mod aggregate;
mod budget;
mod category;
mod currency;
mod dashboard;
mod error;
mod money;
mod presenter;
mod store;
mod totals;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;
