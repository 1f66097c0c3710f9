use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use engine::{BudgetLine, BudgetPlan, Category, Currency, DashboardSettings, Money, SpendModel};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/tally.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency: String,
    pub recent_limit: usize,
    pub timezone: String,
    pub seed_examples: bool,
    pub spend_model: SpendModel,
    pub log_level: String,
    pub log_file: String,
    pub budgets: Vec<BudgetEntry>,
}

/// One `[[budgets]]` row. The ceiling is in major units and may be written
/// as a number or a string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BudgetEntry {
    pub category: String,
    pub ceiling: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let budget = |category: &str, ceiling: &str| BudgetEntry {
            category: category.to_string(),
            ceiling: ceiling.to_string(),
        };
        Self {
            currency: "USD".to_string(),
            recent_limit: engine::RECENT_LIMIT,
            timezone: "UTC".to_string(),
            seed_examples: true,
            spend_model: SpendModel::Actual,
            log_level: "info".to_string(),
            log_file: "tally.log".to_string(),
            budgets: vec![
                budget("education", "500"),
                budget("food", "300"),
                budget("entertainment", "150"),
                budget("transportation", "100"),
            ],
        }
    }
}

impl AppConfig {
    pub fn currency(&self) -> Result<Currency> {
        Ok(Currency::try_from(self.currency.as_str())?)
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }

    /// Builds the budget table, in the order the rows were configured.
    pub fn budget_plan(&self, currency: Currency) -> Result<BudgetPlan> {
        let lines = self
            .budgets
            .iter()
            .map(|entry| {
                Ok(BudgetLine {
                    category: Category::try_from(entry.category.as_str())?,
                    ceiling: Money::parse_major(&entry.ceiling, currency)?,
                })
            })
            .collect::<std::result::Result<Vec<_>, engine::EngineError>>()?;
        Ok(BudgetPlan::new(lines)?)
    }

    pub fn dashboard_settings(&self) -> Result<DashboardSettings> {
        let currency = self.currency()?;
        Ok(DashboardSettings {
            currency,
            budgets: self.budget_plan(currency)?,
            spend_model: self.spend_model,
            recent_limit: self.recent_limit,
        })
    }
}

/// Today's date in `tz`, used as the entry form default.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[derive(Debug, Parser)]
#[command(name = "tally", about = "Terminal personal-finance dashboard")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Display currency (USD, EUR, INR). Amounts are never converted.
    #[arg(long)]
    currency: Option<String>,
    /// Number of rows in the recent transactions list.
    #[arg(long)]
    recent_limit: Option<usize>,
    /// Timezone used for "today" (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Start with an empty ledger instead of the example transactions.
    #[arg(long)]
    no_seed: bool,
    /// Log level written to the log file.
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("TALLY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(limit) = args.recent_limit {
        settings.recent_limit = limit;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if args.no_seed {
        settings.seed_examples = false;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }

    Ok(settings)
}
