use chrono::NaiveDate;

use engine::{
    BudgetPlan, BudgetStatus, Category, Currency, Dashboard, DashboardSettings, EngineError,
    MAX_AMOUNT, Money, RECENT_LIMIT, SpendModel, Transaction, TransactionInput, TransactionKind,
    TransactionStore, balance, category_breakdown, recent_transactions, spend_by_category,
    total_expenses, total_income,
};

fn settings() -> DashboardSettings {
    DashboardSettings {
        currency: Currency::Usd,
        budgets: BudgetPlan::reference(Currency::Usd),
        spend_model: SpendModel::Actual,
        recent_limit: RECENT_LIMIT,
    }
}

fn coffee() -> TransactionInput {
    TransactionInput {
        description: "Coffee".to_string(),
        amount: "4.50".to_string(),
        category: Some(Category::Food),
        date: "2024-09-12".to_string(),
        kind: TransactionKind::Expense,
    }
}

fn expense(description: &str, minor: i64, category: Category, day: u32) -> Transaction {
    Transaction::new(
        description,
        Money::new(minor),
        category,
        NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
        TransactionKind::Expense,
    )
    .unwrap()
}

#[test]
fn empty_store_yields_zeroes_and_empty_views() {
    let store = TransactionStore::new();
    let txs = store.all();

    assert_eq!(total_income(txs), Money::ZERO);
    assert_eq!(total_expenses(txs), Money::ZERO);
    assert_eq!(balance(txs), Money::ZERO);
    assert!(spend_by_category(txs).is_empty());
    assert!(category_breakdown(txs).is_empty());
    assert!(recent_transactions(txs, RECENT_LIMIT).is_empty());
}

#[test]
fn seeded_store_totals() {
    let store = TransactionStore::seeded().unwrap();
    let txs = store.all();

    assert_eq!(total_income(txs), Money::new(32_000));
    assert_eq!(total_expenses(txs), Money::new(26_250));
    assert_eq!(balance(txs), Money::new(5_750));

    let spend = spend_by_category(txs);
    assert_eq!(spend.len(), 2);
    assert_eq!(spend[&Category::Education], Money::new(25_000));
    assert_eq!(spend[&Category::Food], Money::new(1_250));
    assert!(!spend.contains_key(&Category::Income));
}

#[test]
fn submitting_coffee_updates_every_view() {
    let mut store = TransactionStore::seeded().unwrap();
    let expenses_before = total_expenses(store.all());
    let food_before = spend_by_category(store.all())[&Category::Food];

    let id = store.submit(&coffee(), Currency::Usd).unwrap();

    let txs = store.all();
    assert_eq!(txs.len(), 4);
    assert_eq!(txs[0].id, id);
    assert_eq!(total_expenses(txs), expenses_before + Money::new(450));
    assert_eq!(
        spend_by_category(txs)[&Category::Food],
        food_before + Money::new(450)
    );

    let recent = recent_transactions(txs, RECENT_LIMIT);
    assert_eq!(recent[0].description, "Coffee");
}

#[test]
fn submission_without_description_is_a_no_op() {
    let mut store = TransactionStore::seeded().unwrap();
    let mut input = coffee();
    input.description.clear();

    let err = store.submit(&input, Currency::Usd).unwrap_err();

    assert_eq!(err, EngineError::MissingField("description".to_string()));
    assert_eq!(store.len(), 3);
}

#[test]
fn non_numeric_amount_is_rejected_like_a_missing_field() {
    let mut store = TransactionStore::new();
    let mut input = coffee();
    input.amount = "4.5.0".to_string();

    assert!(store.submit(&input, Currency::Usd).is_err());
    assert!(store.is_empty());
}

#[test]
fn oversized_amounts_are_rejected_and_largest_ones_still_total() {
    let mut store = TransactionStore::new();
    let huge = TransactionInput {
        amount: "90000000000000000".to_string(),
        ..coffee()
    };
    for _ in 0..2 {
        assert!(matches!(
            store.submit(&huge, Currency::Usd),
            Err(EngineError::InvalidAmount(_))
        ));
    }
    assert!(store.is_empty());

    let largest = TransactionInput {
        amount: "1000000000000".to_string(),
        ..coffee()
    };
    store.submit(&largest, Currency::Usd).unwrap();
    store.submit(&largest, Currency::Usd).unwrap();

    let txs = store.all();
    let doubled = MAX_AMOUNT + MAX_AMOUNT;
    assert_eq!(total_expenses(txs), doubled);
    assert_eq!(balance(txs), Money::ZERO - doubled);
    assert_eq!(spend_by_category(txs)[&Category::Food], doubled);
    let dashboard = Dashboard::compute(txs, &settings());
    assert_eq!(dashboard.budgets[1].status, BudgetStatus::Over);
}

#[test]
fn recent_orders_by_date_not_insertion() {
    let store = TransactionStore::seeded().unwrap();
    let recent = recent_transactions(store.all(), RECENT_LIMIT);

    let descriptions: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Lunch", "Textbooks", "Part-time job"]);
    assert_eq!(store.all()[0].description, "Textbooks");
}

#[test]
fn recent_truncates_and_keeps_insertion_order_on_ties() {
    let mut store = TransactionStore::new();
    for i in 0..15 {
        store.append(expense(&format!("tx{i}"), 100, Category::Other, 1));
    }

    let recent = recent_transactions(store.all(), RECENT_LIMIT);
    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0].description, "tx14");
    assert_eq!(recent[9].description, "tx5");
}

#[test]
fn breakdown_is_sorted_by_amount_and_shares_sum_to_100() {
    let txs = vec![
        expense("bus", 1_000, Category::Transportation, 2),
        expense("pizza", 3_000, Category::Food, 3),
        expense("movie", 1_000, Category::Entertainment, 4),
    ];

    let slices = category_breakdown(&txs);
    let categories: Vec<_> = slices.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Food,
            Category::Transportation,
            Category::Entertainment
        ]
    );
    assert!((slices[0].share - 60.0).abs() < 1e-9);
    let shares: f64 = slices.iter().map(|s| s.share).sum();
    assert!((shares - 100.0).abs() < 1e-9);
}

#[test]
fn dashboard_wires_budgets_to_actual_spend() {
    let store = TransactionStore::seeded().unwrap();
    let dashboard = Dashboard::compute(store.all(), &settings());

    assert_eq!(dashboard.totals.balance, Money::new(5_750));
    assert_eq!(dashboard.recent.len(), 3);
    assert_eq!(dashboard.budgets.len(), 4);

    let education = &dashboard.budgets[0];
    assert_eq!(education.category, Category::Education);
    assert_eq!(education.percentage, 50.0);
    assert_eq!(education.status, BudgetStatus::Ok);
    assert_eq!(education.remaining, Money::new(25_000));
    assert_eq!(education.progress, 50.0);

    let transportation = &dashboard.budgets[3];
    assert_eq!(transportation.spent, Money::ZERO);
    assert_eq!(transportation.remaining, Money::new(10_000));
}

#[test]
fn dashboard_reference_shares_split_total_expenses() {
    let store = TransactionStore::seeded().unwrap();
    let mut settings = settings();
    settings.spend_model = SpendModel::ReferenceShares;

    let dashboard = Dashboard::compute(store.all(), &settings);
    let spent: Vec<_> = dashboard.budgets.iter().map(|b| b.spent).collect();
    assert_eq!(
        spent,
        vec![
            Money::new(25_000),
            Money::new(10_500),
            Money::new(5_250),
            Money::new(3_938)
        ]
    );
}

#[test]
fn overspending_flags_over_tier() {
    let txs = vec![
        expense("train", 8_000, Category::Transportation, 1),
        expense("taxi", 4_000, Category::Transportation, 2),
        expense("snacks", 25_000, Category::Food, 3),
    ];
    let dashboard = Dashboard::compute(&txs, &settings());

    let food = dashboard
        .budgets
        .iter()
        .find(|b| b.category == Category::Food)
        .unwrap();
    assert_eq!(food.status, BudgetStatus::Near);

    let transportation = dashboard
        .budgets
        .iter()
        .find(|b| b.category == Category::Transportation)
        .unwrap();
    assert_eq!(transportation.status, BudgetStatus::Over);
    assert_eq!(transportation.progress, 100.0);
    assert_eq!(transportation.remaining, Money::ZERO);
}
