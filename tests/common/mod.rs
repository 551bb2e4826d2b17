#![allow(dead_code)]

use budget_rollup::currency::CurrencyCode;
use budget_rollup::domain::{
    Budget, Category, CategoryKind, Snapshot, Transaction, TransactionKind, YearMonth,
};
use budget_rollup::report::{DateRange, PeriodKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("valid month")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn month_range(year: i32, month: u32) -> DateRange {
    DateRange::resolve(ym(year, month), PeriodKind::Month)
}

pub fn usd() -> CurrencyCode {
    CurrencyCode::new("USD")
}

pub fn expense_txn(category: Uuid, day: NaiveDate, amount: i64) -> Transaction {
    Transaction::new(
        Uuid::new_v4(),
        Some(category),
        TransactionKind::Expense,
        day,
        Decimal::from(amount),
        usd(),
    )
}

pub fn income_txn(category: Uuid, day: NaiveDate, amount: i64) -> Transaction {
    Transaction::new(
        Uuid::new_v4(),
        Some(category),
        TransactionKind::Income,
        day,
        Decimal::from(amount),
        usd(),
    )
}

/// Category ids for the three-level expense fixture.
pub struct ThreeLevel {
    pub home: Uuid,
    pub utilities: Uuid,
    pub electricity: Uuid,
}

/// Home → Utilities → Electricity, each level with its own budget and
/// April 2024 spending.
///
/// Budgets: Home 1000/month recurring, Utilities 300 one-time (April),
/// Electricity 100/month recurring. Actuals in April: 200 / 150 / 90.
pub fn three_level_snapshot() -> (Snapshot, ThreeLevel) {
    let mut snapshot = Snapshot::new(usd());

    let home = Category::new("Home", CategoryKind::Expense);
    let utilities = Category::new("Utilities", CategoryKind::Expense).with_parent(home.id);
    let electricity =
        Category::new("Electricity", CategoryKind::Expense).with_parent(utilities.id);
    let ids = ThreeLevel {
        home: home.id,
        utilities: utilities.id,
        electricity: electricity.id,
    };
    snapshot.add_category(home);
    snapshot.add_category(utilities);
    snapshot.add_category(electricity);

    snapshot.add_budget(Budget::recurring(
        ids.home,
        Decimal::from(1000),
        usd(),
        ym(2024, 1),
    ));
    snapshot.add_budget(Budget::one_time(
        ids.utilities,
        Decimal::from(300),
        usd(),
        ym(2024, 4),
    ));
    snapshot.add_budget(Budget::recurring(
        ids.electricity,
        Decimal::from(100),
        usd(),
        ym(2024, 1),
    ));

    snapshot.add_transaction(expense_txn(ids.home, date(2024, 4, 5), 200));
    snapshot.add_transaction(expense_txn(ids.utilities, date(2024, 4, 10), 150));
    snapshot.add_transaction(expense_txn(ids.electricity, date(2024, 4, 12), 90));

    (snapshot, ids)
}
