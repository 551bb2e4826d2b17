use std::collections::HashSet;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::{CurrencyCode, CurrencyTotals, RateTable};
use crate::domain::{CategoryKind, Transaction};

use super::period::DateRange;

/// Accumulated actual side of one aggregate cell, with the matched
/// transactions retained for drill-down.
#[derive(Debug, Clone, Default)]
pub struct ActualTally {
    pub amount: Decimal,
    pub original: CurrencyTotals,
    pub transactions: Vec<Transaction>,
}

impl ActualTally {
    pub fn is_mixed(&self) -> bool {
        self.original.len() > 1
    }
}

/// Sums `abs(amount)` of every reportable transaction attached to one of
/// `ids` within `range`, filtered to the section's transaction kinds.
pub fn evaluate_actuals(
    transactions: &[Transaction],
    ids: &HashSet<Uuid>,
    range: &DateRange,
    section: CategoryKind,
    base: &CurrencyCode,
    rates: &RateTable,
) -> ActualTally {
    let mut tally = ActualTally::default();
    for transaction in transactions {
        if !transaction.counts_for_reporting() {
            continue;
        }
        if !transaction.kind.matches_section(section) {
            continue;
        }
        let Some(category_id) = transaction.category_id else {
            continue;
        };
        if !ids.contains(&category_id) || !range.contains(transaction.date) {
            continue;
        }
        let original = transaction.amount.abs();
        let converted = rates
            .convert(original, &transaction.currency, base)
            .unwrap_or(original);
        tally.amount += converted;
        tally.original.add(&transaction.currency, original);
        tally.transactions.push(transaction.clone());
    }
    tally
}
