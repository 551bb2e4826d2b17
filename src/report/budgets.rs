use std::collections::HashSet;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::{CurrencyCode, CurrencyTotals, RateTable};
use crate::domain::Budget;

use super::period::DateRange;

/// Accumulated budget side of one aggregate cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetTally {
    /// Total in the base currency (unconverted amounts fall through as-is
    /// when no rate exists).
    pub amount: Decimal,
    /// Pre-conversion totals keyed by source currency.
    pub original: CurrencyTotals,
}

impl BudgetTally {
    /// Raw currency-set view; the roll-up recomputes a stricter flag from
    /// strictly positive originals for display.
    pub fn is_mixed(&self) -> bool {
        self.original.len() > 1
    }
}

/// Sums every active budget attached to one of `ids` over `range`,
/// weighting each by its applicable month count.
pub fn evaluate_budgets(
    budgets: &[Budget],
    ids: &HashSet<Uuid>,
    range: &DateRange,
    base: &CurrencyCode,
    rates: &RateTable,
) -> BudgetTally {
    let mut tally = BudgetTally::default();
    for budget in budgets
        .iter()
        .filter(|budget| budget.is_active() && ids.contains(&budget.category_id))
    {
        let months = applicable_months(budget, range);
        if months == 0 {
            continue;
        }
        let original = budget.amount * Decimal::from(months);
        let converted = rates
            .convert(original, &budget.currency, base)
            .unwrap_or(original);
        tally.amount += converted;
        tally.original.add(&budget.currency, original);
    }
    tally
}

/// Number of calendar months of `range` a budget applies to.
///
/// Recurring budgets count every whole month touched by the overlap of
/// their [start, end] window with the range, partial coverage included.
/// One-time budgets count one month when their month overlaps the range.
/// A budget missing the month field its cadence requires counts zero.
pub fn applicable_months(budget: &Budget, range: &DateRange) -> i64 {
    if budget.recurring {
        let Some(start) = budget.start_month else {
            return 0;
        };
        let overlap_start = start.max(range.start_month());
        let overlap_end = match budget.end_month {
            Some(end) => end.min(range.end_month()),
            None => range.end_month(),
        };
        overlap_start.months_through(overlap_end).max(0)
    } else {
        match budget.month {
            Some(month) if month.first_day() <= range.end && month.last_day() >= range.start => 1,
            _ => 0,
        }
    }
}
