use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::{CurrencyCode, CurrencyTotals};
use crate::domain::CategoryKind;

use super::rollup::{derive, CategoryRow};

/// Grand totals for one report section (Income or Expense).
#[derive(Debug, Clone, Serialize)]
pub struct SectionTotals {
    pub kind: CategoryKind,
    pub budget: Decimal,
    pub actual: Decimal,
    pub difference: Decimal,
    pub variance: Option<Decimal>,
    pub currencies: BTreeSet<CurrencyCode>,
    pub is_mixed: bool,
    pub budget_original: CurrencyTotals,
    pub actual_original: CurrencyTotals,
    pub difference_original: CurrencyTotals,
}

pub(crate) fn section_totals(kind: CategoryKind, rows: &[CategoryRow]) -> SectionTotals {
    let mut budget = Decimal::ZERO;
    let mut actual = Decimal::ZERO;
    let mut budget_original = CurrencyTotals::new();
    let mut actual_original = CurrencyTotals::new();
    for row in rows {
        budget += row.budget;
        actual += row.actual;
        budget_original.merge(&row.budget_original);
        actual_original.merge(&row.actual_original);
    }
    let derived = derive(budget, actual, &budget_original, &actual_original);
    SectionTotals {
        kind,
        budget,
        actual,
        difference: derived.difference,
        variance: derived.variance,
        currencies: derived.currencies,
        is_mixed: derived.is_mixed,
        budget_original,
        actual_original,
        difference_original: derived.difference_original,
    }
}

/// Planned vs actual savings across both sections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetSummary {
    pub planned_savings: Decimal,
    pub actual_savings: Decimal,
}

/// Display tone for a variance or difference cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
}

/// Renders a variance percentage per the section's sign convention:
/// Income is signed ("+20%" / "-20%"), Expense is shown as an absolute
/// percentage with the sign carried by `variance_tone` instead.
pub fn variance_label(kind: CategoryKind, variance: Decimal) -> String {
    match kind {
        CategoryKind::Income => {
            if variance < Decimal::ZERO {
                format!("{}%", variance.normalize())
            } else {
                format!("+{}%", variance.normalize())
            }
        }
        CategoryKind::Expense => format!("{}%", variance.abs().normalize()),
    }
}

/// Warning when Income falls short of budget, or Expense runs over it.
pub fn variance_tone(kind: CategoryKind, variance: Decimal) -> Tone {
    match kind {
        CategoryKind::Income if variance < Decimal::ZERO => Tone::Warning,
        CategoryKind::Expense if variance > Decimal::ZERO => Tone::Warning,
        _ => Tone::Normal,
    }
}

/// Same convention applied to `budget − actual`.
pub fn difference_tone(kind: CategoryKind, difference: Decimal) -> Tone {
    match kind {
        CategoryKind::Income if difference > Decimal::ZERO => Tone::Warning,
        CategoryKind::Expense if difference < Decimal::ZERO => Tone::Warning,
        _ => Tone::Normal,
    }
}
