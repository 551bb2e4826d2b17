//! The aggregation engine: pure functions of a [`Snapshot`], recomputed
//! from scratch on every call.

pub mod actuals;
pub mod budgets;
pub mod period;
pub mod rollup;
pub mod section;
pub mod tree;

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{CategoryKind, Snapshot, Transaction};

pub use actuals::{evaluate_actuals, ActualTally};
pub use budgets::{applicable_months, evaluate_budgets, BudgetTally};
pub use period::{DateRange, PeriodKind};
pub use rollup::CategoryRow;
pub use section::{
    difference_tone, variance_label, variance_tone, NetSummary, SectionTotals, Tone,
};
pub use tree::{build_forest, find_node, subtree_ids, CategoryNode};

use rollup::{roll_up, EngineCtx};
use section::section_totals;

/// A fully derived report for one section over one window, ready for
/// display.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub kind: CategoryKind,
    pub range: DateRange,
    /// Top-level rows with nested children; rows without data are pruned.
    pub rows: Vec<CategoryRow>,
    pub totals: SectionTotals,
}

impl Snapshot {
    /// Builds the per-category budget-vs-actual report for one section.
    pub fn build_report(&self, kind: CategoryKind, range: DateRange) -> SectionReport {
        tracing::debug!(
            section = ?kind,
            start = %range.start,
            end = %range.end,
            "building section report"
        );
        let forest = build_forest(&self.categories, kind);
        let ctx = EngineCtx {
            budgets: &self.budgets,
            transactions: &self.transactions,
            range: &range,
            section: kind,
            base: &self.base_currency,
            rates: &self.rates,
        };
        let rows: Vec<CategoryRow> = forest
            .iter()
            .map(|node| roll_up(node, &ctx))
            .filter(CategoryRow::has_data)
            .collect();
        let totals = section_totals(kind, &rows);
        SectionReport {
            kind,
            range,
            rows,
            totals,
        }
    }

    /// Planned and actual savings: income totals minus expense totals.
    pub fn net_summary(&self, range: DateRange) -> NetSummary {
        let income = self.build_report(CategoryKind::Income, range).totals;
        let expense = self.build_report(CategoryKind::Expense, range).totals;
        NetSummary {
            planned_savings: income.budget - expense.budget,
            actual_savings: income.actual - expense.actual,
        }
    }

    /// Detail transactions behind one aggregate cell: the category and its
    /// descendants, newest first (date, then `created_at`).
    pub fn drilldown(
        &self,
        category_id: Uuid,
        kind: CategoryKind,
        range: DateRange,
    ) -> Vec<Transaction> {
        let forest = build_forest(&self.categories, kind);
        let ids = match find_node(&forest, category_id) {
            Some(node) => subtree_ids(node),
            None => HashSet::from([category_id]),
        };
        let mut matched = evaluate_actuals(
            &self.transactions,
            &ids,
            &range,
            kind,
            &self.base_currency,
            &self.rates,
        )
        .transactions;
        matched.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        matched
    }
}
