use std::collections::{BTreeSet, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::{CurrencyCode, CurrencyTotals, RateTable};
use crate::domain::{Budget, Category, CategoryKind, Transaction};

use super::actuals::evaluate_actuals;
use super::budgets::evaluate_budgets;
use super::period::DateRange;
use super::tree::{subtree_ids, CategoryNode};

/// Shared evaluation inputs threaded through the recursive roll-up.
pub(crate) struct EngineCtx<'a> {
    pub budgets: &'a [Budget],
    pub transactions: &'a [Transaction],
    pub range: &'a DateRange,
    pub section: CategoryKind,
    pub base: &'a CurrencyCode,
    pub rates: &'a RateTable,
}

/// One displayable report row for a category, descendants rolled in.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub budget: Decimal,
    pub actual: Decimal,
    pub difference: Decimal,
    /// `(actual − budget) / budget × 100`, `None` when budget is zero.
    pub variance: Option<Decimal>,
    /// Every currency seen by either side, zero-net contributions included.
    pub currencies: BTreeSet<CurrencyCode>,
    /// More than one currency carries a strictly positive original amount.
    pub is_mixed: bool,
    pub budget_original: CurrencyTotals,
    pub actual_original: CurrencyTotals,
    pub difference_original: CurrencyTotals,
    pub children: Vec<CategoryRow>,
}

impl CategoryRow {
    /// Rows survive the report when they or a surviving child carry data.
    pub fn has_data(&self) -> bool {
        self.budget > Decimal::ZERO || self.actual > Decimal::ZERO || !self.children.is_empty()
    }
}

/// Combines a category's own totals with its children's recursively,
/// without double counting.
///
/// A leaf evaluates over self-plus-descendants (just itself). A parent
/// evaluates its own budget and actual over exactly its own id, then adds
/// each child's rolled-up row; a budget attached to a child is therefore
/// attributed once, by that child's own recursion.
pub(crate) fn roll_up(node: &CategoryNode, ctx: &EngineCtx<'_>) -> CategoryRow {
    let ids = if node.children.is_empty() {
        subtree_ids(node)
    } else {
        HashSet::from([node.category.id])
    };
    let budget_tally = evaluate_budgets(ctx.budgets, &ids, ctx.range, ctx.base, ctx.rates);
    let actual_tally = evaluate_actuals(
        ctx.transactions,
        &ids,
        ctx.range,
        ctx.section,
        ctx.base,
        ctx.rates,
    );

    let mut budget = budget_tally.amount;
    let mut actual = actual_tally.amount;
    let mut budget_original = budget_tally.original;
    let mut actual_original = actual_tally.original;
    let mut children = Vec::new();
    for child_node in &node.children {
        let child = roll_up(child_node, ctx);
        budget += child.budget;
        actual += child.actual;
        budget_original.merge(&child.budget_original);
        actual_original.merge(&child.actual_original);
        if child.has_data() {
            children.push(child);
        }
    }

    let derived = derive(budget, actual, &budget_original, &actual_original);
    CategoryRow {
        category: node.category.clone(),
        budget,
        actual,
        difference: derived.difference,
        variance: derived.variance,
        currencies: derived.currencies,
        is_mixed: derived.is_mixed,
        budget_original,
        actual_original,
        difference_original: derived.difference_original,
        children,
    }
}

/// Fields derived identically for rows and section totals.
pub(crate) struct Derived {
    pub difference: Decimal,
    pub variance: Option<Decimal>,
    pub currencies: BTreeSet<CurrencyCode>,
    pub is_mixed: bool,
    pub difference_original: CurrencyTotals,
}

pub(crate) fn derive(
    budget: Decimal,
    actual: Decimal,
    budget_original: &CurrencyTotals,
    actual_original: &CurrencyTotals,
) -> Derived {
    let difference = budget - actual;
    let variance = if budget > Decimal::ZERO {
        Some((actual - budget) / budget * Decimal::from(100))
    } else {
        None
    };
    let currencies: BTreeSet<CurrencyCode> = budget_original
        .codes()
        .chain(actual_original.codes())
        .cloned()
        .collect();
    let positive: BTreeSet<&CurrencyCode> = budget_original
        .positive_codes()
        .chain(actual_original.positive_codes())
        .collect();
    Derived {
        difference,
        variance,
        currencies,
        is_mixed: positive.len() > 1,
        difference_original: CurrencyTotals::difference(budget_original, actual_original),
    }
}
