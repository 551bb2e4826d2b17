use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{CurrencyCode, RateTable};

use super::budget::Budget;
use super::category::Category;
use super::transaction::Transaction;

/// Immutable bundle of caller-supplied inputs for one aggregation pass.
///
/// Plays the aggregate-root role a ledger would, minus mutation and
/// persistence: the engine reads it, never writes it, and a fresh snapshot
/// is expected on every recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub base_currency: CurrencyCode,
    #[serde(default)]
    pub rates: RateTable,
}

impl Snapshot {
    pub fn new(base_currency: CurrencyCode) -> Self {
        Self {
            categories: Vec::new(),
            budgets: Vec::new(),
            transactions: Vec::new(),
            base_currency,
            rates: RateTable::new(),
        }
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id;
        self.budgets.push(budget);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}
