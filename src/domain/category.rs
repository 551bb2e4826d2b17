use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises budgets and transactions for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    pub parent_id: Option<Uuid>,
    pub status: EntryStatus,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            parent_id: None,
            status: EntryStatus::Active,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.status = EntryStatus::Inactive;
        self
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, EntryStatus::Active)
    }
}

/// Report sections a category can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Income,
    Expense,
}

/// Lifecycle state shared by categories and budgets; only active entries
/// participate in reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EntryStatus {
    #[default]
    Active,
    Inactive,
}
