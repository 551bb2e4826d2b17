use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

use super::category::CategoryKind;

/// One movement of money as the upstream store records it, soft deletes
/// included; the engine filters rather than assuming a pre-cleaned list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    /// Signed as recorded; aggregation uses the absolute value.
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        category_id: Option<Uuid>,
        kind: TransactionKind,
        date: NaiveDate,
        amount: Decimal,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            category_id,
            amount,
            currency,
            kind,
            status: TransactionStatus::Completed,
            date,
            created_at: None,
            deleted_at: None,
        }
    }

    pub fn cancelled(mut self) -> Self {
        self.status = TransactionStatus::Cancelled;
        self
    }

    pub fn soft_deleted(mut self, at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(at);
        self
    }

    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Cancelled or soft-deleted transactions are excluded from every
    /// aggregate, regardless of date or category match.
    pub fn counts_for_reporting(&self) -> bool {
        !matches!(self.status, TransactionStatus::Cancelled) && self.deleted_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    TransferIn,
    TransferOut,
}

impl TransactionKind {
    /// Whether this kind lands in the given report section.
    ///
    /// Outgoing transfers report as expense-like; incoming transfers stay
    /// out of Income (only plain `Income` counts there).
    pub fn matches_section(&self, section: CategoryKind) -> bool {
        match section {
            CategoryKind::Income => matches!(self, TransactionKind::Income),
            CategoryKind::Expense => {
                matches!(self, TransactionKind::Expense | TransactionKind::TransferOut)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_out_reports_as_expense() {
        assert!(TransactionKind::TransferOut.matches_section(CategoryKind::Expense));
        assert!(!TransactionKind::TransferOut.matches_section(CategoryKind::Income));
    }

    #[test]
    fn transfer_in_reports_nowhere() {
        assert!(!TransactionKind::TransferIn.matches_section(CategoryKind::Income));
        assert!(!TransactionKind::TransferIn.matches_section(CategoryKind::Expense));
    }

    #[test]
    fn cancelled_and_deleted_do_not_count() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let base = Transaction::new(
            Uuid::new_v4(),
            Some(Uuid::new_v4()),
            TransactionKind::Expense,
            date,
            Decimal::from(10),
            CurrencyCode::new("USD"),
        );
        assert!(base.counts_for_reporting());
        assert!(!base.clone().cancelled().counts_for_reporting());
        assert!(!base.soft_deleted(Utc::now()).counts_for_reporting());
    }

    #[test]
    fn serde_round_trip_preserves_optionals() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let txn = Transaction::new(
            Uuid::new_v4(),
            None,
            TransactionKind::Income,
            date,
            Decimal::new(1999, 2),
            CurrencyCode::new("EUR"),
        );
        let json = serde_json::to_string(&txn).expect("serialize");
        let back: Transaction = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, txn);
        assert!(back.created_at.is_none());
    }
}
