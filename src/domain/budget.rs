use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

use super::category::EntryStatus;
use super::month::YearMonth;

/// A planned amount for one category: recurring per month within an
/// optional window, or attached to a single month.
///
/// The month fields are kept flat rather than as a cadence enum so the
/// malformed shapes the upstream store can hand over (recurring without a
/// `start_month`, one-time without a `month`) stay representable; both
/// evaluate to zero applicable months.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub status: EntryStatus,
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<YearMonth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<YearMonth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<YearMonth>,
}

impl Budget {
    /// A monthly budget applying from `start_month` with no end bound.
    pub fn recurring(
        category_id: Uuid,
        amount: Decimal,
        currency: CurrencyCode,
        start_month: YearMonth,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            currency,
            status: EntryStatus::Active,
            recurring: true,
            start_month: Some(start_month),
            end_month: None,
            month: None,
        }
    }

    /// A budget applying to exactly one month.
    pub fn one_time(
        category_id: Uuid,
        amount: Decimal,
        currency: CurrencyCode,
        month: YearMonth,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            currency,
            status: EntryStatus::Active,
            recurring: false,
            start_month: None,
            end_month: None,
            month: Some(month),
        }
    }

    pub fn until(mut self, end_month: YearMonth) -> Self {
        self.end_month = Some(end_month);
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
