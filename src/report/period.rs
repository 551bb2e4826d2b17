use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::YearMonth;
use crate::errors::ReportError;

/// Reporting window presets the caller can navigate between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodKind {
    Month,
    SixMonths,
    Year,
}

impl PeriodKind {
    pub fn months_spanned(&self) -> i32 {
        match self {
            PeriodKind::Month => 1,
            PeriodKind::SixMonths => 6,
            PeriodKind::Year => 12,
        }
    }

    /// Shifts the anchor by whole periods; `steps` may be negative.
    pub fn step(&self, anchor: YearMonth, steps: i32) -> YearMonth {
        anchor.plus_months(self.months_spanned() * steps)
    }
}

/// Inclusive date window, always aligned to full-month boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Resolves the window ending at the anchor month: the anchor month
    /// itself, or the trailing six or twelve months.
    pub fn resolve(anchor: YearMonth, kind: PeriodKind) -> Self {
        let start = anchor.plus_months(-(kind.months_spanned() - 1)).first_day();
        Self {
            start,
            end: anchor.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn start_month(&self) -> YearMonth {
        YearMonth::from_date(self.start)
    }

    pub fn end_month(&self) -> YearMonth {
        YearMonth::from_date(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn single_month_covers_anchor_only() {
        let range = DateRange::resolve(ym(2024, 4), PeriodKind::Month);
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2024, 4, 30));
    }

    #[test]
    fn six_months_is_inclusive_of_anchor() {
        let range = DateRange::resolve(ym(2024, 4), PeriodKind::SixMonths);
        assert_eq!(range.start, date(2023, 11, 1));
        assert_eq!(range.end, date(2024, 4, 30));
    }

    #[test]
    fn trailing_year_spans_twelve_months() {
        let range = DateRange::resolve(ym(2024, 12), PeriodKind::Year);
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn navigation_round_trips_for_every_kind() {
        let anchor = ym(2024, 2);
        for kind in [PeriodKind::Month, PeriodKind::SixMonths, PeriodKind::Year] {
            let forward = kind.step(anchor, 1);
            assert_eq!(kind.step(forward, -1), anchor);
            assert_eq!(
                DateRange::resolve(kind.step(forward, -1), kind),
                DateRange::resolve(anchor, kind)
            );
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(DateRange::new(date(2024, 5, 1), date(2024, 4, 30)).is_err());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::resolve(ym(2024, 4), PeriodKind::Month);
        assert!(range.contains(date(2024, 4, 1)));
        assert!(range.contains(date(2024, 4, 30)));
        assert!(!range.contains(date(2024, 5, 1)));
    }
}
