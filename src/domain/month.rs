use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// A calendar month, the granularity budgets are defined at.
///
/// Fields are private and deserialization routes through [`YearMonth::new`],
/// so every value in circulation holds a month in `1..=12` and the date
/// conversions below cannot fail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Wire shape for [`YearMonth`], validated on the way in.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = ReportError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        YearMonth::new(raw.year, raw.month)
    }
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ReportError> {
        if !(1..=12).contains(&month) {
            return Err(ReportError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.plus_months(1).first_day() - Duration::days(1)
    }

    pub fn plus_months(&self, months: i32) -> Self {
        let mut year = self.year;
        let mut month = self.month as i32 + months;
        while month > 12 {
            month -= 12;
            year += 1;
        }
        while month < 1 {
            month += 12;
            year -= 1;
        }
        Self {
            year,
            month: month as u32,
        }
    }

    /// Count of calendar months from `self` through `other`, inclusive.
    /// Zero or negative when `other` precedes `self`.
    pub fn months_through(&self, other: YearMonth) -> i64 {
        other.index() - self.index() + 1
    }

    fn index(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| ReportError::InvalidMonth(value.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ReportError::InvalidMonth(value.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ReportError::InvalidMonth(value.to_string()))?;
        Self::new(year, month)
    }
}
