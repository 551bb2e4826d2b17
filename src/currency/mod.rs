use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One caller-supplied conversion rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRate {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: Decimal,
}

/// Undated exchange-rate table supplied by the caller per aggregation pass.
///
/// Conversion is advisory: a missing pair yields `None` and callers fall
/// back to the unconverted amount rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RateTable {
    #[serde(default)]
    rates: Vec<ExchangeRate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self { rates: Vec::new() }
    }

    pub fn add_rate(&mut self, from: CurrencyCode, to: CurrencyCode, rate: Decimal) {
        self.rates.push(ExchangeRate { from, to, rate });
    }

    pub fn all_rates(&self) -> &[ExchangeRate] {
        &self.rates
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Lookup order: parity, direct entry, inverse entry (reciprocal).
    /// Returns `None` when no usable rate exists.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Option<Decimal> {
        if from == to {
            return Some(amount);
        }
        if let Some(rate) = self.direct(from, to) {
            return Some(amount * rate);
        }
        if let Some(rate) = self.direct(to, from) {
            if rate.is_zero() {
                return None;
            }
            return Some(amount / rate);
        }
        None
    }

    fn direct(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|entry| &entry.from == from && &entry.to == to)
            .map(|entry| entry.rate)
    }
}

/// Per-currency accumulator with explicit zero-initialised entries.
///
/// A currency is recorded the first time it is seen, even when its running
/// total later nets to zero; `positive_codes` is the stricter view used for
/// the displayed mixed-currency flag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CurrencyTotals(BTreeMap<CurrencyCode, Decimal>);

impl CurrencyTotals {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn add(&mut self, code: &CurrencyCode, amount: Decimal) {
        *self.0.entry(code.clone()).or_insert(Decimal::ZERO) += amount;
    }

    pub fn merge(&mut self, other: &CurrencyTotals) {
        for (code, amount) in &other.0 {
            self.add(code, *amount);
        }
    }

    pub fn get(&self, code: &CurrencyCode) -> Decimal {
        self.0.get(code).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &Decimal)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Currencies whose recorded total is strictly positive.
    pub fn positive_codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.0
            .iter()
            .filter(|(_, amount)| **amount > Decimal::ZERO)
            .map(|(code, _)| code)
    }

    /// Per-currency `budget − actual`, keyed over the union of both maps.
    pub fn difference(budget: &CurrencyTotals, actual: &CurrencyTotals) -> CurrencyTotals {
        let mut out = CurrencyTotals::new();
        for (code, amount) in &budget.0 {
            out.add(code, *amount);
        }
        for (code, amount) in &actual.0 {
            out.add(code, -*amount);
        }
        out
    }
}
