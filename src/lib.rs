#![doc(test(attr(deny(warnings))))]

//! Budget Rollup computes budget-vs-actual aggregates over caller-supplied
//! snapshots: category forests, report periods, per-currency totals, and
//! double-count-free parent/child roll-ups.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_rollup=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Budget Rollup tracing initialized.");
    });
}
