use thiserror::Error;

/// Error type for report input validation failures.
///
/// Aggregation itself is total over its inputs and degrades gracefully
/// (missing rates, orphaned categories, malformed budgets); only the
/// constructors below can reject a value.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}
