//! Domain models consumed by the aggregation engine, treated as immutable
//! snapshots per call.

pub mod budget;
pub mod category;
pub mod month;
pub mod snapshot;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, CategoryKind, EntryStatus};
pub use month::YearMonth;
pub use snapshot::Snapshot;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
