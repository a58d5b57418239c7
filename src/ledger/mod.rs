//! Ledger domain models, persistence-friendly types, and helpers.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod taxonomy;

pub use entry::{EarningEntry, ExpenseEntry};
pub use ledger::Ledger;
pub use taxonomy::{group_for, CategoryGroup, CATEGORY_GROUPS};
