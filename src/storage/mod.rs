pub mod json_backend;

use crate::{errors::TrackerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over the single-slot persistence backend.
///
/// `load` never fails on an absent or malformed slot; both yield the
/// zero-state ledger so a corrupted file cannot brick the tracker.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::{app_data_dir, JsonStorage};
