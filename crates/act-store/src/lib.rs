//! # act-store
//!
//! Persistence for the activity tracker.
//!
//! Two keys are stored: `region` (the selected region) and `tickets` (the
//! full collection, newest first). Provides:
//! - [`KeyValueStore`], with a JSON-file backend ([`FileKvStore`]) and an
//!   in-memory backend ([`MemoryKvStore`])
//! - [`TicketStore`], which migrates legacy records on load, recovers from an
//!   unreadable collection, and rewrites the collection on every change

pub mod error;
pub mod kv;
pub mod tickets;

pub use error::StoreError;
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use tickets::{REGION_KEY, Snapshot, TICKETS_KEY, TicketStore};

/// Open the file-backed ticket store at `path`.
///
/// # Errors
///
/// See [`FileKvStore::open`].
pub fn open_file(path: impl Into<std::path::PathBuf>) -> Result<TicketStore<FileKvStore>, StoreError> {
    Ok(TicketStore::new(FileKvStore::open(path)?))
}
