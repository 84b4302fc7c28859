//! File-registry synchronization core.
//!
//! Orchestrates the ledger client and account watcher to keep an ordered,
//! per-account list of file records materialized in memory, and to append
//! new records after an object-store upload succeeds. See
//! [`FileRegistrySync`] for the sync semantics (wholesale rebuilds,
//! last-started-wins, fail-safe on partial reads).

pub mod config;
pub mod errors;
pub mod sync;
pub mod watcher;

pub use config::RegistryConfig;
pub use errors::{RegistryError, Result};
pub use sync::{FileRegistrySync, SyncPhase};
pub use watcher::{account_channel, AccountFeed, AccountHandle, AccountWatcher};
