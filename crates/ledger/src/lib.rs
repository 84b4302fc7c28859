//! Client for the external append-only file ledger.
//!
//! The ledger is a deployed contract keyed by account: it reports a record
//! count per account, serves records by zero-based index, and accepts
//! appends submitted with a caller-supplied cost ceiling. This crate defines
//! the [`LedgerClient`] seam the registry core consumes, an HTTP backend
//! that talks to a ledger node fronting the contract, and an in-memory
//! backend for tests and local mode.

pub mod client;
pub mod errors;
pub mod http;
pub mod memory;

pub use client::LedgerClient;
pub use errors::{LedgerError, Result};
pub use http::HttpLedgerClient;
pub use memory::MemoryLedger;
