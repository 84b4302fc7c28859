//! The ledger client seam consumed by the registry core.

use crate::errors::Result;
use async_trait::async_trait;
use chaindrive_types::{AccountId, FileRecord, TxReceipt};

/// Read/write access to the per-account append-only record ledger.
///
/// No ordering guarantee exists between a successful [`append`] and a
/// subsequently observed [`count`]: the ledger pushes no notifications, so
/// callers refresh by issuing an explicit re-read after appending.
///
/// [`append`]: LedgerClient::append
/// [`count`]: LedgerClient::count
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Identifier of the network the ledger is serving. Initialization
    /// verifies this against the network the contract is deployed on.
    async fn network_id(&self) -> Result<String>;

    /// Number of records currently stored for `account`.
    async fn count(&self, account: &AccountId) -> Result<u64>;

    /// Record at zero-based `index` for `account`.
    ///
    /// Fails with [`LedgerError::IndexOutOfRange`] when the ledger state
    /// changed concurrently and `index` no longer exists; callers must
    /// tolerate that race.
    ///
    /// [`LedgerError::IndexOutOfRange`]: crate::errors::LedgerError::IndexOutOfRange
    async fn record_at(&self, account: &AccountId, index: u64) -> Result<FileRecord>;

    /// Submit `record` for durable storage under `account`, bounded by
    /// `cost_ceiling`, and suspend until the ledger accepts or rejects it.
    ///
    /// [`LedgerError::AppendRejected`] is not retryable without fresh user
    /// action; [`LedgerError::Call`] covers transport failures the caller
    /// may retry.
    ///
    /// [`LedgerError::AppendRejected`]: crate::errors::LedgerError::AppendRejected
    /// [`LedgerError::Call`]: crate::errors::LedgerError::Call
    async fn append(
        &self,
        account: &AccountId,
        record: &FileRecord,
        cost_ceiling: u64,
    ) -> Result<TxReceipt>;
}
