//! Acknowledgement for a ledger append.

use serde::{Deserialize, Serialize};

/// Receipt returned once the ledger accepts an appended record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Identifier of the accepted transaction.
    pub tx_hash: String,
    /// Block the transaction was included in, when already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Metered resource consumption charged against the cost ceiling.
    pub resource_used: u64,
}
