//! In-memory ledger backend (for testing and local mode).

use crate::client::LedgerClient;
use crate::errors::{LedgerError, Result};
use async_trait::async_trait;
use chaindrive_types::{AccountId, FileRecord, TxReceipt};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Append-only per-account record store held in process memory.
#[derive(Clone)]
pub struct MemoryLedger {
    inner: Arc<MemoryLedgerInner>,
}

struct MemoryLedgerInner {
    /// Account -> records in insertion order.
    records: RwLock<HashMap<AccountId, Vec<FileRecord>>>,

    /// Minimum cost ceiling an append must carry; lower submissions are
    /// rejected, mirroring an underfunded transaction.
    cost_floor: u64,

    network_id: String,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::with_cost_floor(0)
    }

    pub fn with_cost_floor(cost_floor: u64) -> Self {
        Self {
            inner: Arc::new(MemoryLedgerInner {
                records: RwLock::new(HashMap::new()),
                cost_floor,
                network_id: "local".to_string(),
            }),
        }
    }

    pub fn with_network_id(network_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(MemoryLedgerInner {
                records: RwLock::new(HashMap::new()),
                cost_floor: 0,
                network_id: network_id.into(),
            }),
        }
    }

    /// Seed a record directly, bypassing the append path (test setup).
    pub fn seed(&self, account: &AccountId, record: FileRecord) {
        let mut records = self.inner.records.write();
        records.entry(account.clone()).or_default().push(record);
    }

    fn tx_hash(account: &AccountId, index: u64, content_id: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(account.as_str().as_bytes());
        hasher.update(&index.to_be_bytes());
        hasher.update(content_id.as_bytes());
        format!("0x{}", hex::encode(hasher.finalize().as_bytes()))
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for MemoryLedger {
    async fn network_id(&self) -> Result<String> {
        Ok(self.inner.network_id.clone())
    }

    async fn count(&self, account: &AccountId) -> Result<u64> {
        let records = self.inner.records.read();
        Ok(records.get(account).map(|list| list.len()).unwrap_or(0) as u64)
    }

    async fn record_at(&self, account: &AccountId, index: u64) -> Result<FileRecord> {
        let records = self.inner.records.read();
        let list = records.get(account).map(Vec::as_slice).unwrap_or(&[]);
        list.get(index as usize)
            .cloned()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                len: list.len() as u64,
            })
    }

    async fn append(
        &self,
        account: &AccountId,
        record: &FileRecord,
        cost_ceiling: u64,
    ) -> Result<TxReceipt> {
        if cost_ceiling < self.inner.cost_floor {
            return Err(LedgerError::AppendRejected(format!(
                "cost ceiling {cost_ceiling} below required {}",
                self.inner.cost_floor
            )));
        }

        let mut records = self.inner.records.write();
        let list = records.entry(account.clone()).or_default();
        let index = list.len() as u64;
        list.push(record.clone());

        Ok(TxReceipt {
            tx_hash: Self::tx_hash(account, index, &record.content_id),
            block_number: Some(index + 1),
            resource_used: self.inner.cost_floor.min(cost_ceiling),
        })
    }
}
