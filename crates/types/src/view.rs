//! Local materialized view of one account's ledger records.

use crate::account::AccountId;
use crate::record::FileRecord;
use serde::{Deserialize, Serialize};

/// The records the ledger holds for one account, in insertion order.
///
/// A view is built in full from ledger reads and then published atomically;
/// it is never patched in place. `records` is ordered by ledger index
/// (0..N-1) and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryView {
    account: AccountId,
    records: Vec<FileRecord>,
}

impl RegistryView {
    pub fn new(account: AccountId, records: Vec<FileRecord>) -> Self {
        Self { account, records }
    }

    /// Empty view for an account with no synced records yet.
    pub fn empty(account: AccountId) -> Self {
        Self {
            account,
            records: Vec::new(),
        }
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_preserves_insertion_order() {
        let records = vec![
            FileRecord::new_at_time("Qm1", "b.txt", 30),
            FileRecord::new_at_time("Qm2", "a.txt", 10),
            FileRecord::new_at_time("Qm3", "c.txt", 20),
        ];
        let view = RegistryView::new(AccountId::from("0x1"), records.clone());

        assert_eq!(view.len(), 3);
        assert_eq!(view.records(), records.as_slice());
    }

    #[test]
    fn test_empty_view() {
        let view = RegistryView::empty(AccountId::from("0x1"));
        assert!(view.is_empty());
        assert_eq!(view.account().as_str(), "0x1");
    }
}
