//! The file-registry synchronization core.
//!
//! [`FileRegistrySync`] materializes the ledger's per-account record list
//! into a local [`RegistryView`] and drives the upload/append/refresh
//! workflow. The view is always rebuilt wholesale from ledger reads and
//! published atomically; a failed rebuild leaves the previous view intact.
//! When rebuilds overlap, only the most recently started one may commit
//! (last-started-wins), tracked with a generation counter.

use crate::config::RegistryConfig;
use crate::errors::{RegistryError, Result};
use crate::watcher::{AccountHandle, AccountWatcher};
use chaindrive_ledger::LedgerClient;
use chaindrive_store::ObjectStore;
use chaindrive_types::{AccountId, FileRecord, RegistryView, TxReceipt};
use futures::future::try_join_all;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Lifecycle of the registry within one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No environment resolved yet.
    Uninitialized,
    /// Environment resolved; the view may be stale or empty.
    Ready,
    /// A full view rebuild is in flight.
    Syncing,
    /// Initialization failed; terminal until the host restarts.
    Failed,
}

/// Orchestrates the ledger, object store, and account watcher into a
/// consistent local view of the active account's records.
pub struct FileRegistrySync {
    ledger: Arc<dyn LedgerClient>,
    store: Arc<dyn ObjectStore>,
    accounts: AccountHandle,
    config: RegistryConfig,
    view: RwLock<Option<RegistryView>>,
    phase: RwLock<SyncPhase>,
    /// Generation of the most recently started sync. A finished rebuild
    /// commits only while it still holds the newest generation.
    sync_generation: AtomicU64,
}

impl FileRegistrySync {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        store: Arc<dyn ObjectStore>,
        accounts: AccountHandle,
        config: RegistryConfig,
    ) -> Self {
        Self {
            ledger,
            store,
            accounts,
            config,
            view: RwLock::new(None),
            phase: RwLock::new(SyncPhase::Uninitialized),
            sync_generation: AtomicU64::new(0),
        }
    }

    pub fn phase(&self) -> SyncPhase {
        *self.phase.read()
    }

    /// The committed view, if any sync has completed for the current
    /// process.
    pub fn view(&self) -> Option<RegistryView> {
        self.view.read().clone()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve the environment: config, ledger network, and active account.
    ///
    /// On success the registry becomes Ready and a first sync runs (its
    /// failure is logged, not fatal, matching a refresh the user can simply
    /// retrigger). Any environment failure is terminal for this process;
    /// there is no automatic retry.
    pub async fn initialize(&self) -> Result<()> {
        if self.phase() != SyncPhase::Uninitialized {
            return Err(RegistryError::Environment(
                "initialize may only run once per process".to_string(),
            ));
        }

        if let Err(err) = self.config.validate() {
            return Err(self.fail_init(err));
        }

        let network = match self.ledger.network_id().await {
            Ok(network) => network,
            Err(err) => return Err(self.fail_init(err.into())),
        };
        if network != self.config.network_id {
            return Err(self.fail_init(RegistryError::Environment(format!(
                "contract {} expects network {}, ledger reports {network}",
                self.config.contract_address, self.config.network_id
            ))));
        }

        let Some(account) = self.accounts.current() else {
            return Err(self.fail_init(RegistryError::Environment(
                "provider resolved no account".to_string(),
            )));
        };

        *self.phase.write() = SyncPhase::Ready;
        info!(%account, network = %network, "registry initialized");

        if let Err(err) = self.sync().await {
            warn!(%err, "initial sync failed; view will refresh on the next trigger");
        }
        Ok(())
    }

    /// Rebuild the view from a fresh ledger read of the active account.
    ///
    /// Reads `count` then every index 0..count-1, builds the new view
    /// locally, and commits it atomically only if no newer sync started in
    /// the meantime and the account is still active. Any read failure
    /// abandons the rebuild and keeps the previous view.
    pub async fn sync(&self) -> Result<()> {
        if matches!(self.phase(), SyncPhase::Uninitialized | SyncPhase::Failed) {
            return Err(RegistryError::NotReady);
        }
        let Some(account) = self.accounts.current() else {
            return Err(RegistryError::Environment(
                "no active account to sync".to_string(),
            ));
        };

        let generation = self.sync_generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.phase.write() = SyncPhase::Syncing;
        debug!(%account, generation, "sync started");

        match self.read_records(&account).await {
            Ok(records) => {
                let newest = generation == self.sync_generation.load(Ordering::SeqCst);
                let still_active = self.accounts.current().as_ref() == Some(&account);
                if newest && still_active {
                    let count = records.len();
                    *self.view.write() = Some(RegistryView::new(account.clone(), records));
                    *self.phase.write() = SyncPhase::Ready;
                    info!(%account, count, "view rebuilt");
                } else {
                    debug!(%account, generation, "discarding superseded sync result");
                }
                Ok(())
            }
            Err(err) => {
                // The previous view stays in place for display.
                if generation == self.sync_generation.load(Ordering::SeqCst) {
                    *self.phase.write() = SyncPhase::Ready;
                }
                error!(%account, generation, %err, "sync abandoned");
                Err(err)
            }
        }
    }

    /// Upload bytes to the object store, append the resulting record to the
    /// ledger, then refresh the view with a fresh ledger read.
    ///
    /// The record is never placed into the view optimistically; the ledger
    /// stays the single source of truth. A failure before the append
    /// completes aborts the whole operation and leaves the view untouched.
    pub async fn upload_and_append(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<(FileRecord, TxReceipt)> {
        if matches!(self.phase(), SyncPhase::Uninitialized | SyncPhase::Failed) {
            return Err(RegistryError::NotReady);
        }
        let Some(account) = self.accounts.current() else {
            return Err(RegistryError::Environment(
                "no active account to append for".to_string(),
            ));
        };

        let content_id = self.store.upload(bytes).await?;
        let record = FileRecord::new(content_id, file_name);
        let receipt = self
            .ledger
            .append(&account, &record, self.config.append_cost_ceiling)
            .await?;
        info!(%account, name = %record.name, tx = %receipt.tx_hash, "record appended");

        // The append succeeded; a failed refresh only delays the view.
        if let Err(err) = self.sync().await {
            warn!(%err, "view refresh after append failed");
        }
        Ok((record, receipt))
    }

    /// Apply a provider notification and re-sync.
    ///
    /// Runs even when the reported set leaves the active account unchanged:
    /// any provider update (a reconnect included) refreshes the view, and
    /// the re-sync is idempotent.
    pub async fn handle_account_update(&self, accounts: &[AccountId]) -> Result<()> {
        let active = self.accounts.apply(accounts);
        debug!(?active, reported = accounts.len(), "provider account update");
        self.sync().await
    }

    /// Consume the watcher's notifications until every feed is dropped.
    pub async fn run(&self, mut watcher: AccountWatcher) {
        while let Some(accounts) = watcher.changed().await {
            if let Err(err) = self.handle_account_update(&accounts).await {
                warn!(%err, "account update not applied to view");
            }
        }
        debug!("account feed closed; watcher loop stopped");
    }

    async fn read_records(&self, account: &AccountId) -> Result<Vec<FileRecord>> {
        let count = self.ledger.count(account).await?;
        let reads = (0..count).map(|index| self.ledger.record_at(account, index));
        // Ordered join: results come back index-ordered and the first
        // failure abandons the whole rebuild.
        let records = try_join_all(reads).await?;
        Ok(records)
    }

    fn fail_init(&self, err: RegistryError) -> RegistryError {
        *self.phase.write() = SyncPhase::Failed;
        error!(%err, "registry initialization failed");
        err
    }
}
