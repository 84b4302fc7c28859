use chaindrive_ledger::LedgerError;
use chaindrive_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// The host environment is misconfigured (no provider account, wrong
    /// network, unreadable config). Fatal at initialization.
    #[error("Environment failure: {0}")]
    Environment(String),

    /// Operation invoked before a successful `initialize()`.
    #[error("Registry not initialized")]
    NotReady,

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
