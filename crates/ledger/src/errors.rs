use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger connection not initialized")]
    Unavailable,

    #[error("Ledger call failed: {0}")]
    Call(String),

    #[error("Record index {index} out of range (ledger reports {len})")]
    IndexOutOfRange { index: u64, len: u64 },

    #[error("Append rejected: {0}")]
    AppendRejected(String),
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            LedgerError::Unavailable
        } else {
            LedgerError::Call(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
