//! Shared data model for the chaindrive workspace.
//!
//! Records stored on the ledger are append-only: a [`FileRecord`] is created
//! once, after a successful object-store upload, and never mutated. The
//! [`RegistryView`] is the local, per-account materialization of those
//! records, rebuilt wholesale on every sync.

pub mod account;
pub mod receipt;
pub mod record;
pub mod view;

pub use account::AccountId;
pub use receipt::TxReceipt;
pub use record::{file_type_of, unix_now, FileRecord};
pub use view::RegistryView;

/// Build the public retrieval URL for a content identifier:
/// `<gateway-base>/<content-id>`.
pub fn gateway_url(gateway_base: &str, content_id: &str) -> String {
    format!("{}/{}", gateway_base.trim_end_matches('/'), content_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_url_joins_without_double_slash() {
        assert_eq!(
            gateway_url("https://ipfs.io/ipfs/", "QmAbc"),
            "https://ipfs.io/ipfs/QmAbc"
        );
        assert_eq!(
            gateway_url("https://ipfs.io/ipfs", "QmAbc"),
            "https://ipfs.io/ipfs/QmAbc"
        );
    }
}
