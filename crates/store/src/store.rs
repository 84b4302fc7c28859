//! The object-store seam consumed by the registry core.

use crate::errors::Result;
use async_trait::async_trait;

/// Upload access to a content-addressed store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` and return the content-derived identifier once the
    /// store acknowledges receipt.
    async fn upload(&self, bytes: Vec<u8>) -> Result<String>;
}
