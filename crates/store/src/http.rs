//! HTTP backend for an IPFS-style object store API.

use crate::errors::{Result, StoreError};
use crate::store::ObjectStore;
use async_trait::async_trait;
use chaindrive_types::gateway_url;
use serde::Deserialize;
use tracing::debug;

/// Client for a store node's `add` endpoint plus its public read gateway.
#[derive(Clone, Debug)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    api_base: String,
    gateway_base: String,
}

impl HttpObjectStore {
    pub fn new(api_base: impl Into<String>, gateway_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            gateway_base: gateway_base.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Public URL the stored bytes can be fetched from.
    pub fn retrieval_url(&self, content_id: &str) -> String {
        gateway_url(&self.gateway_base, content_id)
    }

    fn add_endpoint(&self) -> String {
        format!("{}/api/v0/add", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(&self, bytes: Vec<u8>) -> Result<String> {
        let size = bytes.len();
        let response = self
            .client
            .post(self.add_endpoint())
            .body(bytes)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StoreError::UploadFailed(format!(
                "store rejected upload (status {status})"
            )));
        }

        let dto = response.json::<AddResponse>().await?;
        if dto.hash.is_empty() {
            return Err(StoreError::UploadFailed(
                "store acknowledged without a content id".to_string(),
            ));
        }

        debug!(content_id = %dto.hash, size, "object store upload acknowledged");
        Ok(dto.hash)
    }
}

#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(alias = "Hash")]
    hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_endpoint_and_retrieval_url() {
        let store = HttpObjectStore::new("http://127.0.0.1:5001/", "https://ipfs.io/ipfs");
        assert_eq!(store.add_endpoint(), "http://127.0.0.1:5001/api/v0/add");
        assert_eq!(store.retrieval_url("QmAbc"), "https://ipfs.io/ipfs/QmAbc");
    }
}
