//! HTTP backend talking to a ledger node that fronts the deployed contract.

use crate::client::LedgerClient;
use crate::errors::{LedgerError, Result};
use async_trait::async_trait;
use chaindrive_types::{AccountId, FileRecord, TxReceipt};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lightweight REST client for the ledger node's contract surface.
#[derive(Clone, Debug)]
pub struct HttpLedgerClient {
    client: reqwest::Client,
    base_url: String,
    contract_address: String,
}

impl HttpLedgerClient {
    pub fn new(base_url: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            contract_address: contract_address.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn files_endpoint(&self, account: &AccountId, suffix: &str) -> String {
        self.endpoint(&format!(
            "contract/{}/accounts/{}/files{}",
            self.contract_address, account, suffix
        ))
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn network_id(&self) -> Result<String> {
        let url = self.endpoint("network");
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            let dto = response.json::<NetworkResponse>().await?;
            Ok(dto.network_id)
        } else {
            Err(LedgerError::Call(format!(
                "network lookup failed (status {})",
                response.status()
            )))
        }
    }

    async fn count(&self, account: &AccountId) -> Result<u64> {
        let url = self.files_endpoint(account, "/length");
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            let dto = response.json::<LengthResponse>().await?;
            Ok(dto.length)
        } else {
            Err(LedgerError::Call(format!(
                "length query for {account} failed (status {})",
                response.status()
            )))
        }
    }

    async fn record_at(&self, account: &AccountId, index: u64) -> Result<FileRecord> {
        let url = self.files_endpoint(account, &format!("/{index}"));
        let response = self.client.get(url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<FileRecord>().await?),
            StatusCode::NOT_FOUND | StatusCode::RANGE_NOT_SATISFIABLE => {
                let len = response
                    .json::<LengthResponse>()
                    .await
                    .map(|dto| dto.length)
                    .unwrap_or(0);
                Err(LedgerError::IndexOutOfRange { index, len })
            }
            status => Err(LedgerError::Call(format!(
                "record {index} query for {account} failed (status {status})"
            ))),
        }
    }

    async fn append(
        &self,
        account: &AccountId,
        record: &FileRecord,
        cost_ceiling: u64,
    ) -> Result<TxReceipt> {
        let url = self.files_endpoint(account, "");
        let request = AppendRequest {
            record,
            cost_ceiling,
        };
        debug!(%account, name = %record.name, cost_ceiling, "submitting ledger append");

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();

        match status {
            status if status.is_success() => Ok(response.json::<TxReceipt>().await?),
            StatusCode::PAYMENT_REQUIRED | StatusCode::FORBIDDEN | StatusCode::CONFLICT => {
                let reason = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                Err(LedgerError::AppendRejected(reason))
            }
            status => Err(LedgerError::Call(format!(
                "append for {account} failed (status {status})"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NetworkResponse {
    network_id: String,
}

#[derive(Debug, Deserialize)]
struct LengthResponse {
    length: u64,
}

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    #[serde(flatten)]
    record: &'a FileRecord,
    cost_ceiling: u64,
}
