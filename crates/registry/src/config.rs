//! Registry configuration: contract address and network metadata.

use crate::errors::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_cost_ceiling() -> u64 {
    300_000
}

/// Endpoints and contract metadata the registry needs to reach its
/// collaborators. Loaded from a TOML file; the cost ceiling bounds every
/// ledger append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the ledger node fronting the contract.
    pub ledger_endpoint: String,

    /// Network the contract is expected to be deployed on.
    pub network_id: String,

    /// Address of the deployed file-registry contract.
    pub contract_address: String,

    /// Base URL of the object store's API.
    pub store_api_endpoint: String,

    /// Public gateway base for retrieval URLs.
    pub gateway_base: String,

    /// Resource budget submitted with each append.
    #[serde(default = "default_cost_ceiling")]
    pub append_cost_ceiling: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            ledger_endpoint: "http://127.0.0.1:9090".to_string(),
            network_id: "local".to_string(),
            contract_address: String::new(),
            store_api_endpoint: "http://127.0.0.1:5001".to_string(),
            gateway_base: "https://ipfs.io/ipfs".to_string(),
            append_cost_ceiling: default_cost_ceiling(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw)
            .map_err(|err| RegistryError::Environment(format!("invalid registry config: {err}")))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            RegistryError::Environment(format!(
                "cannot read registry config {}: {err}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reject configs that cannot identify the deployed contract.
    pub fn validate(&self) -> Result<()> {
        if self.contract_address.is_empty() {
            return Err(RegistryError::Environment(
                "contract address not configured".to_string(),
            ));
        }
        if self.network_id.is_empty() {
            return Err(RegistryError::Environment(
                "network id not configured".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
ledger_endpoint = "http://ledger.example:9090"
network_id = "testnet-7"
contract_address = "0xc0ffee"
store_api_endpoint = "http://store.example:5001"
gateway_base = "https://gateway.example/ipfs"
"#;

    #[test]
    fn test_parse_with_default_cost_ceiling() {
        let config = RegistryConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.network_id, "testnet-7");
        assert_eq!(config.contract_address, "0xc0ffee");
        assert_eq!(config.append_cost_ceiling, 300_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = RegistryConfig::load(file.path()).unwrap();
        assert_eq!(config.ledger_endpoint, "http://ledger.example:9090");
    }

    #[test]
    fn test_missing_file_is_environment_error() {
        let err = RegistryConfig::load("/nonexistent/registry.toml").unwrap_err();
        assert!(matches!(err, RegistryError::Environment(_)));
    }

    #[test]
    fn test_validate_rejects_missing_contract() {
        let config = RegistryConfig::default();
        assert!(matches!(
            config.validate(),
            Err(RegistryError::Environment(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_environment_error() {
        let err = RegistryConfig::from_toml_str("network_id = [").unwrap_err();
        assert!(matches!(err, RegistryError::Environment(_)));
    }
}
