//! Account identity as reported by the external provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque signing identity recognized by the provider.
///
/// Produced by the provider's account list; the first entry of that list is
/// the active identity. The registry never mutates an account id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display_and_str() {
        let account = AccountId::new("0xabc123");
        assert_eq!(account.as_str(), "0xabc123");
        assert_eq!(account.to_string(), "0xabc123");
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let account = AccountId::from("0xdeadbeef");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"0xdeadbeef\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
