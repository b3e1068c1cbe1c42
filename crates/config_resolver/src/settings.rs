//! Provider settings
//!
//! Name/value pairs handed to the provider by the host at initialization.
//! The host parses its own configuration format; this type only models the
//! resulting key/value view and the lookup contract.

use std::collections::HashMap;

use contracts::ContractError;
use serde::{Deserialize, Serialize};

use crate::resolver::resolve_targets;

/// Conventional key holding the delimited target list
pub const TARGETS_KEY: &str = "targets";

/// Provider-configuration name/value pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSettings {
    values: HashMap<String, String>,
}

impl ProviderSettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one setting, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a required setting
    ///
    /// # Errors
    /// Returns [`ContractError::MissingSetting`] when the key is absent. A
    /// present-but-empty value is not an error.
    pub fn value(&self, key: &str) -> Result<&str, ContractError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContractError::missing_setting(key))
    }

    /// Resolve the target list stored under `key`
    ///
    /// # Errors
    /// Returns [`ContractError::MissingSetting`] when the key is absent;
    /// an empty or all-blank value resolves to an empty list.
    pub fn targets(&self, key: &str) -> Result<Vec<String>, ContractError> {
        let raw = self.value(key)?;
        Ok(resolve_targets(Some(raw)))
    }
}

impl<K, V> FromIterator<(K, V)> for ProviderSettings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
