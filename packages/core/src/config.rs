//! Core Configuration
//!
//! Runtime options for the core package, loaded from JSON.

use crate::sanitization::trusted_types::is_valid_policy_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the policy used to promote pre-approved strings without sanitizing them.
pub const DEFAULT_POLICY_NAME: &str = "angular#unsafe-bypass";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    pub trusted_types: TrustedTypesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustedTypesConfig {
    /// When false, every `to_trusted_*` call hands back the raw string.
    pub enabled: bool,
    pub policy_name: String,
}

impl Default for TrustedTypesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy_name: DEFAULT_POLICY_NAME.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: CoreConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let name = &self.trusted_types.policy_name;
        anyhow::ensure!(
            is_valid_policy_name(name),
            "trustedTypes.policyName \"{}\" is not a valid Trusted Types policy name",
            name
        );
        Ok(())
    }
}
