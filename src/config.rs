//! Library configuration
//!
//! One [`RosterConfig`] gathers the settings of each component. All sections
//! default sensibly, so a YAML file only needs the keys it overrides:
//!
//! ```yaml
//! resolver:
//!   catch_all_department: Administration
//!   email_domain: example.edu
//! search:
//!   mode: partial
//! ```

use crate::algo::{HierarchyConfig, KeyOrder, SearchMode};
use crate::org::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Defaults for [`RosterSearch`](crate::algo::RosterSearch) callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub key_order: KeyOrder,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub resolver: ResolverConfig,
    pub hierarchy: HierarchyConfig,
    pub search: SearchConfig,
}

impl RosterConfig {
    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: RosterConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let config = Self::from_yaml_str(&fs::read_to_string(path)?)?;
        info!("Loaded roster config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.resolver.catch_all_department.trim().is_empty() {
            return Err(ConfigError::Invalid("catch_all_department is blank".to_string()));
        }

        if self.resolver.manager_names.is_empty() {
            return Err(ConfigError::Invalid("manager_names is empty".to_string()));
        }

        if let Some(name) = self
            .resolver
            .manager_names
            .iter()
            .find(|n| n.first_name.trim().is_empty() || n.last_name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "manager name '{} {}' needs both parts",
                name.first_name, name.last_name
            )));
        }

        if self.hierarchy.tiers.is_empty() {
            return Err(ConfigError::Invalid("hierarchy has no rank tiers".to_string()));
        }

        if let Some(tier) = self.hierarchy.tiers.iter().find(|t| t.roles.is_empty()) {
            return Err(ConfigError::Invalid(format!("rank tier '{}' lists no roles", tier.label)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DepartmentKind, ManagerRole};

    #[test]
    fn test_default_is_valid() {
        assert!(RosterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = RosterConfig::from_yaml_str(
            "resolver:\n  email_domain: example.edu\n  default_kind: music\nsearch:\n  mode: partial\n",
        )
        .unwrap();

        assert_eq!(config.resolver.email_domain, "example.edu");
        assert_eq!(config.resolver.default_kind, DepartmentKind::Music);
        assert_eq!(config.resolver.catch_all_department, "Senior Management");
        assert_eq!(config.search.mode, SearchMode::Partial);
        assert_eq!(config.search.key_order, KeyOrder::LastThenFirst);
        assert_eq!(config.hierarchy, HierarchyConfig::default());
    }

    #[test]
    fn test_custom_tiers() {
        let yaml = "hierarchy:\n  tiers:\n    - label: top\n      roles: [principal, dean]\n";
        let config = RosterConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.hierarchy.tiers.len(), 1);
        assert_eq!(config.hierarchy.tiers[0].roles, vec![ManagerRole::Principal, ManagerRole::Dean]);
    }

    #[test]
    fn test_rejects_invalid() {
        let err = RosterConfig::from_yaml_str("resolver:\n  catch_all_department: '  '\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = RosterConfig::from_yaml_str("resolver:\n  manager_names: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = RosterConfig::from_yaml_str("hierarchy:\n  tiers: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = RosterConfig::from_yaml_str("search: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = RosterConfig::default();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(RosterConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
