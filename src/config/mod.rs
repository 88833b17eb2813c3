//! Configuration loading and management

use crate::core::player::NewPlayer;
use crate::core::query::DEFAULT_PAGE_SIZE;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "ROSTER_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:8080")
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Paging defaults for list queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when `pageSize` is absent
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Complete configuration for the roster server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub server: ServerConfig,
    pub pagination: PaginationConfig,

    /// Players created at startup, validated like any other create
    pub players: Vec<NewPlayer>,
}

impl RosterConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `path`, then `ROSTER_CONFIG`, else defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path.map(str::to_string).or_else(|| std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => {
                tracing::info!(path = %path, "loading configuration");
                Self::from_yaml_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_page_size == 0 {
            bail!("pagination.default_page_size must be at least 1");
        }
        if self.server.bind.trim().is_empty() {
            bail!("server.bind must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Race;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.pagination.default_page_size, 3);
        assert!(config.players.is_empty());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = RosterConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_yaml_with_seed_players() {
        let yaml = r#"
server:
  bind: "0.0.0.0:9000"
pagination:
  default_page_size: 10
players:
  - name: Ragnar
    title: Chief
    race: HUMAN
    profession: WARRIOR
    birthday: 1262304000000
    experience: 100
"#;
        let config = RosterConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.players.len(), 1);
        assert_eq!(config.players[0].race, Some(Race::Human));
        assert_eq!(
            config.players[0].birthday.map(|b| b.timestamp_millis()),
            Some(1_262_304_000_000)
        );
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let yaml = "pagination:\n  default_page_size: 0\n";
        assert!(RosterConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = RosterConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = RosterConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
