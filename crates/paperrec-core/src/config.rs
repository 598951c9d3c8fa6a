//! Configuration for paperrec
//!
//! Resolution order: an explicit `--config` path, then
//! `$PAPERREC_CONFIG_DIR/config.toml`, then `<config dir>/paperrec/config.toml`,
//! then built-in defaults. Missing files in the implicit locations are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::ranking::RankingConfig;
use crate::vectorize::VectorizerConfig;

const CONFIG_DIR: &str = "paperrec";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PAPERREC_CONFIG_DIR";

/// Default location of the paper corpus
pub const DEFAULT_DATA_PATH: &str = "data/coolPHDpapers.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommenderConfig {
    /// CSV file with `titles` and `abstracts` columns
    pub data_path: PathBuf,
    pub vectorizer: VectorizerConfig,
    pub ranking: RankingConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        RecommenderConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            vectorizer: VectorizerConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RecommendError::io_operation("read config", path.display(), e))?;
        let config: RecommenderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an explicit path or the default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "load_config_explicit");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.ranking.validate()
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RecommendError::Other(format!("failed to serialize config: {}", e)))
    }
}
