//! Endpoint and policy configuration passed to the data-access layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::deadline::PriorityPolicy;

pub const DEFAULT_ARTICLES_URL: &str =
    "https://functions.poehali.dev/548d9cd5-f7d1-4b22-9d02-284a5b6a60a6";
pub const DEFAULT_DOCUMENTS_URL: &str =
    "https://functions.poehali.dev/6d698c6a-0961-4d17-9256-332c35b53aeb";

/// Number of catalog entries shown when there are no search results.
pub const DEFAULT_SLICE: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Service endpoints and display policy.
///
/// Every field is optional in a config file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub articles_url: String,
    pub documents_url: String,
    /// No public default; court-practice lookups fail until this is set.
    pub practice_url: Option<String>,
    pub default_slice: usize,
    pub priority_policy: PriorityPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            articles_url: DEFAULT_ARTICLES_URL.to_string(),
            documents_url: DEFAULT_DOCUMENTS_URL.to_string(),
            practice_url: None,
            default_slice: DEFAULT_SLICE,
            priority_policy: PriorityPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
