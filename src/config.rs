//! Mint view configuration
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line flags (which clap also fills from `MINTDECK_*` variables).

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::wallet::ChainId;

pub const DEFAULT_CHAIN_ID: u64 = 4;
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://rinkeby.etherscan.io";
pub const DEFAULT_MARKETPLACE_BASE_URL: &str = "https://testnets.opensea.io";
pub const DEFAULT_COLLECTION_NAME: &str = "My NFT Collection";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No contract address configured (set contract_address or --contract)")]
    MissingContractAddress,

    #[error("Invalid contract address {0:?}")]
    InvalidContractAddress(String),

    #[error("{field} must not be empty")]
    EmptyUrl { field: &'static str },

    #[error("poll_interval_ms must be greater than zero")]
    ZeroPollInterval,
}

/// Config file contents. Every field is optional; unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub contract_address: Option<String>,
    pub required_chain_id: Option<u64>,
    pub explorer_base_url: Option<String>,
    pub marketplace_base_url: Option<String>,
    pub rpc_url: Option<String>,
    pub collection_url: Option<String>,
    pub collection_name: Option<String>,
    pub poll_interval_ms: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(file)
    }

    /// Load from `path` if given, otherwise from the default location when it exists
    pub fn discover(path: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = path {
            return Self::load(path).map(Some);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Fields set in `other` win
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            contract_address: other.contract_address.or(self.contract_address),
            required_chain_id: other.required_chain_id.or(self.required_chain_id),
            explorer_base_url: other.explorer_base_url.or(self.explorer_base_url),
            marketplace_base_url: other.marketplace_base_url.or(self.marketplace_base_url),
            rpc_url: other.rpc_url.or(self.rpc_url),
            collection_url: other.collection_url.or(self.collection_url),
            collection_name: other.collection_name.or(self.collection_name),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
        }
    }
}

/// Resolved, validated configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintConfig {
    pub contract_address: Address,
    pub required_chain_id: ChainId,
    pub explorer_base_url: String,
    pub marketplace_base_url: String,
    pub rpc_url: Option<String>,
    pub collection_url: Option<String>,
    pub collection_name: String,
    pub poll_interval_ms: u64,
}

impl MintConfig {
    pub fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        let raw_address = file
            .contract_address
            .ok_or(ConfigError::MissingContractAddress)?;
        let contract_address = Address::from_str(raw_address.trim())
            .map_err(|_| ConfigError::InvalidContractAddress(raw_address.clone()))?;

        let explorer_base_url = normalize_url(
            "explorer_base_url",
            file.explorer_base_url
                .unwrap_or_else(|| DEFAULT_EXPLORER_BASE_URL.to_string()),
        )?;
        let marketplace_base_url = normalize_url(
            "marketplace_base_url",
            file.marketplace_base_url
                .unwrap_or_else(|| DEFAULT_MARKETPLACE_BASE_URL.to_string()),
        )?;
        let rpc_url = file
            .rpc_url
            .map(|url| normalize_url("rpc_url", url))
            .transpose()?;
        let collection_url = file
            .collection_url
            .map(|url| normalize_url("collection_url", url))
            .transpose()?;

        let poll_interval_ms = file.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        Ok(Self {
            contract_address,
            required_chain_id: ChainId(file.required_chain_id.unwrap_or(DEFAULT_CHAIN_ID)),
            explorer_base_url,
            marketplace_base_url,
            rpc_url,
            collection_url,
            collection_name: file
                .collection_name
                .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string()),
            poll_interval_ms,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// `<config_dir>/mintdeck/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mintdeck").join("config.json"))
}

fn normalize_url(field: &'static str, url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyUrl { field });
    }
    Ok(trimmed.to_string())
}
