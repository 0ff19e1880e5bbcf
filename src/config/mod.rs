//! Configuration for the LightLink plugin
//!
//! Settings come from the host environment (env vars, optionally a .env
//! file). Chain metadata lives in [`registry`] and is fixed at compile time;
//! only the signing credential, RPC overrides, default slippage, and the
//! enabled-chain list are host-configurable.

pub mod registry;

use crate::{Error, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use registry::{metadata, ChainMetadata, NativeCurrency};

/// Supported LightLink chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Chain {
    /// Phoenix mainnet
    Lightlink,
    /// Pegasus testnet
    LightlinkTestnet,
}

impl Chain {
    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Lightlink => 1890,
            Chain::LightlinkTestnet => 1891,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Lightlink => "lightlink",
            Chain::LightlinkTestnet => "lightlinkTestnet",
        }
    }

    /// Parse a chain identifier as supplied by the host (name or alias).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "lightlink" | "phoenix" => Ok(Chain::Lightlink),
            "lightlinktestnet" | "lightlink-testnet" | "pegasus" => Ok(Chain::LightlinkTestnet),
            other => Err(Error::UnsupportedChain(other.to_string())),
        }
    }

    pub fn from_id(chain_id: u64) -> Result<Self> {
        match chain_id {
            1890 => Ok(Chain::Lightlink),
            1891 => Ok(Chain::LightlinkTestnet),
            other => Err(Error::UnsupportedChain(other.to_string())),
        }
    }
}

/// Environment variable names
mod env_vars {
    pub const PRIVATE_KEY: &str = "LIGHTLINK_PRIVATE_KEY";
    pub const RPC_URL: &str = "LIGHTLINK_RPC_URL";
    pub const TESTNET_RPC_URL: &str = "LIGHTLINK_TESTNET_RPC_URL";
    pub const DEFAULT_SLIPPAGE: &str = "LIGHTLINK_DEFAULT_SLIPPAGE";
    pub const ENABLED_CHAINS: &str = "LIGHTLINK_ENABLED_CHAINS";
}

/// Default slippage tolerance as a fraction (0.005 = 0.5%)
pub const DEFAULT_SLIPPAGE: f64 = 0.005;

/// Host-supplied plugin settings
#[derive(Clone)]
pub struct PluginSettings {
    /// Hex-encoded signing key, if the host configured one.
    /// Absent means the plugin runs read-only and write actions fail closed.
    pub private_key: Option<SecretString>,
    /// Default slippage fraction applied when a swap request omits one
    pub default_slippage: f64,
    /// Chains the plugin will accept requests for
    pub enabled_chains: Vec<Chain>,
    /// Per-chain RPC URL overrides; registry defaults are used otherwise
    pub rpc_overrides: HashMap<Chain, String>,
}

impl PluginSettings {
    /// Load settings from the environment, reading a .env file if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let private_key = std::env::var(env_vars::PRIVATE_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(SecretString::from);

        let default_slippage = std::env::var(env_vars::DEFAULT_SLIPPAGE)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(DEFAULT_SLIPPAGE);

        let enabled_chains = std::env::var(env_vars::ENABLED_CHAINS)
            .ok()
            .map(|list| {
                list.split(',')
                    .filter_map(|name| Chain::from_name(name.trim()).ok())
                    .collect::<Vec<_>>()
            })
            .filter(|chains| !chains.is_empty())
            .unwrap_or_else(|| vec![Chain::Lightlink, Chain::LightlinkTestnet]);

        let mut rpc_overrides = HashMap::new();
        if let Ok(url) = std::env::var(env_vars::RPC_URL) {
            tracing::debug!("Using LIGHTLINK_RPC_URL override for Phoenix");
            rpc_overrides.insert(Chain::Lightlink, url);
        }
        if let Ok(url) = std::env::var(env_vars::TESTNET_RPC_URL) {
            tracing::debug!("Using LIGHTLINK_TESTNET_RPC_URL override for Pegasus");
            rpc_overrides.insert(Chain::LightlinkTestnet, url);
        }

        Self {
            private_key,
            default_slippage,
            enabled_chains,
            rpc_overrides,
        }
    }

    /// Whether a signing credential is configured
    pub fn has_signer(&self) -> bool {
        self.private_key.is_some()
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            private_key: None,
            default_slippage: DEFAULT_SLIPPAGE,
            enabled_chains: vec![Chain::Lightlink, Chain::LightlinkTestnet],
            rpc_overrides: HashMap::new(),
        }
    }
}

// Manual Debug so a misconfigured host can't log key material
impl std::fmt::Debug for PluginSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginSettings")
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("default_slippage", &self.default_slippage)
            .field("enabled_chains", &self.enabled_chains)
            .field("rpc_overrides", &self.rpc_overrides)
            .finish()
    }
}
