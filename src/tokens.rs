//! LightLink token registry
//!
//! Single source of truth for token metadata on the supported chains.
//! Action parameters may name tokens by symbol; this registry resolves them
//! to addresses and decimals. Unknown addresses are still accepted by the
//! swap path (with 18-decimal default), unknown symbols are rejected.

use crate::config::Chain;
use crate::{Error, Result};
use alloy::primitives::{address, Address};
use std::collections::HashMap;
use std::str::FromStr;

/// Token metadata
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub decimals: u8,
    pub is_stablecoin: bool,
}

impl TokenInfo {
    pub const fn stablecoin(symbol: &'static str, decimals: u8) -> Self {
        Self {
            symbol,
            decimals,
            is_stablecoin: true,
        }
    }

    pub const fn token(symbol: &'static str, decimals: u8) -> Self {
        Self {
            symbol,
            decimals,
            is_stablecoin: false,
        }
    }
}

/// Well-known token addresses per chain
pub mod addresses {
    use super::*;

    // === Phoenix (mainnet) ===
    pub const WETH_PHOENIX: Address = address!("7ebef2a4b1b09381ec5b9df8c5c6f2dbeca59c73");
    pub const USDC_PHOENIX: Address = address!("18fb38404dadee1727be4b805c5b242b5413fa40");
    pub const USDT_PHOENIX: Address = address!("6308fa9545126237158778e74ae1b6b89022c5c0");
    pub const WBTC_PHOENIX: Address = address!("46a5e3fa4a02b9ae43d9df9408c86ed643144a67");
    pub const LL_PHOENIX: Address = address!("d9d7123552fa2bedb2348bb562576d67f6e8e96e");

    // === Pegasus (testnet) ===
    pub const WETH_PEGASUS: Address = address!("f42991f02c07ab66cfea282e7e482382aeb85461");
    pub const USDC_PEGASUS: Address = address!("57e1c5cbd93b6fa320e4356cbd03eb243c95e1f8");
    pub const USDT_PEGASUS: Address = address!("808d7c71ad2ba3fa531b068a2417c63106bc0949");
}

/// Token registry providing address and symbol lookups
pub struct TokenRegistry {
    tokens: HashMap<Address, TokenInfo>,
    by_symbol: HashMap<(Chain, String), Address>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        use addresses::*;

        let mut tokens = HashMap::new();
        let mut by_symbol = HashMap::new();

        let mut insert = |chain: Chain, addr: Address, info: TokenInfo| {
            tokens.insert(addr, info);
            by_symbol.insert((chain, info.symbol.to_string()), addr);
        };

        insert(
            Chain::Lightlink,
            WETH_PHOENIX,
            TokenInfo::token("WETH", 18),
        );
        insert(
            Chain::Lightlink,
            USDC_PHOENIX,
            TokenInfo::stablecoin("USDC.E", 6),
        );
        insert(
            Chain::Lightlink,
            USDT_PHOENIX,
            TokenInfo::stablecoin("USDT.E", 6),
        );
        insert(Chain::Lightlink, WBTC_PHOENIX, TokenInfo::token("WBTC", 8));
        insert(Chain::Lightlink, LL_PHOENIX, TokenInfo::token("LL", 18));

        insert(
            Chain::LightlinkTestnet,
            WETH_PEGASUS,
            TokenInfo::token("WETH", 18),
        );
        insert(
            Chain::LightlinkTestnet,
            USDC_PEGASUS,
            TokenInfo::stablecoin("USDC.E", 6),
        );
        insert(
            Chain::LightlinkTestnet,
            USDT_PEGASUS,
            TokenInfo::stablecoin("USDT.E", 6),
        );

        Self { tokens, by_symbol }
    }

    /// Get token info by address
    pub fn get(&self, address: &Address) -> Option<&TokenInfo> {
        self.tokens.get(address)
    }

    /// Look up a token address by symbol on a chain (case-insensitive)
    pub fn by_symbol(&self, chain: Chain, symbol: &str) -> Option<Address> {
        self.by_symbol.get(&(chain, symbol.to_uppercase())).copied()
    }

    /// Resolve a token reference (hex address or known symbol) to an
    /// address plus decimals. Unknown addresses default to 18 decimals.
    pub fn resolve(&self, chain: Chain, token: &str) -> Result<(Address, u8)> {
        if token.starts_with("0x") || token.starts_with("0X") {
            let addr = Address::from_str(token).map_err(|e| {
                Error::InvalidParameter(format!("invalid token address {token}: {e}"))
            })?;
            let decimals = self.get(&addr).map(|info| info.decimals).unwrap_or(18);
            return Ok((addr, decimals));
        }

        let addr = self.by_symbol(chain, token).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "unknown token symbol {token} on {}",
                chain.name()
            ))
        })?;
        let decimals = self.get(&addr).map(|info| info.decimals).unwrap_or(18);
        Ok((addr, decimals))
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global token registry (lazy initialized)
static REGISTRY: std::sync::OnceLock<TokenRegistry> = std::sync::OnceLock::new();

/// Get the global token registry
pub fn registry() -> &'static TokenRegistry {
    REGISTRY.get_or_init(TokenRegistry::new)
}
