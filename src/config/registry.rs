//! Static chain registry
//!
//! One immutable metadata record per supported chain, resolved at process
//! start and never mutated. Router and quoter addresses point at the
//! Elektrik deployment (Uniswap universal router + QuoterV2 layout) on each
//! chain; they are `Option` because a chain without a DEX deployment still
//! supports transfers and balance queries.

use super::Chain;
use alloy::primitives::{address, Address};

/// Native currency descriptor
#[derive(Debug, Clone, Copy)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Immutable per-chain metadata
#[derive(Debug, Clone, Copy)]
pub struct ChainMetadata {
    pub chain: Chain,
    pub chain_id: u64,
    pub native_currency: NativeCurrency,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
    /// Elektrik universal router
    pub router: Option<Address>,
    /// Elektrik QuoterV2
    pub quoter: Option<Address>,
    /// Wrapped native token
    pub weth: Address,
}

const ETH: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

const PHOENIX: ChainMetadata = ChainMetadata {
    chain: Chain::Lightlink,
    chain_id: 1890,
    native_currency: ETH,
    rpc_url: "https://replicator.phoenix.lightlink.io/rpc/v1",
    explorer_url: "https://phoenix.lightlink.io",
    router: Some(address!("6b3ea22c757bbf9c78ccaaa2ed9562b57001720b")),
    quoter: Some(address!("243551e321dac40508c22de2e00abecf17f764b5")),
    weth: address!("7ebef2a4b1b09381ec5b9df8c5c6f2dbeca59c73"),
};

const PEGASUS: ChainMetadata = ChainMetadata {
    chain: Chain::LightlinkTestnet,
    chain_id: 1891,
    native_currency: ETH,
    rpc_url: "https://replicator.pegasus.lightlink.io/rpc/v1",
    explorer_url: "https://pegasus.lightlink.io",
    router: Some(address!("742d315e929b188e3f05fbc49774474a627b0502")),
    quoter: Some(address!("97e7dc2c60e92452a171f32ed8c32b2e9e29ecc6")),
    weth: address!("f42991f02c07ab66cfea282e7e482382aeb85461"),
};

/// Look up the metadata record for a chain.
pub fn metadata(chain: Chain) -> &'static ChainMetadata {
    match chain {
        Chain::Lightlink => &PHOENIX,
        Chain::LightlinkTestnet => &PEGASUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_matches_chain_ids() {
        assert_eq!(metadata(Chain::Lightlink).chain_id, 1890);
        assert_eq!(metadata(Chain::LightlinkTestnet).chain_id, 1891);
    }

    #[test]
    fn mainnet_has_dex_addresses() {
        let meta = metadata(Chain::Lightlink);
        assert!(meta.router.is_some());
        assert!(meta.quoter.is_some());
        assert_ne!(meta.router.unwrap(), Address::ZERO);
        assert_ne!(meta.quoter.unwrap(), Address::ZERO);
    }

    #[test]
    fn rpc_urls_parse() {
        for chain in [Chain::Lightlink, Chain::LightlinkTestnet] {
            let meta = metadata(chain);
            assert!(meta.rpc_url.parse::<url::Url>().is_ok());
            assert!(meta.explorer_url.parse::<url::Url>().is_ok());
        }
    }
}
