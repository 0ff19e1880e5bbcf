//! Wallet provider: signing credential, active chain, memoized clients
//!
//! Chain selection is an explicit parameter on every client accessor, so a
//! caller can never be routed to the wrong chain by hidden state. The
//! active-chain field only tracks which chain the last request targeted and
//! gates requests against the enabled-chain set. Clients are created lazily
//! and memoized per chain; a `WalletProvider` is not shareable across tasks,
//! callers serialize access (the plugin layer wraps it in a mutex).

use crate::config::{metadata, Chain, ChainMetadata, PluginSettings};
use crate::{Error, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use secrecy::ExposeSecret;
use std::collections::HashMap;

pub struct WalletProvider {
    /// Signer-derived address; `None` when running read-only
    signer_address: Option<Address>,
    /// Wallet for write clients; `None` when running read-only
    wallet: Option<EthereumWallet>,
    active_chain: Chain,
    enabled_chains: Vec<Chain>,
    rpc_overrides: HashMap<Chain, String>,
    read_clients: HashMap<Chain, DynProvider>,
    write_clients: HashMap<Chain, DynProvider>,
}

impl WalletProvider {
    /// Build a provider from plugin settings.
    ///
    /// A missing private key is not an error here: the provider runs
    /// read-only and write-client requests fail with a configuration error.
    pub fn new(settings: &PluginSettings) -> Result<Self> {
        let (signer_address, wallet) = match &settings.private_key {
            Some(key) => {
                let key_hex = key.expose_secret();
                let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);
                let signer: PrivateKeySigner = key_hex
                    .parse()
                    .map_err(|e| Error::Configuration(format!("invalid private key: {e}")))?;
                let address = signer.address();
                (Some(address), Some(EthereumWallet::from(signer)))
            }
            None => (None, None),
        };

        let enabled_chains = if settings.enabled_chains.is_empty() {
            vec![Chain::Lightlink]
        } else {
            settings.enabled_chains.clone()
        };
        let active_chain = enabled_chains[0];

        Ok(Self {
            signer_address,
            wallet,
            active_chain,
            enabled_chains,
            rpc_overrides: settings.rpc_overrides.clone(),
            read_clients: HashMap::new(),
            write_clients: HashMap::new(),
        })
    }

    /// Public address of the configured signer, if any
    pub fn address(&self) -> Option<Address> {
        self.signer_address
    }

    pub fn active_chain(&self) -> Chain {
        self.active_chain
    }

    pub fn enabled_chains(&self) -> &[Chain] {
        &self.enabled_chains
    }

    /// Set the active chain. Idempotent; fails without touching state when
    /// the chain is not enabled for this provider.
    pub fn switch_chain(&mut self, chain: Chain) -> Result<()> {
        if !self.enabled_chains.contains(&chain) {
            return Err(Error::UnsupportedChain(format!(
                "{} is not enabled for this wallet",
                chain.name()
            )));
        }
        if self.active_chain != chain {
            tracing::debug!(from = %self.active_chain.name(), to = %chain.name(), "switching chain");
            self.active_chain = chain;
        }
        Ok(())
    }

    /// Registry metadata for a chain
    pub fn chain_config(&self, chain: Chain) -> &'static ChainMetadata {
        metadata(chain)
    }

    fn rpc_url(&self, chain: Chain) -> &str {
        self.rpc_overrides
            .get(&chain)
            .map(|s| s.as_str())
            .unwrap_or(metadata(chain).rpc_url)
    }

    /// Read-only client for a chain, created on first use and reused after.
    pub fn read_client(&mut self, chain: Chain) -> Result<DynProvider> {
        if let Some(client) = self.read_clients.get(&chain) {
            return Ok(client.clone());
        }

        let url: url::Url = self
            .rpc_url(chain)
            .parse()
            .map_err(|e| Error::Configuration(format!("invalid RPC URL: {e}")))?;
        let client = ProviderBuilder::new().connect_http(url).erased();
        self.read_clients.insert(chain, client.clone());
        Ok(client)
    }

    /// Signing client for a chain, created on first use and reused after.
    /// Fails when no signing credential is configured.
    pub fn write_client(&mut self, chain: Chain) -> Result<DynProvider> {
        if let Some(client) = self.write_clients.get(&chain) {
            return Ok(client.clone());
        }

        let wallet = self.wallet.clone().ok_or_else(|| {
            Error::Configuration("no signing credential configured for write access".to_string())
        })?;

        let url: url::Url = self
            .rpc_url(chain)
            .parse()
            .map_err(|e| Error::Configuration(format!("invalid RPC URL: {e}")))?;
        let client = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url)
            .erased();
        self.write_clients.insert(chain, client.clone());
        Ok(client)
    }

    #[cfg(test)]
    pub(crate) fn cached_read_clients(&self) -> usize {
        self.read_clients.len()
    }

    // Pre-seeds the client memos so tests can script RPC traffic
    #[cfg(test)]
    pub(crate) fn inject_clients(&mut self, chain: Chain, read: DynProvider, write: DynProvider) {
        self.read_clients.insert(chain, read);
        self.write_clients.insert(chain, write);
    }
}

// Manual Debug to keep wallet internals out of logs
impl std::fmt::Debug for WalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletProvider")
            .field("address", &self.signer_address)
            .field("active_chain", &self.active_chain)
            .field("enabled_chains", &self.enabled_chains)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    // Well-known test key (hardhat account #0, never fund it)
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn settings_with_key() -> PluginSettings {
        PluginSettings {
            private_key: Some(SecretString::from(TEST_KEY)),
            ..PluginSettings::default()
        }
    }

    #[test]
    fn derives_address_from_key() {
        let provider = WalletProvider::new(&settings_with_key()).unwrap();
        assert_eq!(
            format!("{:?}", provider.address().unwrap()).to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn rejects_invalid_key() {
        let settings = PluginSettings {
            private_key: Some(SecretString::from("0xnotakey")),
            ..PluginSettings::default()
        };
        assert!(matches!(
            WalletProvider::new(&settings),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn switch_chain_is_idempotent() {
        let mut provider = WalletProvider::new(&PluginSettings::default()).unwrap();
        assert_eq!(provider.active_chain(), Chain::Lightlink);

        provider.switch_chain(Chain::LightlinkTestnet).unwrap();
        assert_eq!(provider.active_chain(), Chain::LightlinkTestnet);
        provider.switch_chain(Chain::LightlinkTestnet).unwrap();
        assert_eq!(provider.active_chain(), Chain::LightlinkTestnet);
    }

    #[test]
    fn switch_to_disabled_chain_leaves_state_unchanged() {
        let settings = PluginSettings {
            enabled_chains: vec![Chain::Lightlink],
            ..PluginSettings::default()
        };
        let mut provider = WalletProvider::new(&settings).unwrap();

        let err = provider.switch_chain(Chain::LightlinkTestnet).unwrap_err();
        assert!(matches!(err, Error::UnsupportedChain(_)));
        assert_eq!(provider.active_chain(), Chain::Lightlink);
    }

    #[test]
    fn write_client_requires_signer() {
        let mut provider = WalletProvider::new(&PluginSettings::default()).unwrap();
        let err = provider.write_client(Chain::Lightlink).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn read_clients_are_memoized() {
        let mut provider = WalletProvider::new(&PluginSettings::default()).unwrap();
        provider.read_client(Chain::Lightlink).unwrap();
        provider.read_client(Chain::Lightlink).unwrap();
        assert_eq!(provider.cached_read_clients(), 1);

        provider.read_client(Chain::LightlinkTestnet).unwrap();
        assert_eq!(provider.cached_read_clients(), 2);
    }

    #[test]
    fn debug_omits_wallet_material() {
        let provider = WalletProvider::new(&settings_with_key()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("ac0974bec"));
    }
}
