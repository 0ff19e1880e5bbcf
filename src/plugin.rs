//! Plugin descriptor
//!
//! The declarative surface the host runtime consumes: a name, a
//! description, context providers for prompt composition, and the action
//! handlers. All actions share one wallet provider behind a mutex, so
//! concurrent requests serialize instead of racing on wallet state.

use crate::actions::{Action, SwapAction, TransferAction};
use crate::config::PluginSettings;
use crate::units::format_units;
use crate::wallet::WalletProvider;
use crate::Result;
use alloy::providers::Provider;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Supplies contextual text to the host's prompt composition
#[async_trait]
pub trait ContextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn get(&self) -> Result<String>;
}

/// Declarative plugin descriptor
pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    pub providers: Vec<Box<dyn ContextProvider>>,
    pub actions: Vec<Box<dyn Action>>,
}

impl Plugin {
    pub fn action(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|a| a.name() == name || a.similes().contains(&name))
            .map(|a| a.as_ref())
    }
}

/// Reports the wallet address and per-chain native balances
pub struct WalletContextProvider {
    wallet: Arc<Mutex<WalletProvider>>,
}

impl WalletContextProvider {
    pub fn new(wallet: Arc<Mutex<WalletProvider>>) -> Self {
        Self { wallet }
    }
}

#[async_trait]
impl ContextProvider for WalletContextProvider {
    fn name(&self) -> &'static str {
        "wallet"
    }

    async fn get(&self) -> Result<String> {
        let mut wallet = self.wallet.lock().await;
        let Some(address) = wallet.address() else {
            return Ok("No wallet configured.".to_string());
        };

        let mut summary = format!("Wallet address: {address}\n");
        for chain in wallet.enabled_chains().to_vec() {
            let meta = wallet.chain_config(chain);
            let client = wallet.read_client(chain)?;
            match client.get_balance(address).await {
                Ok(balance) => {
                    let _ = writeln!(
                        summary,
                        "{}: {} {}",
                        chain.name(),
                        format_units(balance, meta.native_currency.decimals),
                        meta.native_currency.symbol
                    );
                }
                Err(e) => {
                    tracing::warn!(chain = %chain.name(), error = %e, "balance query failed");
                }
            }
        }
        Ok(summary)
    }
}

/// Build the LightLink plugin from host settings.
pub fn lightlink_plugin(settings: PluginSettings) -> Result<Plugin> {
    let wallet = Arc::new(Mutex::new(WalletProvider::new(&settings)?));

    Ok(Plugin {
        name: "lightlink",
        description: "Wallet, transfer, and swap capabilities for LightLink EVM chains",
        providers: vec![Box::new(WalletContextProvider::new(wallet.clone()))],
        actions: vec![
            Box::new(SwapAction::new(wallet.clone(), &settings)),
            Box::new(TransferAction::new(wallet, &settings)),
        ],
    })
}
