//! Token swap action

use super::{Action, ActionResult};
use crate::config::{Chain, PluginSettings};
use crate::swap::{SwapExecutor, SwapParams};
use crate::tokens::registry;
use crate::units::parse_units;
use crate::wallet::WalletProvider;
use crate::Result;
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Parameters the host extracts for a swap request
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SwapActionParams {
    /// Chain name ("lightlink" or "lightlinkTestnet"); defaults to mainnet
    pub chain: Option<String>,
    /// Source token address or known symbol
    pub from_token: String,
    /// Destination token address or known symbol
    pub to_token: String,
    /// Input amount in token units, e.g. "1.5"
    pub amount: String,
    /// Slippage tolerance as a fraction (0.01 = 1%); defaults to the
    /// configured plugin default
    pub slippage: Option<f64>,
}

/// Swaps tokens through the Elektrik router
pub struct SwapAction {
    wallet: Arc<Mutex<WalletProvider>>,
    default_slippage: f64,
    has_signer: bool,
}

impl SwapAction {
    pub fn new(wallet: Arc<Mutex<WalletProvider>>, settings: &PluginSettings) -> Self {
        Self {
            wallet,
            default_slippage: settings.default_slippage,
            has_signer: settings.has_signer(),
        }
    }

    async fn run(&self, params: SwapActionParams) -> Result<ActionResult> {
        let chain = match &params.chain {
            Some(name) => Chain::from_name(name)?,
            None => Chain::Lightlink,
        };

        let tokens = registry();
        let (from_token, from_decimals) = tokens.resolve(chain, &params.from_token)?;
        let (to_token, to_decimals) = tokens.resolve(chain, &params.to_token)?;
        let amount_in = parse_units(&params.amount, from_decimals)?;

        let mut wallet = self.wallet.lock().await;
        let mut executor = SwapExecutor::new(&mut wallet, self.default_slippage);
        let tx = executor
            .swap(SwapParams {
                chain,
                from_token,
                to_token,
                amount_in,
                slippage: params.slippage,
            })
            .await?;

        let explorer = crate::config::metadata(chain).explorer_url;
        let text = format!(
            "Swapped {} {} for a minimum of {} {} on {}. Transaction: {}/tx/{}",
            params.amount,
            params.from_token,
            crate::units::format_units(tx.min_amount_out, to_decimals),
            params.to_token,
            chain.name(),
            explorer,
            tx.hash
        );
        Ok(ActionResult::ok(
            text,
            json!({
                "success": true,
                "hash": tx.hash.to_string(),
                "recipient": tx.recipient.to_string(),
                "chain": chain.name(),
            }),
        ))
    }
}

#[async_trait]
impl Action for SwapAction {
    fn name(&self) -> &'static str {
        "SWAP_TOKENS"
    }

    fn description(&self) -> &'static str {
        "Swaps one token for another on a LightLink chain via the Elektrik DEX. \
         Fetches a fresh quote, applies the slippage tolerance, and waits for \
         on-chain confirmation."
    }

    fn similes(&self) -> &'static [&'static str] {
        &["EXCHANGE_TOKENS", "TRADE_TOKENS", "ELEKTRIK_SWAP"]
    }

    fn parameter_schema(&self) -> Value {
        serde_json::to_value(schema_for!(SwapActionParams)).unwrap_or_default()
    }

    fn validate(&self, settings: &PluginSettings) -> bool {
        settings.has_signer()
    }

    async fn handle(&self, params: Value) -> ActionResult {
        if !self.has_signer {
            return ActionResult::fail("No wallet configured; swap skipped");
        }
        let params: SwapActionParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return ActionResult::fail(format!("invalid swap parameters: {e}")),
        };
        match self.run(params).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "swap action failed");
                ActionResult::fail(format!("Swap failed: {e}"))
            }
        }
    }
}
