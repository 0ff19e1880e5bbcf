//! Native transfer action

use super::{Action, ActionResult};
use crate::config::{Chain, PluginSettings};
use crate::transfer::{execute_transfer, TransferRequest};
use crate::units::parse_units;
use crate::wallet::WalletProvider;
use crate::{Error, Result};
use alloy::primitives::Address;
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Parameters the host extracts for a transfer request
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferActionParams {
    /// Chain name ("lightlink" or "lightlinkTestnet"); defaults to mainnet
    pub chain: Option<String>,
    /// Recipient address
    pub to: String,
    /// Amount of native currency in ETH units, e.g. "0.1"
    pub amount: String,
}

/// Sends native currency on a LightLink chain
pub struct TransferAction {
    wallet: Arc<Mutex<WalletProvider>>,
    has_signer: bool,
}

impl TransferAction {
    pub fn new(wallet: Arc<Mutex<WalletProvider>>, settings: &PluginSettings) -> Self {
        Self {
            wallet,
            has_signer: settings.has_signer(),
        }
    }

    async fn run(&self, params: TransferActionParams) -> Result<ActionResult> {
        let chain = match &params.chain {
            Some(name) => Chain::from_name(name)?,
            None => Chain::Lightlink,
        };
        let to = Address::from_str(&params.to).map_err(|e| {
            Error::InvalidParameter(format!("invalid recipient address {}: {e}", params.to))
        })?;
        let meta = crate::config::metadata(chain);
        let amount_wei = parse_units(&params.amount, meta.native_currency.decimals)?;

        let mut wallet = self.wallet.lock().await;
        let receipt = execute_transfer(
            &mut wallet,
            TransferRequest {
                chain,
                to,
                amount_wei,
            },
        )
        .await?;

        let text = format!(
            "Sent {} {} to {} on {}. Transaction: {}/tx/{}",
            params.amount,
            meta.native_currency.symbol,
            params.to,
            chain.name(),
            meta.explorer_url,
            receipt.hash
        );
        Ok(ActionResult::ok(
            text,
            json!({
                "success": true,
                "hash": receipt.hash.to_string(),
                "recipient": receipt.to.to_string(),
                "chain": chain.name(),
            }),
        ))
    }
}

#[async_trait]
impl Action for TransferAction {
    fn name(&self) -> &'static str {
        "TRANSFER"
    }

    fn description(&self) -> &'static str {
        "Sends native ETH on a LightLink chain to a recipient address and \
         waits for on-chain confirmation."
    }

    fn similes(&self) -> &'static [&'static str] {
        &["SEND_ETH", "SEND_NATIVE", "PAY"]
    }

    fn parameter_schema(&self) -> Value {
        serde_json::to_value(schema_for!(TransferActionParams)).unwrap_or_default()
    }

    fn validate(&self, settings: &PluginSettings) -> bool {
        settings.has_signer()
    }

    async fn handle(&self, params: Value) -> ActionResult {
        if !self.has_signer {
            return ActionResult::fail("No wallet configured; transfer skipped");
        }
        let params: TransferActionParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return ActionResult::fail(format!("invalid transfer parameters: {e}")),
        };
        match self.run(params).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "transfer action failed");
                ActionResult::fail(format!("Transfer failed: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action() -> TransferAction {
        let settings = PluginSettings::default();
        let wallet = Arc::new(Mutex::new(WalletProvider::new(&settings).unwrap()));
        TransferAction::new(wallet, &settings)
    }

    #[test]
    fn schema_lists_required_fields() {
        let schema = action().parameter_schema();
        assert!(schema["properties"]["to"].is_object());
        assert!(schema["properties"]["amount"].is_object());

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "to"));
        assert!(required.iter().any(|v| v == "amount"));
    }

    #[test]
    fn validate_fails_closed_without_signer() {
        assert!(!action().validate(&PluginSettings::default()));
    }

    #[tokio::test]
    async fn bad_recipient_reports_failure() {
        let mut action = action();
        action.has_signer = true;
        let result = action
            .handle(json!({ "to": "not-an-address", "amount": "0.1" }))
            .await;
        assert!(!result.success);
        assert!(result.text.contains("invalid recipient address"));
    }
}
