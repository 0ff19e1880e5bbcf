//! Native currency transfer
//!
//! The write-path counterpart to the swap executor for plain value
//! transfers: build, submit, wait for the receipt, and treat a revert or a
//! missing receipt as terminal.

use crate::config::Chain;
use crate::wallet::WalletProvider;
use crate::{Error, Result};
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use serde::Serialize;

/// A single native-currency transfer request, amount in wei
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub chain: Chain,
    pub to: Address,
    pub amount_wei: U256,
}

/// Result of a confirmed transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub hash: TxHash,
    pub from: Address,
    pub to: Address,
    pub amount_wei: U256,
    pub chain: Chain,
}

/// Send native currency and wait for confirmation.
pub async fn execute_transfer(
    wallet: &mut WalletProvider,
    request: TransferRequest,
) -> Result<TransferReceipt> {
    if request.amount_wei.is_zero() {
        return Err(Error::InvalidParameter(
            "transfer amount must be greater than zero".to_string(),
        ));
    }

    wallet.switch_chain(request.chain)?;
    let from = wallet
        .address()
        .ok_or_else(|| Error::NoAccount("transfer requires a signing credential".to_string()))?;

    tracing::info!(
        chain = %request.chain.name(),
        to = %request.to,
        amount_wei = %request.amount_wei,
        "submitting transfer"
    );

    let write = wallet.write_client(request.chain)?;
    let tx = TransactionRequest::default()
        .with_from(from)
        .with_to(request.to)
        .with_value(request.amount_wei);

    let pending = write
        .send_transaction(tx)
        .await
        .map_err(|e| Error::Submission(format!("transfer failed to broadcast: {e}")))?;
    let hash = *pending.tx_hash();

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| Error::ExecutionReverted(format!("no receipt for transfer {hash}: {e}")))?;
    crate::receipts::confirm_receipt(&receipt, hash, "transfer")?;

    tracing::info!(%hash, "transfer confirmed");
    Ok(TransferReceipt {
        hash,
        from,
        to: request.to,
        amount_wei: request.amount_wei,
        chain: request.chain,
    })
}
