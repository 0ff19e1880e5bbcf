//! Receipt status handling
//!
//! A mined transaction is only a success when its receipt carries a success
//! status. A mined-but-reverted receipt is terminal; the caller gets an
//! error and no transaction record.

use crate::{Error, Result};
use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionReceipt;

/// Map a mined receipt to success or an on-chain revert.
pub(crate) fn confirm_receipt(
    receipt: &TransactionReceipt,
    hash: TxHash,
    what: &str,
) -> Result<()> {
    if receipt.status() {
        Ok(())
    } else {
        Err(Error::ExecutionReverted(format!(
            "{what} {hash} reverted on-chain"
        )))
    }
}
