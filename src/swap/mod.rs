//! Elektrik swap pipeline
//!
//! One linear pipeline per request: fetch a fresh quote, derive the minimum
//! acceptable output from the caller's slippage tolerance, encode the
//! universal-router call, submit, and wait for the receipt. Nothing is
//! cached between requests and nothing is retried; any failure aborts the
//! request and surfaces to the caller.

pub mod executor;
pub mod quoter;
pub mod router;

use crate::config::Chain;
use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;

pub use executor::{SwapExecutor, DEFAULT_FEE_TIER};
pub use quoter::Quote;

/// A single swap request. Amounts are integers in the input token's
/// smallest unit; the slippage is a fraction (0.01 = 1%).
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub chain: Chain,
    pub from_token: Address,
    pub to_token: Address,
    pub amount_in: U256,
    /// Falls back to the configured default when omitted
    pub slippage: Option<f64>,
}

/// Result of a confirmed swap
#[derive(Debug, Clone, Serialize)]
pub struct SwapTransaction {
    pub hash: TxHash,
    pub from_token: Address,
    pub to_token: Address,
    pub amount_in: U256,
    pub min_amount_out: U256,
    pub recipient: Address,
}

/// Progression of a swap request, used for tracing and error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    Quoting,
    Signing,
    Submitted,
    Confirmed,
    Reverted,
}

impl std::fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SwapPhase::Quoting => "quoting",
            SwapPhase::Signing => "signing",
            SwapPhase::Submitted => "submitted",
            SwapPhase::Confirmed => "confirmed",
            SwapPhase::Reverted => "reverted",
        };
        f.write_str(name)
    }
}
