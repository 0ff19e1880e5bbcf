//! LightLink agent plugin
//!
//! Exposes wallet, native-transfer, and swap capabilities for LightLink
//! EVM chains (Phoenix mainnet, Pegasus testnet) to a host
//! agent-orchestration runtime as a declarative plugin: a name, a
//! description, context providers, and action handlers.
//!
//! The heavy lifting (RPC transport, signing, ABI encoding) is alloy's;
//! this crate composes those calls into a single linear pipeline per
//! request. There are no retries, no caching beyond per-chain client
//! memoization, and no recovery once a transaction is submitted.
//!
//! # Security model
//!
//! - The signing key lives only inside the wallet provider and is never
//!   serialized or logged
//! - Write actions fail closed when no key is configured
//! - Minimum swap output is always derived from a fresh quote plus the
//!   caller's slippage tolerance, never supplied directly

pub mod actions;
pub mod config;
pub mod plugin;
pub mod swap;
pub mod telemetry;
pub mod tokens;
pub mod transfer;
pub mod units;
pub mod wallet;

mod error;
mod receipts;

// Re-export commonly used types
pub use config::{Chain, PluginSettings, DEFAULT_SLIPPAGE};
pub use error::{Error, Result};
pub use plugin::{lightlink_plugin, Plugin};
