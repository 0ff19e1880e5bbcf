//! Wallet state and per-chain RPC clients
//!
//! The only place where the signing credential lives. Keys are held in
//! alloy's `PrivateKeySigner`, never serialized and never logged.

mod provider;

pub use provider::WalletProvider;
