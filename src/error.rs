//! Error types for the LightLink plugin
//!
//! Every error is fatal to the current request: no layer of this crate
//! retries, resubmits, or recovers locally. Errors propagate up to the
//! action handlers, which convert them into user-facing failure messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no account configured: {0}")]
    NoAccount(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("quote failed: {0}")]
    Quote(String),

    #[error("transaction submission failed: {0}")]
    Submission(String),

    #[error("execution reverted: {0}")]
    ExecutionReverted(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
