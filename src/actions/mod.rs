//! Action handlers exposed to the host runtime
//!
//! Each action receives already-extracted structured parameters from the
//! host (parameter extraction itself is the host's concern), validates that
//! the plugin is in a state where the action can run, invokes the
//! corresponding executor, and reports a human-readable message plus a
//! structured result. A single failure ends the invocation; nothing is
//! retried here.

mod swap;
mod transfer;

use crate::config::PluginSettings;
use async_trait::async_trait;
use serde_json::Value;

pub use swap::{SwapAction, SwapActionParams};
pub use transfer::{TransferAction, TransferActionParams};

/// Outcome reported back to the host
#[derive(Debug, Clone)]
pub struct ActionResult {
    pub success: bool,
    /// Human-readable confirmation or failure message
    pub text: String,
    /// Structured payload on success
    pub data: Option<Value>,
}

impl ActionResult {
    pub fn ok(text: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            text: text.into(),
            data: Some(data),
        }
    }

    pub fn fail(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
            data: None,
        }
    }
}

/// A host-invocable action
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Alternative trigger names the host may match against
    fn similes(&self) -> &'static [&'static str] {
        &[]
    }

    /// JSON schema of the expected parameters
    fn parameter_schema(&self) -> Value;

    /// Whether this action can run under the given settings. Write actions
    /// fail closed when no signing credential is configured.
    fn validate(&self, settings: &PluginSettings) -> bool;

    /// Execute with host-extracted parameters. Errors are converted into a
    /// failing [`ActionResult`], never propagated as panics.
    async fn handle(&self, params: Value) -> ActionResult;
}
