//! Swap execution
//!
//! The quote → minimum-output → encode → submit → confirm pipeline.
//! Strictly sequential: each step suspends on one network call and any
//! failure aborts the request. Once submitted, a transaction cannot be
//! cancelled; a revert is terminal and surfaced to the caller. The router
//! call carries no deadline, matching the Elektrik deployment's exact-input
//! command shape.

use super::{quoter, router, SwapParams, SwapPhase, SwapTransaction};
use crate::wallet::WalletProvider;
use crate::{Error, Result};
use alloy::network::TransactionBuilder;
use alloy::primitives::U256;
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;

/// Single fixed pool fee tier (0.3%); no multi-pool routing
pub const DEFAULT_FEE_TIER: u32 = 3000;

/// Denominator for slippage arithmetic: basis points scaled by 10
const SLIPPAGE_DENOMINATOR: u64 = 100_000;

/// Executes swaps against one wallet provider. Holds the provider mutably
/// for the duration of a request, so in-flight operations cannot race on
/// the active chain.
pub struct SwapExecutor<'a> {
    wallet: &'a mut WalletProvider,
    default_slippage: f64,
}

impl<'a> SwapExecutor<'a> {
    pub fn new(wallet: &'a mut WalletProvider, default_slippage: f64) -> Self {
        Self {
            wallet,
            default_slippage,
        }
    }

    /// Run the full swap pipeline for one request.
    pub async fn swap(&mut self, params: SwapParams) -> Result<SwapTransaction> {
        let slippage = params.slippage.unwrap_or(self.default_slippage);
        // Validated before any network call is made
        let slippage_bps = slippage_basis_points(slippage)?;

        self.wallet.switch_chain(params.chain)?;
        let meta = self.wallet.chain_config(params.chain);
        let router_addr = meta.router.ok_or_else(|| {
            Error::Configuration(format!("no router deployed on {}", params.chain.name()))
        })?;
        let quoter_addr = meta.quoter.ok_or_else(|| {
            Error::Configuration(format!("no quoter deployed on {}", params.chain.name()))
        })?;

        let recipient = self
            .wallet
            .address()
            .ok_or_else(|| Error::NoAccount("swap requires a signing credential".to_string()))?;

        tracing::info!(
            phase = %SwapPhase::Quoting,
            chain = %params.chain.name(),
            from = %params.from_token,
            to = %params.to_token,
            amount_in = %params.amount_in,
            "fetching swap quote"
        );
        let read = self.wallet.read_client(params.chain)?;
        let quote = quoter::fetch_quote(
            &read,
            quoter_addr,
            params.from_token,
            params.to_token,
            params.amount_in,
            DEFAULT_FEE_TIER,
        )
        .await?;

        let min_amount_out = min_amount_out(quote.amount_out, slippage_bps)?;

        tracing::info!(
            phase = %SwapPhase::Signing,
            quoted = %quote.amount_out,
            min_out = %min_amount_out,
            slippage_bps,
            "encoding router call"
        );
        let calldata = router::encode_exact_input_swap(
            recipient,
            params.amount_in,
            min_amount_out,
            params.from_token,
            DEFAULT_FEE_TIER,
            params.to_token,
            true,
        );

        let write = self.wallet.write_client(params.chain)?;
        let tx = TransactionRequest::default()
            .with_from(recipient)
            .with_to(router_addr)
            .with_input(calldata);

        let pending = write
            .send_transaction(tx)
            .await
            .map_err(|e| Error::Submission(format!("router call failed to broadcast: {e}")))?;
        let hash = *pending.tx_hash();
        tracing::info!(phase = %SwapPhase::Submitted, %hash, "swap submitted");

        let receipt = pending.get_receipt().await.map_err(|e| {
            Error::ExecutionReverted(format!("no receipt for swap {hash}: {e}"))
        })?;
        if let Err(err) = crate::receipts::confirm_receipt(&receipt, hash, "swap") {
            tracing::warn!(phase = %SwapPhase::Reverted, %hash, "swap reverted on-chain");
            return Err(err);
        }

        tracing::info!(phase = %SwapPhase::Confirmed, %hash, "swap confirmed");
        Ok(SwapTransaction {
            hash,
            from_token: params.from_token,
            to_token: params.to_token,
            amount_in: params.amount_in,
            min_amount_out,
            recipient,
        })
    }
}

/// Convert a slippage fraction into scaled basis points, rejecting values
/// that would authorize a zero or runaway minimum output.
pub fn slippage_basis_points(slippage: f64) -> Result<u64> {
    if !slippage.is_finite() || !(0.0..=1.0).contains(&slippage) {
        return Err(Error::InvalidParameter(format!(
            "slippage must be a fraction in [0, 1], got {slippage}"
        )));
    }
    Ok((slippage * 10_000.0).round() as u64)
}

/// `quoted - floor(quoted * bps / 100_000)`, pure integer arithmetic.
/// The floor lands on the subtracted amount, so rounding tightens the
/// minimum rather than loosening it. The multiply is checked: a quote
/// large enough to overflow it is rejected rather than wrapped.
pub fn min_amount_out(quoted: U256, slippage_bps: u64) -> Result<U256> {
    let cut = quoted
        .checked_mul(U256::from(slippage_bps))
        .ok_or_else(|| Error::Quote(format!("quoted amount {quoted} overflows")))?
        / U256::from(SLIPPAGE_DENOMINATOR);
    Ok(quoted - cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Chain, PluginSettings};
    use crate::wallet::WalletProvider;
    use alloy::primitives::Address;
    use secrecy::SecretString;

    // Well-known test key (hardhat account #0, never fund it)
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn wallet_with_key() -> WalletProvider {
        let settings = PluginSettings {
            private_key: Some(SecretString::from(TEST_KEY)),
            ..PluginSettings::default()
        };
        WalletProvider::new(&settings).unwrap()
    }

    fn swap_request(slippage: f64) -> SwapParams {
        SwapParams {
            chain: Chain::Lightlink,
            from_token: Address::repeat_byte(0x11),
            to_token: Address::repeat_byte(0x22),
            amount_in: U256::from(1_000_000u64),
            slippage: Some(slippage),
        }
    }

    #[test]
    fn worked_example_from_one_percent_slippage() {
        // 1% slippage on a 1_000_000 quote
        let bps = slippage_basis_points(0.01).unwrap();
        assert_eq!(bps, 100);
        assert_eq!(
            min_amount_out(U256::from(1_000_000u64), bps).unwrap(),
            U256::from(999_000u64)
        );
    }

    #[test]
    fn zero_slippage_returns_quote_exactly() {
        let bps = slippage_basis_points(0.0).unwrap();
        assert_eq!(bps, 0);
        let quoted = U256::from(123_456_789u64);
        assert_eq!(min_amount_out(quoted, bps).unwrap(), quoted);
    }

    #[test]
    fn min_out_is_bounded_by_quote() {
        for slippage in [0.0, 0.0005, 0.003, 0.01, 0.25, 0.5, 1.0] {
            let bps = slippage_basis_points(slippage).unwrap();
            for quoted in [0u64, 1, 999, 1_000_000, u64::MAX] {
                let quoted = U256::from(quoted);
                let min_out = min_amount_out(quoted, bps).unwrap();
                assert!(min_out <= quoted);
            }
        }
    }

    #[test]
    fn floor_division_biases_toward_stricter_minimum() {
        // 0.05% of 999 is 0.4995; flooring the cut to 0 keeps min == quote
        let bps = slippage_basis_points(0.0005).unwrap();
        assert_eq!(bps, 5);
        assert_eq!(
            min_amount_out(U256::from(999u64), bps).unwrap(),
            U256::from(999u64)
        );
    }

    #[test]
    fn overflowing_quote_is_rejected() {
        let err = min_amount_out(U256::MAX, 100).unwrap_err();
        assert!(matches!(err, Error::Quote(_)));
        // Zero basis points never multiplies out of range
        assert_eq!(min_amount_out(U256::MAX, 0).unwrap(), U256::MAX);
    }

    #[test]
    fn out_of_range_slippage_is_rejected() {
        for bad in [-0.01, 1.01, 2.0, f64::NAN, f64::INFINITY] {
            let err = slippage_basis_points(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "{bad}");
        }
    }

    #[tokio::test]
    async fn invalid_slippage_fails_before_any_network_call() {
        let mut wallet = WalletProvider::new(&PluginSettings::default()).unwrap();
        let mut executor = SwapExecutor::new(&mut wallet, 0.005);

        // No signer and no reachable RPC, yet the request must fail on the
        // slippage check alone.
        let err = executor.swap(swap_request(1.5)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn swap_without_signer_fails_with_no_account() {
        let mut wallet = WalletProvider::new(&PluginSettings::default()).unwrap();
        let mut executor = SwapExecutor::new(&mut wallet, 0.005);

        let err = executor.swap(swap_request(0.01)).await.unwrap_err();
        assert!(matches!(err, Error::NoAccount(_)));
    }

    #[tokio::test]
    async fn quote_revert_aborts_before_submission() {
        use alloy::providers::mock::Asserter;
        use alloy::providers::ProviderBuilder;

        let mut wallet = wallet_with_key();

        let quotes = Asserter::new();
        quotes.push_failure_msg("execution reverted");
        let read = ProviderBuilder::new().connect_mocked_client(quotes).erased();
        // Empty transport: any router call against it would surface as a
        // broadcast error instead of a quote error
        let write = ProviderBuilder::new()
            .connect_mocked_client(Asserter::new())
            .erased();
        wallet.inject_clients(Chain::Lightlink, read, write);

        let mut executor = SwapExecutor::new(&mut wallet, 0.005);
        let err = executor.swap(swap_request(0.01)).await.unwrap_err();
        assert!(matches!(err, Error::Quote(_)));
    }

    #[tokio::test]
    async fn broadcast_failure_surfaces_as_submission_error() {
        use alloy::primitives::Bytes;
        use alloy::providers::mock::Asserter;
        use alloy::providers::ProviderBuilder;
        use alloy::sol_types::SolValue;

        let mut wallet = wallet_with_key();

        // Good quote, then nothing: the router call has no scripted response
        let quotes = Asserter::new();
        let ret = (
            U256::from(999_000u64),
            U256::from(1u64),
            1u32,
            U256::from(50_000u64),
        )
            .abi_encode_params();
        quotes.push_success(&Bytes::from(ret));
        let read = ProviderBuilder::new().connect_mocked_client(quotes).erased();
        let write = ProviderBuilder::new()
            .connect_mocked_client(Asserter::new())
            .erased();
        wallet.inject_clients(Chain::Lightlink, read, write);

        let mut executor = SwapExecutor::new(&mut wallet, 0.005);
        let err = executor.swap(swap_request(0.01)).await.unwrap_err();
        assert!(matches!(err, Error::Submission(_)));
    }
}
