//! QuoterV2 quote fetching
//!
//! Read-only simulation of a swap against the Elektrik QuoterV2 contract.
//! The call layout is a typed `sol!` descriptor, so a malformed response is
//! a decode error in the type layer rather than a silent mis-read. A failed
//! quote is fatal to the surrounding swap; there is no retry and no
//! fallback fee tier.

use crate::{Error, Result};
use alloy::primitives::{
    aliases::{U160, U24},
    Address, U256,
};
use alloy::providers::DynProvider;
use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IQuoterV2 {
        struct QuoteExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint256 amountIn;
            uint24 fee;
            uint160 sqrtPriceLimitX96;
        }
        function quoteExactInputSingle(QuoteExactInputSingleParams params)
            external returns (uint256 amountOut, uint160 sqrtPriceX96After, uint32 initializedTicksCrossed, uint256 gasEstimate);
    }
}

/// Decoded quoter response
#[derive(Debug, Clone)]
pub struct Quote {
    /// Expected output in the output token's smallest unit
    pub amount_out: U256,
    /// Pool price after the simulated swap
    pub sqrt_price_x96_after: U160,
    pub initialized_ticks_crossed: u32,
    pub gas_estimate: U256,
}

/// Simulate an exact-input single-pool swap and decode the quoted output.
pub async fn fetch_quote(
    client: &DynProvider,
    quoter: Address,
    token_in: Address,
    token_out: Address,
    amount_in: U256,
    fee: u32,
) -> Result<Quote> {
    let params = IQuoterV2::QuoteExactInputSingleParams {
        tokenIn: token_in,
        tokenOut: token_out,
        amountIn: amount_in,
        fee: U24::from(fee),
        // No price limit
        sqrtPriceLimitX96: U160::ZERO,
    };

    tracing::debug!(
        token_in = %token_in,
        token_out = %token_out,
        amount_in = %amount_in,
        fee,
        "fetching quote"
    );

    let quoter = IQuoterV2::new(quoter, client.clone());
    let ret = quoter
        .quoteExactInputSingle(params)
        .call()
        .await
        .map_err(|e| Error::Quote(format!("quoteExactInputSingle failed: {e}")))?;

    Ok(Quote {
        amount_out: ret.amountOut,
        sqrt_price_x96_after: ret.sqrtPriceX96After,
        initialized_ticks_crossed: ret.initializedTicksCrossed,
        gas_estimate: ret.gasEstimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn quote_call_encodes_quoter_layout() {
        let params = IQuoterV2::QuoteExactInputSingleParams {
            tokenIn: Address::repeat_byte(0xaa),
            tokenOut: Address::repeat_byte(0xbb),
            amountIn: U256::from(1_000_000u64),
            fee: U24::from(3000u32),
            sqrtPriceLimitX96: U160::ZERO,
        };
        let calldata = IQuoterV2::quoteExactInputSingleCall { params }.abi_encode();

        // selector + 5 static words
        assert_eq!(calldata.len(), 4 + 5 * 32);
        assert_eq!(
            &calldata[..4],
            IQuoterV2::quoteExactInputSingleCall::SELECTOR
        );
        // tokenIn is the first word, right-aligned
        assert_eq!(&calldata[16..36], Address::repeat_byte(0xaa).as_slice());
    }

    #[test]
    fn quote_return_decodes() {
        use alloy::sol_types::SolValue;

        let encoded = (
            U256::from(999_000u64),
            U256::from(42u64), // uint160 fits in a word
            42u32,
            U256::from(120_000u64),
        )
            .abi_encode_params();

        let ret = IQuoterV2::quoteExactInputSingleCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(ret.amountOut, U256::from(999_000u64));
        assert_eq!(ret.initializedTicksCrossed, 42);
        assert_eq!(ret.gasEstimate, U256::from(120_000u64));
    }

    #[test]
    fn malformed_quote_response_is_a_decode_error() {
        let garbage = [0u8; 7];
        assert!(IQuoterV2::quoteExactInputSingleCall::abi_decode_returns(&garbage).is_err());
    }
}
