//! Universal-router call encoding
//!
//! The Elektrik router takes a command byte string plus one ABI-encoded
//! input blob per command. This plugin issues exactly one command per swap:
//! `V3_SWAP_EXACT_IN` over a packed single-hop path
//! `tokenIn ‖ fee(uint24) ‖ tokenOut`.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::{SolCall, SolValue};

sol! {
    interface IUniversalRouter {
        function execute(bytes calldata commands, bytes[] calldata inputs) external payable;
    }
}

/// Exact-input swap command byte
pub const V3_SWAP_EXACT_IN: u8 = 0x00;

/// Packed single-hop path: 20-byte tokenIn, 3-byte big-endian fee, 20-byte tokenOut
pub fn encode_path(token_in: Address, fee: u32, token_out: Address) -> Bytes {
    let mut path = Vec::with_capacity(43);
    path.extend_from_slice(token_in.as_slice());
    path.extend_from_slice(&fee.to_be_bytes()[1..]); // uint24
    path.extend_from_slice(token_out.as_slice());
    Bytes::from(path)
}

/// Full `execute` calldata for a single exact-input swap.
///
/// The input blob matches the router's
/// `(address recipient, uint256 amountIn, uint256 amountOutMin, bytes path, bool payerIsUser)`
/// decode layout.
pub fn encode_exact_input_swap(
    recipient: Address,
    amount_in: U256,
    min_amount_out: U256,
    token_in: Address,
    fee: u32,
    token_out: Address,
    payer_is_user: bool,
) -> Bytes {
    let path = encode_path(token_in, fee, token_out);
    let input = (recipient, amount_in, min_amount_out, path, payer_is_user).abi_encode_params();

    let call = IUniversalRouter::executeCall {
        commands: Bytes::from(vec![V3_SWAP_EXACT_IN]),
        inputs: vec![Bytes::from(input)],
    };
    Bytes::from(call.abi_encode())
}
