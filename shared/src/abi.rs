//! Calldata encoders for the pool and token contracts
//!
//! The client only ever calls three functions, so the ABI surface is a set of
//! hand-rolled encoders over fixed-width words rather than a generated
//! binding: `approve(address,uint256)` and `decimals()` on the token, and
//! `donate(bytes32,uint256)` on the pool. Every argument type involved
//! encodes to a single 32-byte word.

use alloy_primitives::{keccak256, Address, B256, U256};

/// First four bytes of the keccak-256 hash of the canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn address_word(value: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(value.as_slice());
    word
}

/// `approve(address spender, uint256 amount)` on the cUSD token contract.
///
/// Grants `spender` an allowance of `amount` wei over the caller's balance.
pub fn encode_approve(spender: Address, amount: U256) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 64);
    data.extend_from_slice(&selector("approve(address,uint256)"));
    data.extend_from_slice(&address_word(spender));
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    data
}

/// `donate(bytes32 charityId, uint256 amount)` on the GeoCharityPool contract.
pub fn encode_donate(charity_id: B256, amount: U256) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 64);
    data.extend_from_slice(&selector("donate(bytes32,uint256)"));
    data.extend_from_slice(charity_id.as_slice());
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    data
}

/// `decimals()` view on the token contract.
///
/// Not called by the donation flow (amounts assume 18 decimals, as cUSD
/// defines); kept because the token ABI surface declares it.
pub fn encode_decimals() -> Vec<u8> {
    selector("decimals()").to_vec()
}
