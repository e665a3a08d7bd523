//! Chain and contract configuration
//!
//! All chain parameters live on [`ChainConfig`], constructed once at startup
//! and handed explicitly to whatever needs it. Nothing in here is mutable
//! after construction.

use alloy_primitives::{address, b256, Address, B256};

/// Immutable configuration for one target network.
///
/// The chain is selected at build time; there is no runtime network switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    /// EVM chain id, included in wallet transaction requests.
    pub chain_id: u64,
    pub chain_name: &'static str,
    /// Public HTTP JSON-RPC endpoint used for call simulation.
    pub rpc_url: &'static str,
    /// Deployed GeoCharityPool contract.
    pub pool_address: Address,
    /// cUSD token contract (the stablecoin being donated).
    pub token_address: Address,
    /// WalletConnect Cloud project id. Configured but currently unused: the
    /// client only talks to the injected provider (see DESIGN.md).
    pub walletconnect_project_id: &'static str,
}

impl ChainConfig {
    /// Configuration for the Celo Alfajores testnet.
    pub fn alfajores() -> Self {
        Self {
            chain_id: 44787,
            chain_name: "Celo Alfajores",
            rpc_url: "https://alfajores-forno.celo-testnet.org",
            pool_address: address!("765de816845861e75a25fca122bb6898b8b1282a"),
            token_address: address!("874069fa1ce44d71fdb3660e3d106e644daaf9a2"),
            walletconnect_project_id: "a5f9260bc9bca570190d3b01f477fc45",
        }
    }
}

/// Fixed donation amount in cUSD, as a human-readable decimal string.
///
/// A real deployment would derive this from user input; the pilot donates a
/// fixed amount per trigger.
pub const DONATION_AMOUNT_CUSD: &str = "0.5";

/// Charity zone identifier ("CharityAID", right-padded to 32 bytes).
///
/// Placeholder for the geolocation-derived zone id; the geofencing feature is
/// out of scope for this client.
pub const CHARITY_ZONE_ID: B256 =
    b256!("4368617269747941494400000000000000000000000000000000000000000000");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alfajores_targets_the_testnet() {
        let config = ChainConfig::alfajores();
        assert_eq!(config.chain_id, 44787);
        assert!(config.rpc_url.starts_with("https://"));
        assert_ne!(config.pool_address, config.token_address);
    }

    #[test]
    fn charity_zone_id_is_ascii_padded() {
        let bytes = CHARITY_ZONE_ID.as_slice();
        assert_eq!(&bytes[..10], b"CharityAID");
        assert!(bytes[10..].iter().all(|b| *b == 0));
    }
}
