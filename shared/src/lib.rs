//! # Shared Donation Library
//!
//! Platform-neutral core for the GeoDonate web client. The WASM frontend
//! (`donation-web`) depends on this crate for everything that does not touch
//! the browser: chain configuration, calldata encoding, the approve→donate
//! transaction sequencer, and formatting utilities.
//!
//! ## Structure
//!
//! - **[`config`]**: immutable chain/contract configuration ([`config::ChainConfig`])
//! - **[`abi`]**: calldata encoders for the pool and token contracts
//! - **[`donation`]**: the two-step transaction sequencer and its
//!   [`donation::ContractClient`] seam
//! - **[`rpc`]**: JSON-RPC wire types for the public chain endpoint
//! - **[`error`]**: [`error::ChainError`] and [`error::DonationError`]
//! - **[`utils`]**: wallet address formatting for display
//!
//! ## Usage in the frontend
//!
//! ```rust,no_run
//! use shared::config::{ChainConfig, CHARITY_ZONE_ID, DONATION_AMOUNT_CUSD};
//! use shared::donation::donate_with_approval;
//!
//! # async fn run(client: impl shared::donation::ContractClient, account: alloy_primitives::Address) {
//! let config = ChainConfig::alfajores();
//! let hash = donate_with_approval(
//!     &client,
//!     &config,
//!     Some(account),
//!     CHARITY_ZONE_ID,
//!     DONATION_AMOUNT_CUSD,
//!     |_phase| {},
//! )
//! .await;
//! # }
//! ```

pub mod abi;
pub mod config;
pub mod donation;
pub mod error;
pub mod rpc;
pub mod utils;

pub use config::ChainConfig;
pub use donation::{ContractCall, ContractClient, DonationPhase, PreparedCall, TxHash};
pub use error::{ChainError, DonationError};
