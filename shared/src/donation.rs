//! The approve→donate transaction sequencer
//!
//! Donating cUSD through the pool takes two on-chain writes from the user's
//! wallet: grant the pool an allowance on the token contract, then call the
//! pool's donate entry point. Each write is simulated against current chain
//! state first, and the simulated request is what goes to the wallet for
//! signing. The sequence stops at the first failure; a granted allowance is
//! never rolled back, and no receipt confirmation is awaited — success means
//! "accepted for broadcast".

use alloy_primitives::{utils::parse_ether, Address, B256, U256};

use crate::abi;
use crate::config::ChainConfig;
use crate::error::{ChainError, DonationError};

/// A contract write before simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    pub from: Address,
    pub to: Address,
    pub data: Vec<u8>,
}

/// A simulated call, ready for the wallet to sign and broadcast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedCall {
    pub call: ContractCall,
    /// Gas limit produced by simulation.
    pub gas: U256,
}

/// Transaction handle returned at broadcast time, before mining.
pub type TxHash = String;

/// Chain access seam for the sequencer.
///
/// The production implementation simulates through the public RPC endpoint
/// and submits through the connected wallet; tests substitute a double.
#[allow(async_fn_in_trait)]
pub trait ContractClient {
    /// Dry-run `call` against current chain state and produce a signable
    /// request. Argument or state problems (reverts, insufficient balance)
    /// fail here, before the wallet is involved.
    async fn simulate(&self, call: &ContractCall) -> Result<PreparedCall, ChainError>;

    /// Hand a prepared request to the wallet for signing and broadcast.
    async fn submit(&self, prepared: &PreparedCall) -> Result<TxHash, ChainError>;
}

/// Progress points surfaced to the status display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonationPhase {
    Approving,
    Donating,
}

/// Parse a human-readable cUSD amount into wei (18 decimals, as cUSD
/// defines). Rejects malformed input and non-positive amounts before any
/// contract call is made.
pub fn parse_donation_amount(amount: &str) -> Result<U256, DonationError> {
    let wei = parse_ether(amount).map_err(|e| DonationError::InvalidAmount {
        amount: amount.to_string(),
        reason: e.to_string(),
    })?;
    if wei.is_zero() {
        return Err(DonationError::InvalidAmount {
            amount: amount.to_string(),
            reason: "amount must be positive".to_string(),
        });
    }
    Ok(wei)
}

/// Step 1: ask the token contract to grant the pool an allowance of
/// `amount_wei` over `account`'s balance.
pub async fn approve_spend<C: ContractClient>(
    client: &C,
    config: &ChainConfig,
    account: Address,
    amount_wei: U256,
) -> Result<TxHash, DonationError> {
    let call = ContractCall {
        from: account,
        to: config.token_address,
        data: abi::encode_approve(config.pool_address, amount_wei),
    };
    let prepared = client.simulate(&call).await.map_err(DonationError::Approval)?;
    let hash = client.submit(&prepared).await.map_err(DonationError::Approval)?;
    log::info!("approval transaction accepted for broadcast: {hash}");
    Ok(hash)
}

/// Step 2: donate `amount_wei` to `charity_id` through the pool contract.
/// Only valid after a successful approval.
pub async fn donate<C: ContractClient>(
    client: &C,
    config: &ChainConfig,
    account: Address,
    charity_id: B256,
    amount_wei: U256,
) -> Result<TxHash, DonationError> {
    let call = ContractCall {
        from: account,
        to: config.pool_address,
        data: abi::encode_donate(charity_id, amount_wei),
    };
    let prepared = client.simulate(&call).await.map_err(DonationError::Donation)?;
    let hash = client.submit(&prepared).await.map_err(DonationError::Donation)?;
    log::info!("donation transaction accepted for broadcast: {hash}");
    Ok(hash)
}

/// Run the full sequence: parse the amount, approve the spend, then donate.
///
/// `on_phase` fires as each step begins, so the caller can mirror progress
/// into its status display. Any failure aborts the sequence at that point and
/// is returned wrapped with the step that failed; there is no retry.
pub async fn donate_with_approval<C: ContractClient>(
    client: &C,
    config: &ChainConfig,
    account: Option<Address>,
    charity_id: B256,
    amount: &str,
    mut on_phase: impl FnMut(DonationPhase),
) -> Result<TxHash, DonationError> {
    let account = account.ok_or(DonationError::NoSession)?;
    let amount_wei = parse_donation_amount(amount)?;

    on_phase(DonationPhase::Approving);
    approve_spend(client, config, account, amount_wei).await?;

    on_phase(DonationPhase::Donating);
    donate(client, config, account, charity_id, amount_wei).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHARITY_ZONE_ID;
    use std::cell::RefCell;

    const ACCOUNT: Address = alloy_primitives::address!("1111111111111111111111111111111111111111");

    /// Scripted double: records every call, optionally failing a step.
    #[derive(Default)]
    struct MockClient {
        simulated: RefCell<Vec<ContractCall>>,
        submitted: RefCell<Vec<ContractCall>>,
        fail_simulate_to: Option<(Address, String)>,
    }

    impl MockClient {
        fn failing_simulation_at(to: Address, message: &str) -> Self {
            Self {
                fail_simulate_to: Some((to, message.to_string())),
                ..Self::default()
            }
        }

        fn submitted_to(&self, to: Address) -> usize {
            self.submitted.borrow().iter().filter(|c| c.to == to).count()
        }
    }

    impl ContractClient for MockClient {
        async fn simulate(&self, call: &ContractCall) -> Result<PreparedCall, ChainError> {
            self.simulated.borrow_mut().push(call.clone());
            if let Some((to, message)) = &self.fail_simulate_to {
                if *to == call.to {
                    return Err(ChainError::Rpc { code: -32000, message: message.clone() });
                }
            }
            Ok(PreparedCall { call: call.clone(), gas: U256::from(90_000u64) })
        }

        async fn submit(&self, prepared: &PreparedCall) -> Result<TxHash, ChainError> {
            self.submitted.borrow_mut().push(prepared.call.clone());
            Ok(format!("0xhash{:04}", self.submitted.borrow().len()))
        }
    }

    fn config() -> ChainConfig {
        ChainConfig::alfajores()
    }

    #[tokio::test]
    async fn full_run_returns_the_donation_hash() {
        let client = MockClient::default();
        let cfg = config();
        let mut phases = Vec::new();

        let hash = donate_with_approval(
            &client,
            &cfg,
            Some(ACCOUNT),
            CHARITY_ZONE_ID,
            "0.5",
            |phase| phases.push(phase),
        )
        .await
        .unwrap();

        // the returned handle is the donation's, not the approval's
        assert_eq!(hash, "0xhash0002");
        assert_eq!(phases, vec![DonationPhase::Approving, DonationPhase::Donating]);
        assert_eq!(client.submitted_to(cfg.token_address), 1);
        assert_eq!(client.submitted_to(cfg.pool_address), 1);
    }

    #[tokio::test]
    async fn approval_requests_at_least_the_donation_amount() {
        let client = MockClient::default();
        let cfg = config();

        donate_with_approval(&client, &cfg, Some(ACCOUNT), CHARITY_ZONE_ID, "0.5", |_| {})
            .await
            .unwrap();

        let simulated = client.simulated.borrow();
        let approve = simulated.iter().find(|c| c.to == cfg.token_address).unwrap();
        // approve(address spender, uint256 amount): spender then amount words
        let spender = Address::from_slice(&approve.data[16..36]);
        let allowance = U256::from_be_slice(&approve.data[36..68]);
        assert_eq!(spender, cfg.pool_address);
        assert!(allowance >= parse_donation_amount("0.5").unwrap());
    }

    #[tokio::test]
    async fn approval_failure_aborts_before_any_donation_call() {
        let cfg = config();
        let client = MockClient::failing_simulation_at(cfg.token_address, "insufficient funds");
        let mut phases = Vec::new();

        let err = donate_with_approval(
            &client,
            &cfg,
            Some(ACCOUNT),
            CHARITY_ZONE_ID,
            "0.5",
            |phase| phases.push(phase),
        )
        .await
        .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("Approval failed"));
        assert!(text.contains("insufficient funds"));
        assert_eq!(phases, vec![DonationPhase::Approving]);
        // the pool contract was never touched, not even for simulation
        let simulated = client.simulated.borrow();
        assert!(simulated.iter().all(|c| c.to == cfg.token_address));
        assert_eq!(client.submitted.borrow().len(), 0);
    }

    #[tokio::test]
    async fn donation_failure_is_wrapped_with_its_step() {
        let cfg = config();
        let client = MockClient::failing_simulation_at(cfg.pool_address, "execution reverted");

        let err = donate_with_approval(&client, &cfg, Some(ACCOUNT), CHARITY_ZONE_ID, "0.5", |_| {})
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Donation failed"));
        // the approval had already been broadcast; it is not rolled back
        assert_eq!(client.submitted_to(cfg.token_address), 1);
        assert_eq!(client.submitted_to(cfg.pool_address), 0);
    }

    #[tokio::test]
    async fn missing_session_makes_no_contract_calls() {
        let client = MockClient::default();
        let cfg = config();

        let err = donate_with_approval(&client, &cfg, None, CHARITY_ZONE_ID, "0.5", |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, DonationError::NoSession));
        assert_eq!(client.simulated.borrow().len(), 0);
        assert_eq!(client.submitted.borrow().len(), 0);
    }

    #[tokio::test]
    async fn bad_amounts_are_rejected_before_any_call() {
        let cfg = config();
        for bad in ["", "abc", "0", "0.0"] {
            let client = MockClient::default();
            let err =
                donate_with_approval(&client, &cfg, Some(ACCOUNT), CHARITY_ZONE_ID, bad, |_| {})
                    .await
                    .unwrap_err();
            assert!(matches!(err, DonationError::InvalidAmount { .. }), "amount {bad:?}");
            assert_eq!(client.simulated.borrow().len(), 0, "amount {bad:?}");
        }
    }

    #[test]
    fn parse_donation_amount_is_wei() {
        assert_eq!(
            parse_donation_amount("0.5").unwrap(),
            U256::from(500_000_000_000_000_000u64)
        );
        assert_eq!(
            parse_donation_amount("1").unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }
}
