//! Production [`ContractClient`]: public RPC for simulation, injected wallet
//! for signing and broadcast.

use gloo_net::http::Request;
use serde_json::json;
use shared::donation::{ContractCall, ContractClient, PreparedCall, TxHash};
use shared::rpc::{call_object, parse_quantity, transaction_object, RpcRequest, RpcResponse};
use shared::{ChainConfig, ChainError};

use crate::services::wallet;

/// Chain access through the Forno public endpoint plus the injected wallet.
pub struct RpcWalletClient {
    rpc_url: &'static str,
}

impl RpcWalletClient {
    pub fn new(config: &ChainConfig) -> Self {
        Self { rpc_url: config.rpc_url }
    }

    async fn rpc(&self, request: RpcRequest<'_>) -> Result<serde_json::Value, ChainError> {
        let response = Request::post(self.rpc_url)
            .json(&request)
            .map_err(|e| ChainError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ChainError::Transport(format!(
                "endpoint answered HTTP {}",
                response.status()
            )));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
        envelope.into_result()
    }
}

impl ContractClient for RpcWalletClient {
    async fn simulate(&self, call: &ContractCall) -> Result<PreparedCall, ChainError> {
        // eth_call validates the arguments against current chain state;
        // a revert or balance problem fails the sequence here, before the
        // wallet prompts the user.
        let call_obj = call_object(call);
        self.rpc(RpcRequest::new("eth_call", json!([call_obj.clone(), "latest"])))
            .await?;

        // The gas limit makes the request signable as simulated.
        let gas_result = self
            .rpc(RpcRequest::new("eth_estimateGas", json!([call_obj, "latest"])))
            .await?;
        let gas = parse_quantity(&gas_result)?;

        Ok(PreparedCall { call: call.clone(), gas })
    }

    async fn submit(&self, prepared: &PreparedCall) -> Result<TxHash, ChainError> {
        let tx = transaction_object(prepared);
        wallet::request_send_transaction(&tx.to_string())
            .await
            .map_err(ChainError::Wallet)
    }
}
