//! JSON-RPC wire types for the public chain endpoint
//!
//! Only the handful of shapes the client actually sends: a request envelope,
//! the response envelope, and the `eth_call`/`eth_sendTransaction` parameter
//! objects built from a [`ContractCall`]. Field names follow the JSON-RPC and
//! Ethereum JSON conventions, so this module owns all the camelCase.

use alloy_primitives::{hex, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::donation::{ContractCall, PreparedCall};
use crate::error::ChainError;

/// Outgoing JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u32,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self { jsonrpc: "2.0", id: 1, method, params }
    }
}

/// Incoming JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    /// Collapse the envelope into the `result` payload or a [`ChainError`].
    pub fn into_result(self) -> Result<Value, ChainError> {
        if let Some(err) = self.error {
            return Err(ChainError::Rpc { code: err.code, message: err.message });
        }
        self.result
            .ok_or_else(|| ChainError::InvalidResponse("response carries neither result nor error".to_string()))
    }
}

/// `eth_call` parameter object for a simulated contract call.
pub fn call_object(call: &ContractCall) -> Value {
    serde_json::json!({
        "from": call.from.to_string(),
        "to": call.to.to_string(),
        "data": format!("0x{}", hex::encode(&call.data)),
    })
}

/// `eth_sendTransaction` parameter object for a prepared (simulated) call.
///
/// Carries the gas limit produced by simulation so the wallet signs exactly
/// the request that was validated.
pub fn transaction_object(prepared: &PreparedCall) -> Value {
    serde_json::json!({
        "from": prepared.call.from.to_string(),
        "to": prepared.call.to.to_string(),
        "data": format!("0x{}", hex::encode(&prepared.call.data)),
        "gas": quantity(prepared.gas),
    })
}

/// Ethereum JSON quantity encoding: hex, `0x`-prefixed, no leading zeros.
pub fn quantity(value: U256) -> String {
    format!("{value:#x}")
}

/// Parse an Ethereum JSON quantity out of an RPC result payload.
pub fn parse_quantity(value: &Value) -> Result<U256, ChainError> {
    let text = value
        .as_str()
        .ok_or_else(|| ChainError::InvalidResponse(format!("expected quantity string, got {value}")))?;
    U256::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|e| ChainError::InvalidResponse(format!("bad quantity {text:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn sample_call() -> ContractCall {
        ContractCall {
            from: address!("1111111111111111111111111111111111111111"),
            to: address!("765de816845861e75a25fca122bb6898b8b1282a"),
            data: vec![0x09, 0x5e, 0xa7, 0xb3],
        }
    }

    #[test]
    fn request_envelope_shape() {
        let req = RpcRequest::new("eth_call", serde_json::json!([call_object(&sample_call()), "latest"]));
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["method"], "eth_call");
        assert_eq!(encoded["params"][1], "latest");
    }

    #[test]
    fn call_object_hex_fields() {
        let obj = call_object(&sample_call());
        assert_eq!(obj["data"], "0x095ea7b3");
        let to = obj["to"].as_str().unwrap();
        assert!(to.starts_with("0x") && to.len() == 42);
    }

    #[test]
    fn error_envelope_maps_to_rpc_error() {
        let resp: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"insufficient funds"}}"#,
        )
        .unwrap();
        match resp.into_result() {
            Err(ChainError::Rpc { code, message }) => {
                assert_eq!(code, -32000);
                assert_eq!(message, "insufficient funds");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn quantity_round_trip() {
        let gas = U256::from(21_000u64);
        assert_eq!(quantity(gas), "0x5208");
        let parsed = parse_quantity(&Value::String("0x5208".to_string())).unwrap();
        assert_eq!(parsed, gas);
    }

    #[test]
    fn parse_quantity_rejects_non_strings() {
        assert!(parse_quantity(&serde_json::json!(42)).is_err());
        assert!(parse_quantity(&Value::String("0xzz".to_string())).is_err());
    }
}
