//! Error types for chain access and the donation sequence

use thiserror::Error;

/// Failure talking to the chain, either through the public RPC endpoint or
/// through the connected wallet.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The HTTP request itself failed (network down, CORS, endpoint gone).
    #[error("RPC transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object. Simulation failures
    /// (reverts, insufficient funds) surface here.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The wallet refused to sign or broadcast the prepared request.
    #[error("wallet rejected request: {0}")]
    Wallet(String),

    /// The node answered 200 but the payload was not what we asked for.
    #[error("malformed RPC response: {0}")]
    InvalidResponse(String),
}

/// Terminal outcome of a failed donation sequence.
///
/// The step prefixes in the display output ("Approval failed" / "Donation
/// failed") are part of the user-facing contract: the status line shows them
/// verbatim behind a `Transaction Error:` banner.
#[derive(Debug, Error)]
pub enum DonationError {
    /// The amount string did not parse to a positive wei value. Checked
    /// before any contract call.
    #[error("invalid donation amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    /// No connected account was supplied.
    #[error("no wallet session")]
    NoSession,

    /// Step 1 (token allowance) failed; the donation was not attempted.
    #[error("Approval failed: {0}")]
    Approval(#[source] ChainError),

    /// Step 2 (pool donation) failed. The allowance from step 1 remains
    /// granted; there is no rollback.
    #[error("Donation failed: {0}")]
    Donation(#[source] ChainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_failure_keeps_underlying_message() {
        let err = DonationError::Approval(ChainError::Rpc {
            code: -32000,
            message: "insufficient funds".to_string(),
        });
        let text = err.to_string();
        assert!(text.starts_with("Approval failed:"));
        assert!(text.contains("insufficient funds"));
    }

    #[test]
    fn donation_failure_names_the_step() {
        let err = DonationError::Donation(ChainError::Wallet("user denied".to_string()));
        assert!(err.to_string().starts_with("Donation failed:"));
    }
}
