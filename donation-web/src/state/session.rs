//! Session status: one value driving the status line
//!
//! The status reflects the most recent wallet or sequencer outcome. It is a
//! projection, not a log: every change of the external connection flag
//! re-derives it, and disconnecting always resets it regardless of any
//! in-flight sequence.

use leptos::prelude::*;
use shared::config::DONATION_AMOUNT_CUSD;
use shared::utils::truncate_address;

/// Where the session currently stands, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Disconnected,
    Connecting,
    Connected { address: String },
    Approving,
    Donating,
    Sent { hash: String },
    Error { message: String },
}

impl SessionStatus {
    /// Re-derive the status from the provider's connection state.
    pub fn projected(account: Option<&str>) -> Self {
        match account {
            Some(address) => SessionStatus::Connected { address: address.to_string() },
            None => SessionStatus::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self, SessionStatus::Disconnected | SessionStatus::Connecting)
    }

    /// The user-facing status line.
    pub fn line(&self) -> String {
        match self {
            SessionStatus::Disconnected => "Disconnected".to_string(),
            SessionStatus::Connecting => "Connecting...".to_string(),
            SessionStatus::Connected { address } => {
                format!("Connected: {}", truncate_address(address))
            }
            SessionStatus::Approving => {
                format!("Starting approval for {DONATION_AMOUNT_CUSD} cUSD...")
            }
            SessionStatus::Donating => "Approval successful. Initiating donation...".to_string(),
            SessionStatus::Sent { hash } => {
                format!("Donation transaction sent! Hash: {hash}")
            }
            SessionStatus::Error { message } => message.clone(),
        }
    }
}

/// Global session context: the status plus the sequencer's in-flight guard.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub status: RwSignal<SessionStatus>,
    /// Set while a donation sequence is running; a second trigger while this
    /// holds is rejected instead of racing the first.
    pub in_flight: RwSignal<bool>,
    /// Connected account address, tracked separately so transaction progress
    /// does not lose the session.
    pub account: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(SessionStatus::Disconnected),
            in_flight: RwSignal::new(false),
            account: RwSignal::new(None),
        }
    }

    pub fn address(&self) -> Option<String> {
        self.account.get_untracked()
    }

    pub fn set_connecting(&self) {
        self.status.set(SessionStatus::Connecting);
    }

    /// Apply a change of the provider's connection flag.
    pub fn project_account(&self, account: Option<String>) {
        self.status.set(SessionStatus::projected(account.as_deref()));
        self.account.set(account);
    }

    pub fn set_error(&self, message: String) {
        self.status.set(SessionStatus::Error { message });
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_follows_the_connection_flag() {
        let connected = SessionStatus::projected(Some("0x765de816845861e75a25fca122bb6898b8b1282a"));
        assert_eq!(connected.line(), "Connected: 0x765d...282a");

        // disconnecting resets exactly, whatever came before
        assert_eq!(SessionStatus::projected(None), SessionStatus::Disconnected);
        assert_eq!(SessionStatus::projected(None).line(), "Disconnected");
    }

    #[test]
    fn projection_is_idempotent() {
        let addr = "0x765de816845861e75a25fca122bb6898b8b1282a";
        assert_eq!(
            SessionStatus::projected(Some(addr)),
            SessionStatus::projected(Some(addr))
        );
    }

    #[test]
    fn status_lines_match_the_flow() {
        assert_eq!(
            SessionStatus::Approving.line(),
            "Starting approval for 0.5 cUSD..."
        );
        assert_eq!(
            SessionStatus::Sent { hash: "0xabc".to_string() }.line(),
            "Donation transaction sent! Hash: 0xabc"
        );
        let err = SessionStatus::Error {
            message: "Transaction Error: Approval failed: RPC error -32000: insufficient funds"
                .to_string(),
        };
        assert!(err.line().contains("Transaction Error:"));
        assert!(err.line().contains("insufficient funds"));
    }

    #[test]
    fn transaction_phases_count_as_connected() {
        assert!(SessionStatus::Approving.is_connected());
        assert!(!SessionStatus::Connecting.is_connected());
        assert!(!SessionStatus::Disconnected.is_connected());
    }
}
