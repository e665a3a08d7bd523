//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the browser-injected EIP-1193 provider
//! (`window.ethereum`). The UI label still advertises WalletConnect, but no
//! WalletConnect connector is wired up; only the injected provider is used
//! (see DESIGN.md for the open question).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// INJECTED PROVIDER DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window.ethereum !== 'undefined';
}

export function selectedAccount() {
    if (window.ethereum && window.ethereum.selectedAddress) {
        return window.ethereum.selectedAddress;
    }
    return null;
}

export async function connectInjected() {
    if (!window.ethereum) {
        throw new Error('No injected wallet found. Please install a browser wallet extension.');
    }
    try {
        const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
        if (!accounts || accounts.length === 0) {
            throw new Error('Wallet returned no accounts');
        }
        return accounts[0];
    } catch (error) {
        const errorMsg = error.message || String(error);
        throw new Error('Failed to connect wallet: ' + errorMsg);
    }
}

export async function sendTransaction(txJson) {
    if (!window.ethereum) {
        throw new Error('No injected wallet found');
    }
    try {
        const tx = JSON.parse(txJson);
        return await window.ethereum.request({ method: 'eth_sendTransaction', params: [tx] });
    } catch (error) {
        const errorMsg = error.message || String(error);
        throw new Error(errorMsg);
    }
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', (accounts) => {
            callback(accounts && accounts.length > 0 ? accounts[0] : null);
        });
    }
}
")]
extern "C" {
    /// Whether an EIP-1193 provider is injected into the page
    pub fn hasInjectedProvider() -> bool;

    /// Currently selected account, if the provider already authorized one
    pub fn selectedAccount() -> Option<String>;

    /// Request account access from the injected provider
    #[wasm_bindgen(catch)]
    pub async fn connectInjected() -> Result<JsValue, JsValue>;

    /// Sign and broadcast a transaction through the injected provider
    #[wasm_bindgen(catch)]
    pub async fn sendTransaction(tx_json: &str) -> Result<JsValue, JsValue>;

    /// Subscribe to account changes (connect/disconnect/switch)
    pub fn onAccountsChanged(callback: &js_sys::Function);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

fn js_error_message(e: JsValue) -> String {
    if let Some(err_str) = e.as_string() {
        return err_str;
    }
    // A thrown Error object stringifies through its message property
    match js_sys::Reflect::get(&e, &JsValue::from_str("message")) {
        Ok(message) => message.as_string().unwrap_or_else(|| format!("{e:?}")),
        Err(_) => format!("{e:?}"),
    }
}

/// Connect to the injected provider and return the selected account address.
pub async fn connect_injected_wallet() -> Result<String, String> {
    match connectInjected().await {
        Ok(result) => result
            .as_string()
            .ok_or_else(|| "wallet returned a non-string account".to_string()),
        Err(e) => Err(js_error_message(e)),
    }
}

/// Address the provider already exposes without prompting, if any.
pub fn connected_account() -> Option<String> {
    if hasInjectedProvider() {
        selectedAccount()
    } else {
        None
    }
}

/// Sign and broadcast a prepared transaction object (JSON-encoded) and
/// return the transaction hash.
pub async fn request_send_transaction(tx_json: &str) -> Result<String, String> {
    match sendTransaction(tx_json).await {
        Ok(hash) => hash
            .as_string()
            .ok_or_else(|| "wallet returned a non-string transaction hash".to_string()),
        Err(e) => Err(js_error_message(e)),
    }
}

/// Subscribe to the provider's account changes. The callback receives the new
/// account, or `None` when the wallet disconnects.
pub fn subscribe_accounts_changed(on_change: impl Fn(Option<String>) + 'static) {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |account: JsValue| {
        on_change(account.as_string());
    });
    onAccountsChanged(closure.as_ref().unchecked_ref());
    // The subscription lives for the page lifetime
    closure.forget();
}
