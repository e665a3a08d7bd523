//! Donation page: connect the wallet, then trigger the approve→donate
//! sequence against the pool contract.

use leptos::prelude::*;
use shared::config::{ChainConfig, CHARITY_ZONE_ID, DONATION_AMOUNT_CUSD};
use shared::donation::{donate_with_approval, DonationPhase};
use shared::utils::format_address;
use alloy_primitives::Address;

use crate::services::chain::RpcWalletClient;
use crate::services::wallet;
use crate::state::session::{use_session_context, SessionStatus};

#[component]
pub fn DonatePage() -> impl IntoView {
    let session = use_session_context();
    let config = StoredValue::new(expect_context::<ChainConfig>());

    // Reflect the provider's current connection state, then follow its
    // changes; every change re-derives the displayed status.
    session.project_account(wallet::connected_account());
    wallet::subscribe_accounts_changed(move |account| {
        session.project_account(account);
    });

    let on_connect = move |_| {
        session.set_connecting();
        leptos::task::spawn_local(async move {
            match wallet::connect_injected_wallet().await {
                Ok(address) => {
                    log::info!("wallet connected: {address}");
                    session.project_account(Some(address));
                }
                Err(e) => {
                    log::error!("wallet connection failed: {e}");
                    session.set_error(format!("Failed to connect wallet: {e}"));
                }
            }
        });
    };

    let on_trigger = move |_| {
        // Single slot: a second trigger while one sequence is pending is
        // rejected instead of racing it for the status display.
        if session.in_flight.get_untracked() {
            return;
        }

        let Some(address) = session.address() else {
            session.set_error("Please connect your wallet first.".to_string());
            return;
        };
        let account = match address.parse::<Address>() {
            Ok(account) => account,
            Err(e) => {
                session.set_error(format!("Transaction Error: bad account address: {e}"));
                return;
            }
        };

        session.in_flight.set(true);
        leptos::task::spawn_local(async move {
            let cfg = config.get_value();
            let client = RpcWalletClient::new(&cfg);

            let result = donate_with_approval(
                &client,
                &cfg,
                Some(account),
                CHARITY_ZONE_ID,
                DONATION_AMOUNT_CUSD,
                |phase| {
                    session.status.set(match phase {
                        DonationPhase::Approving => SessionStatus::Approving,
                        DonationPhase::Donating => SessionStatus::Donating,
                    });
                },
            )
            .await;

            match result {
                Ok(hash) => session.status.set(SessionStatus::Sent { hash }),
                Err(e) => {
                    log::error!("donation sequence failed: {e}");
                    session.set_error(format!("Transaction Error: {e}"));
                }
            }
            session.in_flight.set(false);
        });
    };

    view! {
        <div class="content-wrapper" style="padding: 20px; text-align: center;">
            <h2>"Celo Geo-Donation dApp"</h2>
            <p>"Status: " <strong>{move || session.status.get().line()}</strong></p>

            {move || if session.account.get().is_some() {
                view! {
                    <div>
                        <p>
                            "Charity Zone ID: "
                            {format_address(&CHARITY_ZONE_ID.to_string(), 10, 0)}
                        </p>
                        <p>"Donation Amount: " {DONATION_AMOUNT_CUSD} " cUSD"</p>
                        <button
                            class="btn"
                            on:click=on_trigger
                            disabled=move || session.in_flight.get()
                        >
                            {move || if session.in_flight.get() {
                                "Donating..."
                            } else {
                                "Trigger Donation"
                            }}
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div>
                        <button class="btn" on:click=on_connect>
                            "Connect Wallet (using WalletConnect)"
                        </button>
                    </div>
                }.into_any()
            }}

            <p style="margin-top: 20px; font-size: small;">
                "Contract Address: "
                {config.with_value(|c| c.pool_address.to_string())}
            </p>
        </div>
    }
}
