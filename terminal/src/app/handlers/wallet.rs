//! # Wallet Handlers
//!
//! Handlers for wallet connection and disconnection.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks;
use crate::services::wallet::{WalletService, WalletStatus};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle wallet connect button click
///
/// Uses the service's own account when it already signs; otherwise loads the
/// configured key and swaps in a signing client.
pub(crate) fn handle_wallet_connect_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    {
        let mut state = state.write();
        if state.wallet.is_connected() {
            return;
        }

        if let Some(address) = state.chain.account() {
            state.wallet = WalletStatus::Connected(address);
        } else {
            let connected = WalletService::from_config(&state.config)
                .and_then(|wallet| wallet.signing_client(&state.config).map(|c| (wallet, c)));
            match connected {
                Ok((wallet, client)) => {
                    state.chain = Arc::new(client);
                    state.wallet = wallet.status().clone();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Wallet connection failed");
                    state.wallet = WalletStatus::Error(e.to_string());
                    state.notify(NotificationLevel::Error, format!("Wallet connection failed: {e}"));
                    return;
                }
            }
        }

        if let Some(address) = state.wallet.address() {
            tracing::info!(address = %address, "Wallet connected");
            let short = shared::utils::truncate_address(&address.to_string());
            state.notify(NotificationLevel::Success, format!("Wallet connected: {short}"));
        }
    } // Lock released here

    tasks::market::fetch_snapshot(state, event_tx);
}

/// Handle wallet disconnect button click
pub(crate) fn handle_wallet_disconnect_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.wallet = WalletStatus::Disconnected;
    state.snapshot.account = None;
    tracing::info!("Wallet disconnected");
    state.notify(NotificationLevel::Info, "Wallet disconnected");
}
