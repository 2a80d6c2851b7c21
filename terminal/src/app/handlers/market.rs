//! # Market Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Manual refresh of all readings.
pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    tracing::debug!("Manual refresh requested");
    tasks::market::fetch_snapshot(state, event_tx);
}

/// Open a transaction on the block explorer.
pub(crate) fn open_tx_in_explorer(state: Arc<RwLock<AppState>>, tx_hash: String) {
    let url = state.read().config.explorer_tx_url(&tx_hash);
    if let Err(e) = open::that(&url) {
        tracing::warn!(url = %url, error = %e, "Failed to open explorer link");
    }
}
