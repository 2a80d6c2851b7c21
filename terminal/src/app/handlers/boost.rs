//! # Liquidity Boost Handlers

use super::{start_plan, submit_account};
use crate::app::events::AppEvent;
use crate::app::lifecycle::Surface;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks::transaction::TxPlan;
use async_channel::Sender;
use lib_evm::ContractCall;
use parking_lot::RwLock;
use std::sync::Arc;

/// Call `boost()` on the liquidity locker.
///
/// Refused while the locker holds neither PLS nor xTIME.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut state = state.write();
    if submit_account(&mut state, Surface::Boost).is_none() {
        return;
    }
    if !state.snapshot.locker_has_balance() {
        state.notify(NotificationLevel::Warning, "Nothing to boost - locker is empty");
        return;
    }

    let locker = state.config.contracts.locker;
    start_plan(
        &mut state,
        event_tx,
        Surface::Boost,
        TxPlan::direct(ContractCall::Boost { locker }),
        "Liquidity boost".to_string(),
    );
}

/// Open the locker contract on the block explorer.
pub(crate) fn open_locker_in_explorer(state: Arc<RwLock<AppState>>) {
    let url = {
        let state = state.read();
        state.config.explorer_address_url(state.config.contracts.locker)
    };
    if let Err(e) = open::that(&url) {
        tracing::warn!(url = %url, error = %e, "Failed to open explorer link");
        state
            .write()
            .notify(NotificationLevel::Error, format!("Could not open browser: {e}"));
    }
}
