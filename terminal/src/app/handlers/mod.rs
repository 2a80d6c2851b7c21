//! # Event Handlers
//!
//! User intents organized by control surface. Handlers validate against the
//! latest state under a short write lock, move the surface's lifecycle out of
//! idle and hand the transaction plan to [`crate::app::tasks::transaction`].

pub mod arbitrage;
pub mod boost;
pub mod market;
pub mod trade;
pub mod wallet;

use crate::app::events::AppEvent;
use crate::app::lifecycle::{LifecycleEvent, Surface};
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks::transaction::{self, TxPlan};
use async_channel::Sender;
use lib_evm::Address;

/// Account to act for, if `surface` may submit right now.
///
/// A busy surface ignores the submit silently; a missing wallet is reported.
pub(crate) fn submit_account(state: &mut AppState, surface: Surface) -> Option<Address> {
    if !state.tx_state(surface).is_idle() {
        tracing::debug!(
            surface = ?surface,
            state = state.tx_state(surface).name(),
            "Submit ignored - transaction in progress"
        );
        return None;
    }

    let account = state.wallet.address();
    if account.is_none() {
        state.notify(NotificationLevel::Warning, "Connect a wallet first");
    }
    account
}

/// Start the lifecycle of `surface` and spawn the driver for `plan`.
///
/// Call with the write lock held only for the lifecycle update; the driver
/// itself runs on the runtime.
pub(crate) fn start_plan(
    state: &mut AppState,
    event_tx: Sender<AppEvent>,
    surface: Surface,
    plan: TxPlan,
    description: String,
) {
    let lifecycle = state.lifecycles.get_mut(surface);
    if !lifecycle.handle(&LifecycleEvent::Begin {
        needs_approval: plan.approval.is_some(),
    }) {
        return;
    }
    lifecycle.description = description;

    tracing::info!(
        surface = ?surface,
        description = %lifecycle.description,
        needs_approval = plan.approval.is_some(),
        "Submitting"
    );

    transaction::spawn(
        state.chain.clone(),
        surface,
        plan,
        state.config.cooldown,
        event_tx,
    );
}
