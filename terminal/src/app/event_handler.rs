//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Every handler takes the write lock for the duration of one state update and
//! releases it before spawning follow-up tasks.

use crate::app::events::AppEvent;
use crate::app::lifecycle::{LifecycleEvent, Surface};
use crate::app::quote::{Direction, Quote};
use crate::app::state::NotificationLevel;
use crate::app::{tasks, App};
use lib_evm::{Snapshot, TxHash};
use lib_utils::time::now_utc;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SnapshotUpdated(snapshot) => {
                self.handle_snapshot_updated(*snapshot);
            }
            AppEvent::QuoteResult {
                surface,
                direction,
                input,
                quote,
            } => {
                self.handle_quote_result(surface, direction, input, quote);
            }
            AppEvent::TxSubmitted {
                surface,
                tx_hash,
                function,
            } => {
                self.handle_tx_submitted(surface, tx_hash, function);
            }
            AppEvent::Lifecycle { surface, event } => {
                self.handle_lifecycle(surface, event);
            }
        }
    }
}

impl App {
    fn handle_snapshot_updated(&mut self, mut snapshot: Snapshot) {
        let refresh_again = {
            let mut state = self.state.write();

            // wallet disconnected while the fetch was in flight
            if !state.wallet.is_connected() {
                snapshot.account = None;
            }

            let fees = snapshot.fees;
            state.snapshot = snapshot;
            state.last_refresh_at = Some(now_utc());
            for surface in [Surface::MintRedeem, Surface::Swap] {
                if let Some(form) = state.form_mut(surface) {
                    form.quote.fee_pct = form.direction.fee_pct(&fees);
                }
            }

            std::mem::take(&mut state.refresh_pending)
        };

        if refresh_again {
            tracing::debug!("Replaying refresh requested during fetch");
            tasks::market::fetch_snapshot(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_quote_result(
        &mut self,
        surface: Surface,
        direction: Direction,
        input: String,
        quote: Quote,
    ) {
        let mut state = self.state.write();
        let Some(form) = state.form_mut(surface) else {
            return;
        };

        if form.direction != direction || form.amount != input {
            tracing::debug!(
                surface = ?surface,
                quoted = %input,
                current = %form.amount,
                "Dropping stale quote"
            );
            return;
        }

        form.quote = quote;
        form.quote_input = input;
        form.quote_loading = false;
    }

    fn handle_tx_submitted(&mut self, surface: Surface, tx_hash: TxHash, function: &'static str) {
        let mut state = self.state.write();
        state.lifecycles.get_mut(surface).last_tx = Some(tx_hash);
        tracing::info!(surface = ?surface, function, tx_hash = %tx_hash, "Transaction submitted");

        let short = shared::utils::format_address(&tx_hash.to_string(), 10, 6);
        state.notify(NotificationLevel::Info, format!("{function} submitted\n{short}"));
    }

    fn handle_lifecycle(&mut self, surface: Surface, event: LifecycleEvent) {
        let refresh = {
            let mut state = self.state.write();
            let lifecycle = state.lifecycles.get_mut(surface);
            if !lifecycle.handle(&event) {
                return;
            }
            let description = lifecycle.description.clone();
            tracing::info!(
                surface = ?surface,
                event = ?event,
                state = %state.tx_state(surface),
                "Lifecycle advanced"
            );

            match event {
                LifecycleEvent::ApprovalConfirmed => {
                    state.notify(NotificationLevel::Info, "Approval confirmed");
                    // allowance changed on-chain even if the primary later fails
                    true
                }
                LifecycleEvent::PrimaryConfirmed => {
                    if surface == Surface::Arbitrage {
                        state.arbitrage_amount.clear();
                    } else if let Some(form) = state.form_mut(surface) {
                        form.clear();
                    }
                    state.notify(NotificationLevel::Success, format!("{description} confirmed"));
                    true
                }
                LifecycleEvent::Failed { message } => {
                    state.notify(NotificationLevel::Error, message);
                    false
                }
                LifecycleEvent::Begin { .. } | LifecycleEvent::CooldownElapsed => false,
            }
        };

        if refresh {
            tasks::market::fetch_snapshot(self.state.clone(), self.event_tx.clone());
        }
    }
}
