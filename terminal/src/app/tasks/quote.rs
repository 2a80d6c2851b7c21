//! # Quote Tasks
//!
//! Background quote fetches for the trading cards.

use crate::app::events::AppEvent;
use crate::app::lifecycle::Surface;
use crate::app::quote::derive_quote;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Debounce window between the last keystroke and the quote read.
pub const QUOTE_DEBOUNCE_MS: u64 = 500;

/// Fetch a quote for the card's current amount and direction.
///
/// Internal task function - the result is tagged with the input it was
/// computed for so stale results can be dropped.
pub(crate) fn fetch_quote(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, surface: Surface) {
    let (chain, contracts, fees, direction, input) = {
        let mut state = state.write();
        let fees = state.snapshot.fees;
        let contracts = state.config.contracts;
        let chain = state.chain.clone();
        let Some(form) = state.form_mut(surface) else {
            return;
        };
        form.quote_requested_at = None;
        form.quote_loading = true;
        (chain, contracts, fees, form.direction, form.amount.clone())
    };

    spawn(async move {
        let quote = derive_quote(chain.as_ref(), &contracts, direction, &input, &fees).await;
        tracing::debug!(
            surface = ?surface,
            direction = ?direction,
            input = %input,
            amount_out = %quote.amount_out,
            "Quote derived"
        );
        let _ = event_tx
            .send(AppEvent::QuoteResult {
                surface,
                direction,
                input,
                quote,
            })
            .await;
    });
}
