//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the dashboard, coordinating between the
//! egui views, async tasks and the shared [`AppState`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()        drain events, refresh timer, debounce   │
//! │  - handle_*()       user intents, delegated to handlers     │
//! │                                                             │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)         │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::market::fetch_snapshot   contract readings        │
//! │  - tasks::quote::fetch_quote       quote derivation         │
//! │  - tasks::transaction::run         approve → act driver     │
//! │                                                             │
//! │  ChainService (alloy RpcClient or a test double)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`approval`]**: whether an `approve` must precede a trade
//! - **[`quote`]**: estimated output of a trade
//! - **[`lifecycle`]**: per-surface transaction state machine
//! - **[`handlers`]**: user action handlers (trade, boost, arbitrage, wallet)
//! - **[`tasks`]**: async background tasks

pub mod approval;
pub(crate) mod event_handler;
pub mod events;
pub mod handlers;
pub mod lifecycle;
pub mod quote;
pub mod state;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

pub use events::AppEvent;
pub use lifecycle::{LifecycleEvent, Surface, TxState};
pub use quote::{Direction, Quote};
pub use state::{AppState, FormState, NotificationLevel, SubmitButton};

use crate::core::error::Result;
use crate::core::service::ChainService;
use async_channel::{Receiver, Sender};
use lib_core::Config;
use lib_evm::{ArbitrageSide, RpcClient};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Main application orchestrator.
///
/// # Example
///
/// ```rust,ignore
/// let app = App::new(Config::load()?)?;
/// loop {
///     app.on_tick();
///     let state = app.state.read();
///     render(&state);
/// }
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for rendering, `write()` for updates
    /// - **Critical**: Hold locks for minimal duration and never across `.await`
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (internal use).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the app with a read-only RPC client for `config`.
    ///
    /// The wallet stays disconnected until the user connects it. No network
    /// request is made here; the first `on_tick()` starts the initial refresh.
    pub fn new(config: Config) -> Result<Self> {
        let client = RpcClient::builder()
            .rpc_url(config.rpc_url.clone())
            .chain_id(config.chain_id)
            .build()?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Create the app on top of any chain service (tests inject doubles here).
    pub fn with_service(config: Config, chain: Arc<dyn ChainService>) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        let state = AppState::new(Arc::new(config), chain);

        tracing::info!(
            chain = %state.config.chain_name,
            chain_id = state.config.chain_id,
            wallet = ?state.wallet,
            "Application state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called once per frame.
    ///
    /// Processes pending async events, starts the periodic refresh and fires
    /// debounced quote fetches.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        let (refresh_due, quotes_due) = {
            let state = self.state.read();
            let refresh_due = !state.fetching_snapshot
                && state
                    .last_refresh
                    .is_none_or(|t| t.elapsed() >= state.config.refresh_interval);
            let debounce = Duration::from_millis(tasks::quote::QUOTE_DEBOUNCE_MS);
            let quotes_due: Vec<Surface> = [Surface::MintRedeem, Surface::Swap]
                .into_iter()
                .filter(|s| {
                    state
                        .form(*s)
                        .and_then(|f| f.quote_requested_at)
                        .is_some_and(|t| t.elapsed() >= debounce)
                })
                .collect();
            (refresh_due, quotes_due)
        };

        if refresh_due {
            tasks::market::fetch_snapshot(self.state.clone(), self.event_tx.clone());
        }
        for surface in quotes_due {
            tasks::quote::fetch_quote(self.state.clone(), self.event_tx.clone(), surface);
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Amount typed into a trading card
    pub fn handle_amount_change(&mut self, surface: Surface, raw: &str) {
        handlers::trade::set_amount(self.state.clone(), surface, raw);
    }

    /// Direction toggle of a trading card
    pub fn handle_flip_click(&mut self, surface: Surface) {
        handlers::trade::flip_direction(self.state.clone(), surface);
    }

    /// Max button of a trading card
    pub fn handle_max_click(&mut self, surface: Surface) {
        handlers::trade::set_max_amount(self.state.clone(), surface);
    }

    /// Primary button of a trading card
    pub fn handle_submit_click(&mut self, surface: Surface) {
        handlers::trade::submit(self.state.clone(), self.event_tx.clone(), surface);
    }

    /// Fetch the quote for a card now, skipping the debounce
    pub fn trigger_quote_fetch(&mut self, surface: Surface) {
        tasks::quote::fetch_quote(self.state.clone(), self.event_tx.clone(), surface);
    }

    pub fn handle_boost_click(&mut self) {
        handlers::boost::submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_locker_link_click(&mut self) {
        handlers::boost::open_locker_in_explorer(self.state.clone());
    }

    pub fn handle_arbitrage_amount_change(&mut self, raw: &str) {
        handlers::arbitrage::set_amount(self.state.clone(), raw);
    }

    pub fn handle_arbitrage_max_click(&mut self) {
        handlers::arbitrage::set_max_amount(self.state.clone());
    }

    /// Fing or Fong button
    pub fn handle_arbitrage_click(&mut self, side: ArbitrageSide) {
        handlers::arbitrage::submit(self.state.clone(), self.event_tx.clone(), side);
    }

    pub fn handle_refresh_click(&mut self) {
        handlers::market::refresh(self.state.clone(), self.event_tx.clone());
    }

    /// Open the last transaction of `surface` on the explorer
    pub fn handle_tx_link_click(&mut self, surface: Surface) {
        let tx_hash = self.state.read().lifecycles.get(surface).last_tx;
        if let Some(tx_hash) = tx_hash {
            handlers::market::open_tx_in_explorer(self.state.clone(), tx_hash.to_string());
        }
    }

    pub fn handle_wallet_connect_click(&mut self) {
        handlers::wallet::handle_wallet_connect_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_wallet_disconnect_click(&mut self) {
        handlers::wallet::handle_wallet_disconnect_click(self.state.clone());
    }
}
