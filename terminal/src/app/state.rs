//! # Application State Types
//!
//! Everything the views render and the handlers mutate: chain readings,
//! trading-card forms, per-surface lifecycles and queued notifications.

use crate::app::approval::needs_approval;
use crate::app::lifecycle::{Lifecycles, Surface, TxState};
use crate::app::quote::{Direction, Quote};
use crate::core::service::ChainService;
use crate::services::wallet::WalletStatus;
use crate::utils::validation::validate_trade_amount;
use chrono::{DateTime, Utc};
use lib_core::{parse_positive_amount, Config};
use lib_evm::{Snapshot, U256};
use std::sync::Arc;
use std::time::Instant;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Amount input and quote of one trading card.
#[derive(Debug, Clone)]
pub struct FormState {
    pub direction: Direction,
    pub amount: String,
    pub quote: Quote,
    /// Amount the current quote was computed for
    pub quote_input: String,
    pub quote_loading: bool,
    /// Set on input change; the quote fetch fires once the debounce elapses
    pub quote_requested_at: Option<Instant>,
}

impl FormState {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            amount: String::new(),
            quote: Quote::zero(0.0),
            quote_input: String::new(),
            quote_loading: false,
            quote_requested_at: None,
        }
    }

    /// Whether the quote was computed for the amount currently typed.
    pub fn quote_is_current(&self) -> bool {
        !self.quote_loading && self.quote_requested_at.is_none() && self.quote_input == self.amount
    }

    /// Drop amount and quote (after a confirmed trade or a direction flip).
    pub fn clear(&mut self) {
        self.amount.clear();
        self.quote = Quote::zero(self.quote.fee_pct);
        self.quote_input.clear();
        self.quote_loading = false;
        self.quote_requested_at = None;
    }
}

/// What the primary button of a surface shows and does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    /// Clicking connects the wallet instead of submitting
    pub connects_wallet: bool,
}

impl SubmitButton {
    fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            connects_wallet: false,
        }
    }

    fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            connects_wallet: false,
        }
    }

    fn connect() -> Self {
        Self {
            label: "Connect Wallet".to_string(),
            enabled: true,
            connects_wallet: true,
        }
    }
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Chain access; replaced by a signing client on wallet connect
    pub chain: Arc<dyn ChainService>,
    pub wallet: WalletStatus,

    /// Latest contract readings
    pub snapshot: Snapshot,
    pub last_refresh: Option<Instant>,
    pub last_refresh_at: Option<DateTime<Utc>>,
    /// Guard against overlapping snapshot fetches
    pub fetching_snapshot: bool,
    /// A refresh was requested while one was in flight
    pub refresh_pending: bool,

    pub mint_redeem: FormState,
    pub swap: FormState,
    pub arbitrage_amount: String,

    pub lifecycles: Lifecycles,

    /// Pending notifications to show (level, message)
    pub pending_notifications: Vec<(NotificationLevel, String)>,
}

impl AppState {
    pub fn new(config: Arc<Config>, chain: Arc<dyn ChainService>) -> Self {
        let wallet = match chain.account() {
            Some(address) => WalletStatus::Connected(address),
            None => WalletStatus::Disconnected,
        };

        Self {
            config,
            chain,
            wallet,
            snapshot: Snapshot::default(),
            last_refresh: None,
            last_refresh_at: None,
            fetching_snapshot: false,
            refresh_pending: false,
            mint_redeem: FormState::new(Direction::Mint),
            swap: FormState::new(Direction::Buy),
            arbitrage_amount: String::new(),
            lifecycles: Lifecycles::default(),
            pending_notifications: Vec::new(),
        }
    }

    /// Form of a trading card. Boost and arbitrage have no quote form.
    pub fn form(&self, surface: Surface) -> Option<&FormState> {
        match surface {
            Surface::MintRedeem => Some(&self.mint_redeem),
            Surface::Swap => Some(&self.swap),
            Surface::Boost | Surface::Arbitrage => None,
        }
    }

    pub fn form_mut(&mut self, surface: Surface) -> Option<&mut FormState> {
        match surface {
            Surface::MintRedeem => Some(&mut self.mint_redeem),
            Surface::Swap => Some(&mut self.swap),
            Surface::Boost | Surface::Arbitrage => None,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }

    pub fn tx_state(&self, surface: Surface) -> &TxState {
        self.lifecycles.state(surface)
    }

    /// Balance the input side of `direction` is paid from.
    pub fn input_balance(&self, direction: Direction) -> Option<U256> {
        let account = self.snapshot.account.as_ref()?;
        match direction {
            Direction::Mint => account.backing_balance,
            Direction::Redeem | Direction::Sell => account.token_balance,
            Direction::Buy => account.native_balance,
        }
    }

    /// Allowance that governs `direction`, if any.
    pub fn input_allowance(&self, direction: Direction) -> Option<U256> {
        let account = self.snapshot.account.as_ref()?;
        match direction {
            Direction::Mint => account.backing_allowance,
            Direction::Sell => account.router_allowance,
            Direction::Redeem | Direction::Buy => None,
        }
    }

    /// Whether submitting the card's current amount would need an approval first.
    pub fn form_needs_approval(&self, surface: Surface) -> bool {
        let Some(form) = self.form(surface) else {
            return false;
        };
        let Some(amount) = parse_positive_amount(&form.amount) else {
            return false;
        };
        needs_approval(
            form.direction.action(),
            amount,
            self.input_allowance(form.direction),
        )
    }

    /// Primary button of a trading card.
    pub fn submit_button(&self, surface: Surface) -> SubmitButton {
        let Some(form) = self.form(surface) else {
            return SubmitButton::disabled(surface.label());
        };

        if !self.wallet.is_connected() {
            return SubmitButton::connect();
        }

        match self.tx_state(surface) {
            TxState::Approving => return SubmitButton::disabled("Approving..."),
            TxState::Pending => return SubmitButton::disabled("Confirming..."),
            TxState::Success => return SubmitButton::disabled("Confirmed"),
            TxState::Error { .. } => return SubmitButton::disabled("Failed"),
            TxState::Idle => {}
        }

        let check = validate_trade_amount(&form.amount, self.input_balance(form.direction));
        if let Some(error) = check.error {
            return SubmitButton::disabled(error);
        }

        if self.form_needs_approval(surface) {
            let label = match form.direction {
                Direction::Mint => "Approve & Mint",
                _ => "Approve & Swap",
            };
            return SubmitButton::enabled(label);
        }

        SubmitButton::enabled(form.direction.action_label())
    }

    /// Boost is available when the locker holds something and no boost is in flight.
    pub fn boost_enabled(&self) -> bool {
        self.wallet.is_connected()
            && self.snapshot.locker_has_balance()
            && self.tx_state(Surface::Boost).is_idle()
    }

    /// Fing/Fong are available when unpaused, idle and the amount is payable.
    pub fn arbitrage_enabled(&self) -> bool {
        let native = self.snapshot.account.as_ref().and_then(|a| a.native_balance);
        self.wallet.is_connected()
            && !self.snapshot.is_paused()
            && self.tx_state(Surface::Arbitrage).is_idle()
            && validate_trade_amount(&self.arbitrage_amount, native).is_valid
    }
}
