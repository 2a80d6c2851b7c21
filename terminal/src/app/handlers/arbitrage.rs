//! # Arbitrage Handlers
//!
//! PLS amount entry and the `fing` / `fong` calls of the arbitrage helper.

use super::{start_plan, submit_account};
use crate::app::events::AppEvent;
use crate::app::lifecycle::Surface;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks::transaction::TxPlan;
use crate::utils::validation::{max_spendable, sanitize_amount, validate_trade_amount};
use async_channel::Sender;
use lib_core::{format_amount, parse_positive_amount};
use lib_evm::{ArbitrageSide, ContractCall, U256};
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn set_amount(state: Arc<RwLock<AppState>>, raw: &str) {
    state.write().arbitrage_amount = sanitize_amount(raw);
}

/// Native balance minus the arbitrage gas reserve.
pub(crate) fn set_max_amount(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let native = state.snapshot.account.as_ref().and_then(|a| a.native_balance);
    let max = max_spendable(native, state.config.arbitrage_gas_reserve);
    state.arbitrage_amount = format_amount(max);
}

/// Send the arbitrage amount to `fing` or `fong` with a zero profit floor.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, side: ArbitrageSide) {
    let mut state = state.write();
    if submit_account(&mut state, Surface::Arbitrage).is_none() {
        return;
    }
    if state.snapshot.is_paused() {
        state.notify(NotificationLevel::Warning, "Arbitrage is paused");
        return;
    }

    let native = state.snapshot.account.as_ref().and_then(|a| a.native_balance);
    let check = validate_trade_amount(&state.arbitrage_amount, native);
    let value = match (check.error, parse_positive_amount(&state.arbitrage_amount)) {
        (None, Some(value)) => value,
        (error, _) => {
            let message = error.unwrap_or_else(|| "Enter Amount".to_string());
            state.notify(NotificationLevel::Warning, message);
            return;
        }
    };

    let contract = state.config.contracts.arbitrage;
    let primary = match side {
        ArbitrageSide::Fing => ContractCall::Fing {
            contract,
            value,
            min_profit_bps: U256::ZERO,
        },
        ArbitrageSide::Fong => ContractCall::Fong {
            contract,
            value,
            min_profit_bps: U256::ZERO,
        },
    };

    let description = format!(
        "{} with {} {}",
        side.function_name(),
        state.arbitrage_amount,
        state.config.native_symbol
    );
    start_plan(
        &mut state,
        event_tx,
        Surface::Arbitrage,
        TxPlan::direct(primary),
        description,
    );
}
