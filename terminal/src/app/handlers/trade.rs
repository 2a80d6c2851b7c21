//! # Trade Handlers
//!
//! Mint/redeem and buy/sell cards: amount entry, direction flip, Max and submit.

use super::{start_plan, submit_account};
use crate::app::approval::needs_approval;
use crate::app::events::AppEvent;
use crate::app::lifecycle::Surface;
use crate::app::quote::{Direction, Quote};
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks::transaction::TxPlan;
use crate::utils::validation::{max_spendable, sanitize_amount, validate_trade_amount};
use async_channel::Sender;
use lib_core::{format_amount, parse_positive_amount};
use lib_evm::{min_output, ContractCall, U256};
use lib_utils::time::{deadline_after, now_utc};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Update the card's amount and schedule a debounced quote.
///
/// A non-positive amount zeroes the quote immediately without a read.
pub(crate) fn set_amount(state: Arc<RwLock<AppState>>, surface: Surface, raw: &str) {
    let mut state = state.write();
    apply_amount(&mut state, surface, sanitize_amount(raw));
}

fn apply_amount(state: &mut AppState, surface: Surface, amount: String) {
    let fees = state.snapshot.fees;
    let Some(form) = state.form_mut(surface) else {
        return;
    };
    if form.amount == amount && form.quote_requested_at.is_none() && !form.quote_loading {
        return;
    }

    form.amount = amount;
    if parse_positive_amount(&form.amount).is_some() {
        form.quote_requested_at = Some(Instant::now());
    } else {
        form.quote = Quote::zero(form.direction.fee_pct(&fees));
        form.quote_input = form.amount.clone();
        form.quote_requested_at = None;
        form.quote_loading = false;
    }
}

/// Swap input and output token of the card.
pub(crate) fn flip_direction(state: Arc<RwLock<AppState>>, surface: Surface) {
    let mut state = state.write();
    let fees = state.snapshot.fees;
    if let Some(form) = state.form_mut(surface) {
        form.direction = form.direction.flip();
        form.clear();
        form.quote = Quote::zero(form.direction.fee_pct(&fees));
        tracing::debug!(surface = ?surface, direction = ?form.direction, "Direction flipped");
    }
}

/// Fill in the whole input balance, keeping a gas reserve when paying in PLS.
pub(crate) fn set_max_amount(state: Arc<RwLock<AppState>>, surface: Surface) {
    let mut state = state.write();
    let Some(direction) = state.form(surface).map(|f| f.direction) else {
        return;
    };
    let reserve = match direction {
        Direction::Buy => state.config.buy_gas_reserve,
        _ => U256::ZERO,
    };
    let max = max_spendable(state.input_balance(direction), reserve);
    apply_amount(&mut state, surface, format_amount(max));
}

/// Submit the card's trade, preceded by an approval if the allowance is short.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, surface: Surface) {
    let mut state = state.write();
    let Some(owner) = submit_account(&mut state, surface) else {
        return;
    };
    let Some(form) = state.form(surface).cloned() else {
        return;
    };

    let direction = form.direction;
    let check = validate_trade_amount(&form.amount, state.input_balance(direction));
    let amount = match (check.error, parse_positive_amount(&form.amount)) {
        (None, Some(amount)) => amount,
        (error, _) => {
            let message = error.unwrap_or_else(|| "Enter Amount".to_string());
            state.notify(NotificationLevel::Warning, message);
            return;
        }
    };

    let contracts = state.config.contracts;
    let primary = match direction {
        Direction::Mint => ContractCall::MintWithBacking {
            contract: contracts.token,
            amount,
            recipient: owner,
        },
        Direction::Redeem => ContractCall::Redeem {
            contract: contracts.token,
            amount,
        },
        Direction::Buy | Direction::Sell => {
            // min output is derived from the quote of exactly this amount
            if !form.quote_is_current() || form.quote.is_zero() {
                state.notify(NotificationLevel::Warning, "Waiting for a quote");
                return;
            }
            let min_out = min_output(form.quote.amount_out, state.config.slippage_bps);
            let deadline = deadline_after(now_utc(), state.config.deadline_secs);
            if direction == Direction::Buy {
                ContractCall::SwapExactEthForTokens {
                    router: contracts.router,
                    value: amount,
                    min_out,
                    path: contracts.buy_path(),
                    to: owner,
                    deadline,
                }
            } else {
                ContractCall::SwapExactTokensForEth {
                    router: contracts.router,
                    amount_in: amount,
                    min_out,
                    path: contracts.sell_path(),
                    to: owner,
                    deadline,
                }
            }
        }
    };

    let approval = needs_approval(direction.action(), amount, state.input_allowance(direction))
        .then(|| {
            let (token, spender) = match direction {
                Direction::Mint => (contracts.backing, contracts.token),
                _ => (contracts.token, contracts.router),
            };
            ContractCall::Approve {
                token,
                spender,
                amount: state.config.approval_policy.allowance_for(amount),
            }
        });

    let description = format!(
        "{} {} {}",
        verb(direction),
        form.amount,
        direction.input_symbol()
    );
    start_plan(
        &mut state,
        event_tx,
        surface,
        TxPlan { approval, primary },
        description,
    );
}

fn verb(direction: Direction) -> &'static str {
    match direction {
        Direction::Mint => "Mint with",
        Direction::Redeem => "Redeem",
        Direction::Buy => "Buy with",
        Direction::Sell => "Sell",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::OfflineChain;
    use lib_core::Config;
    use lib_evm::{AccountReadings, Address, FeeSchedule};

    fn tokens(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u8))
    }

    fn state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(
            Arc::new(Config::default()),
            Arc::new(OfflineChain::with_account()),
        );
        let mut account = AccountReadings::empty(Address::repeat_byte(0x11));
        account.native_balance = Some(tokens(25));
        account.token_balance = Some(tokens(7));
        account.backing_balance = Some(tokens(3));
        state.snapshot.account = Some(account);
        state.snapshot.fees = FeeSchedule {
            mint_fee_pct: 5.0,
            sell_fee_pct: 3.0,
        };
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_positive_amount_schedules_quote() {
        let state = state();
        set_amount(state.clone(), Surface::MintRedeem, "1.5");
        let st = state.read();
        assert_eq!(st.mint_redeem.amount, "1.5");
        assert!(st.mint_redeem.quote_requested_at.is_some());
    }

    #[test]
    fn test_zero_amount_zeroes_quote_without_read() {
        let state = state();
        state.write().mint_redeem.quote = Quote {
            amount_out: tokens(9),
            fee_pct: 5.0,
        };
        set_amount(state.clone(), Surface::MintRedeem, "0");
        let st = state.read();
        assert!(st.mint_redeem.quote.is_zero());
        assert!(st.mint_redeem.quote_requested_at.is_none());
        assert!(!st.mint_redeem.quote_loading);
    }

    #[test]
    fn test_amount_is_sanitized() {
        let state = state();
        set_amount(state.clone(), Surface::Swap, "12a.3.4");
        assert_eq!(state.read().swap.amount, "12.34");
    }

    #[test]
    fn test_flip_resets_card() {
        let state = state();
        set_amount(state.clone(), Surface::MintRedeem, "2");
        flip_direction(state.clone(), Surface::MintRedeem);
        let st = state.read();
        assert_eq!(st.mint_redeem.direction, Direction::Redeem);
        assert!(st.mint_redeem.amount.is_empty());
        assert_eq!(st.mint_redeem.quote.fee_pct, 3.0);
    }

    #[test]
    fn test_max_keeps_gas_reserve_for_buys() {
        let state = state();
        set_max_amount(state.clone(), Surface::Swap);
        assert_eq!(state.read().swap.amount, "15");

        flip_direction(state.clone(), Surface::Swap);
        set_max_amount(state.clone(), Surface::Swap);
        assert_eq!(state.read().swap.amount, "7");
    }

    #[test]
    fn test_max_uses_backing_for_mint() {
        let state = state();
        set_max_amount(state.clone(), Surface::MintRedeem);
        assert_eq!(state.read().mint_redeem.amount, "3");
    }

    #[test]
    fn test_swap_submit_requires_current_quote() {
        let state = state();
        let (tx, rx) = async_channel::unbounded();
        set_amount(state.clone(), Surface::Swap, "1");
        submit(state.clone(), tx, Surface::Swap);

        let st = state.read();
        assert!(st.tx_state(Surface::Swap).is_idle());
        assert_eq!(
            st.pending_notifications.last().map(|(_, m)| m.as_str()),
            Some("Waiting for a quote")
        );
        assert!(rx.is_empty());
    }

    #[test]
    fn test_submit_without_wallet_is_reported() {
        let state = Arc::new(RwLock::new(AppState::new(
            Arc::new(Config::default()),
            Arc::new(OfflineChain::read_only()),
        )));
        let (tx, _rx) = async_channel::unbounded();
        set_amount(state.clone(), Surface::MintRedeem, "1");
        submit(state.clone(), tx, Surface::MintRedeem);

        let st = state.read();
        assert!(st.tx_state(Surface::MintRedeem).is_idle());
        assert_eq!(
            st.pending_notifications.last(),
            Some(&(NotificationLevel::Warning, "Connect a wallet first".to_string()))
        );
    }

    #[test]
    fn test_submit_over_balance_is_reported() {
        let state = state();
        let (tx, _rx) = async_channel::unbounded();
        set_amount(state.clone(), Surface::MintRedeem, "4");
        submit(state.clone(), tx, Surface::MintRedeem);

        let st = state.read();
        assert!(st.tx_state(Surface::MintRedeem).is_idle());
        assert_eq!(
            st.pending_notifications.last().map(|(_, m)| m.as_str()),
            Some("Insufficient Balance")
        );
    }
}
