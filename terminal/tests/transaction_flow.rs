//! # Transaction Lifecycle Integration Tests
//!
//! Drives [`terminal::app::App`] against the recording chain double and
//! checks call order, state progression and cleanup.

mod common;

use common::{connected_app, pump_until, tokens, Outcome};
use terminal::app::{NotificationLevel, Surface, TxState};

fn settled(state: &terminal::app::AppState, surface: Surface) -> bool {
    let lifecycle = state.lifecycles.get(surface);
    lifecycle.state().is_idle() && lifecycle.history().len() > 1
}

fn history(app: &terminal::app::App, surface: Surface) -> Vec<TxState> {
    app.state.read().lifecycles.get(surface).history().to_vec()
}

fn error(message: &str) -> TxState {
    TxState::Error {
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_mint_with_zero_allowance_approves_first() {
    // Arrange
    let (mut app, chain) = connected_app().await;
    app.handle_amount_change(Surface::MintRedeem, "100");
    assert_eq!(app.state.read().submit_button(Surface::MintRedeem).label, "Approve & Mint");

    // Act
    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;

    // Assert
    assert_eq!(chain.calls(), vec!["approve", "mintWithBacking"]);
    assert_eq!(
        history(&app, Surface::MintRedeem),
        vec![
            TxState::Idle,
            TxState::Approving,
            TxState::Pending,
            TxState::Success,
            TxState::Idle
        ]
    );
}

#[tokio::test]
async fn test_mint_within_allowance_skips_approval() {
    let (mut app, chain) = connected_app().await;
    *chain.backing_allowance.lock() = tokens(150);
    app.handle_refresh_click();
    pump_until(&mut app, "allowance refresh", |s| {
        s.snapshot.account.as_ref().and_then(|a| a.backing_allowance) == Some(tokens(150))
    })
    .await;

    app.handle_amount_change(Surface::MintRedeem, "100");
    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;

    assert_eq!(chain.calls(), vec!["mintWithBacking"]);
}

#[tokio::test]
async fn test_swap_buy_is_a_single_call() {
    // Arrange
    let (mut app, chain) = connected_app().await;
    app.handle_amount_change(Surface::Swap, "5");
    app.trigger_quote_fetch(Surface::Swap);
    pump_until(&mut app, "buy quote", |s| {
        s.swap.quote_is_current() && !s.swap.quote.is_zero()
    })
    .await;
    assert_eq!(app.state.read().swap.quote.amount_out, tokens(10));

    // Act
    app.handle_submit_click(Surface::Swap);
    pump_until(&mut app, "swap to settle", |s| settled(s, Surface::Swap)).await;

    // Assert
    assert_eq!(chain.calls(), vec!["swapExactETHForTokens"]);
    assert_eq!(
        history(&app, Surface::Swap),
        vec![TxState::Idle, TxState::Pending, TxState::Success, TxState::Idle]
    );
}

#[tokio::test]
async fn test_repeat_submit_while_busy_sends_nothing_new() {
    let (mut app, chain) = connected_app().await;
    app.handle_amount_change(Surface::MintRedeem, "100");

    app.handle_submit_click(Surface::MintRedeem);
    app.handle_submit_click(Surface::MintRedeem);
    assert_eq!(app.state.read().tx_state(Surface::MintRedeem), &TxState::Approving);
    app.handle_submit_click(Surface::MintRedeem);

    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;
    assert_eq!(chain.calls(), vec!["approve", "mintWithBacking"]);
}

#[tokio::test]
async fn test_success_clears_amount_and_refreshes() {
    let (mut app, chain) = connected_app().await;
    let reads_before = chain.block_reads();

    app.handle_amount_change(Surface::MintRedeem, "100");
    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;
    pump_until(&mut app, "post-trade refresh", |s| !s.fetching_snapshot).await;

    let state = app.state.read();
    assert!(state.mint_redeem.amount.is_empty());
    assert!(state.mint_redeem.quote.is_zero());
    assert!(chain.block_reads() > reads_before);
    assert!(state
        .pending_notifications
        .iter()
        .any(|(level, msg)| *level == NotificationLevel::Success && msg.contains("confirmed")));
}

#[tokio::test]
async fn test_reverted_primary_reports_failure_then_idles() {
    // Arrange
    let (mut app, chain) = connected_app().await;
    chain.set_outcome(Outcome::RevertPrimary);
    app.handle_amount_change(Surface::MintRedeem, "100");

    // Act
    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;

    // Assert
    let message = "Transaction failed: reverted on-chain";
    assert_eq!(chain.calls(), vec!["approve", "mintWithBacking"]);
    assert_eq!(
        history(&app, Surface::MintRedeem),
        vec![
            TxState::Idle,
            TxState::Approving,
            TxState::Pending,
            error(message),
            TxState::Idle
        ]
    );
    let state = app.state.read();
    assert!(state
        .pending_notifications
        .iter()
        .any(|(level, msg)| *level == NotificationLevel::Error && msg == message));
    // surface accepts new work again
    assert!(state.submit_button(Surface::MintRedeem).enabled);
}

#[tokio::test]
async fn test_confirmed_approval_is_reread_when_primary_reverts() {
    // Arrange
    let (mut app, chain) = connected_app().await;
    chain.set_outcome(Outcome::RevertPrimary);
    app.handle_amount_change(Surface::MintRedeem, "100");

    // Act
    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;
    pump_until(&mut app, "allowance re-read", |s| {
        s.snapshot.account.as_ref().and_then(|a| a.backing_allowance) == Some(tokens(100))
    })
    .await;

    // Assert
    assert_eq!(chain.calls(), vec!["approve", "mintWithBacking"]);
    let state = app.state.read();
    assert!(!state.form_needs_approval(Surface::MintRedeem));
    assert_eq!(state.submit_button(Surface::MintRedeem).label, "Mint xTIME");
}

#[tokio::test]
async fn test_failed_approval_never_issues_primary() {
    let (mut app, chain) = connected_app().await;
    chain.set_outcome(Outcome::RevertApproval);
    app.handle_amount_change(Surface::MintRedeem, "100");

    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;

    assert_eq!(chain.calls(), vec!["approve"]);
    assert!(!history(&app, Surface::MintRedeem).contains(&TxState::Pending));
}

#[tokio::test]
async fn test_rejection_is_reported_distinctly() {
    let (mut app, chain) = connected_app().await;
    chain.set_outcome(Outcome::Reject);
    app.handle_amount_change(Surface::MintRedeem, "100");

    app.handle_submit_click(Surface::MintRedeem);
    pump_until(&mut app, "mint to settle", |s| settled(s, Surface::MintRedeem)).await;

    assert!(chain.calls().is_empty());
    assert_eq!(
        history(&app, Surface::MintRedeem),
        vec![
            TxState::Idle,
            TxState::Approving,
            error("Transaction was rejected"),
            TxState::Idle
        ]
    );
}

#[tokio::test]
async fn test_surfaces_run_independently() {
    let (mut app, chain) = connected_app().await;
    app.handle_amount_change(Surface::MintRedeem, "100");
    app.handle_submit_click(Surface::MintRedeem);

    app.handle_boost_click();
    assert_eq!(app.state.read().tx_state(Surface::Boost), &TxState::Pending);

    app.handle_arbitrage_amount_change("50");
    app.handle_arbitrage_click(lib_evm::ArbitrageSide::Fing);
    assert_eq!(app.state.read().tx_state(Surface::Arbitrage), &TxState::Pending);

    pump_until(&mut app, "all surfaces to settle", |s| {
        settled(s, Surface::MintRedeem) && settled(s, Surface::Boost) && settled(s, Surface::Arbitrage)
    })
    .await;

    let mut calls = chain.calls();
    calls.sort_unstable();
    assert_eq!(calls, vec!["approve", "boost", "fing", "mintWithBacking"]);
    assert!(app.state.read().arbitrage_amount.is_empty());
}
