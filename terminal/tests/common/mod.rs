//! # Integration Test Support
//!
//! In-memory chain double that records every submitted call, plus helpers to
//! drive [`App`] the way the UI loop does.

#![allow(dead_code)]

use async_trait::async_trait;
use lib_core::{Config, ContractAddresses};
use lib_evm::{Address, BestMove, ChainError, ContractCall, TokenInfo, TxHash, TxReceipt, U256};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use terminal::app::{App, AppState};
use terminal::core::ChainService;

pub fn tokens(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u8))
}

/// How the fake answers writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every call is mined successfully
    Succeed,
    /// The signer refuses every call
    Reject,
    /// Approvals mine, primary calls revert
    RevertPrimary,
    /// Approvals revert
    RevertApproval,
}

/// Recording fake of the chain boundary.
pub struct RecordingChain {
    pub account: Address,
    contracts: ContractAddresses,
    pub native_balance: U256,
    pub token_balance: U256,
    pub backing_balance: U256,
    pub backing_allowance: Mutex<U256>,
    pub router_allowance: Mutex<U256>,
    outcome: Mutex<Outcome>,
    submitted: Mutex<Vec<&'static str>>,
    block_reads: AtomicUsize,
    estimate_reads: AtomicUsize,
}

impl RecordingChain {
    pub fn new(config: &Config) -> Self {
        Self {
            account: Address::repeat_byte(0x42),
            contracts: config.contracts,
            native_balance: tokens(1_000),
            token_balance: tokens(50),
            backing_balance: tokens(200),
            backing_allowance: Mutex::new(U256::ZERO),
            router_allowance: Mutex::new(U256::ZERO),
            outcome: Mutex::new(Outcome::Succeed),
            submitted: Mutex::new(Vec::new()),
            block_reads: AtomicUsize::new(0),
            estimate_reads: AtomicUsize::new(0),
        }
    }

    pub fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock() = outcome;
    }

    /// Function names of submitted calls, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.submitted.lock().clone()
    }

    pub fn block_reads(&self) -> usize {
        self.block_reads.load(Ordering::SeqCst)
    }

    /// `estimateMinted` + `estimateRedeemed` reads.
    pub fn estimate_reads(&self) -> usize {
        self.estimate_reads.load(Ordering::SeqCst)
    }

    fn function_of(&self, tx_hash: TxHash) -> Option<&'static str> {
        let index = usize::from(tx_hash.0[31]).checked_sub(1)?;
        self.submitted.lock().get(index).copied()
    }
}

#[async_trait]
impl ChainService for RecordingChain {
    fn account(&self) -> Option<Address> {
        Some(self.account)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        let reads = self.block_reads.fetch_add(1, Ordering::SeqCst);
        Ok(1_000 + reads as u64)
    }

    async fn native_balance(&self, _owner: Address) -> Result<U256, ChainError> {
        Ok(self.native_balance)
    }

    async fn token_balance(&self, token: Address, _owner: Address) -> Result<U256, ChainError> {
        if token == self.contracts.backing {
            Ok(self.backing_balance)
        } else {
            Ok(self.token_balance)
        }
    }

    async fn allowance(&self, _token: Address, _owner: Address, spender: Address) -> Result<U256, ChainError> {
        if spender == self.contracts.token {
            Ok(*self.backing_allowance.lock())
        } else {
            Ok(*self.router_allowance.lock())
        }
    }

    async fn token_info(&self, _token: Address) -> Result<TokenInfo, ChainError> {
        Ok(TokenInfo {
            users: U256::from(1_234u64),
            txs: U256::from(56_789u64),
            underlying_supply: tokens(900_000),
            supply: tokens(850_000),
            price: tokens(1),
        })
    }

    async fn calculate_price(&self, _token: Address) -> Result<U256, ChainError> {
        Ok(tokens(1))
    }

    async fn mint_fee(&self, _token: Address) -> Result<U256, ChainError> {
        Ok(U256::from(95_000u64))
    }

    async fn sell_fee(&self, _token: Address) -> Result<U256, ChainError> {
        Ok(U256::from(95_000u64))
    }

    async fn estimate_minted(&self, _token: Address, amount: U256) -> Result<U256, ChainError> {
        self.estimate_reads.fetch_add(1, Ordering::SeqCst);
        Ok(amount * U256::from(95u8) / U256::from(100u8))
    }

    async fn estimate_redeemed(&self, _token: Address, amount: U256) -> Result<U256, ChainError> {
        self.estimate_reads.fetch_add(1, Ordering::SeqCst);
        Ok(amount * U256::from(95u8) / U256::from(100u8))
    }

    async fn value_of_holdings(&self, _token: Address, _holder: Address) -> Result<U256, ChainError> {
        Ok(tokens(48))
    }

    async fn amounts_out(
        &self,
        _router: Address,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError> {
        let mut amounts = vec![amount_in];
        for _ in 1..path.len() {
            let last = amounts[amounts.len() - 1];
            amounts.push(last * U256::from(2u8));
        }
        Ok(amounts)
    }

    async fn best_move(&self, _arbitrage: Address) -> Result<BestMove, ChainError> {
        Ok(BestMove {
            title: "Fing".to_string(),
            description: "DEX price above mint price".to_string(),
            function_id: "fing".to_string(),
        })
    }

    async fn arbitrage_paused(&self, _arbitrage: Address) -> Result<bool, ChainError> {
        Ok(false)
    }

    async fn submit(&self, call: &ContractCall) -> Result<TxHash, ChainError> {
        if *self.outcome.lock() == Outcome::Reject {
            return Err(ChainError::classify("User rejected the request."));
        }
        if let ContractCall::Approve { spender, amount, .. } = call {
            if *self.outcome.lock() != Outcome::RevertApproval {
                let allowance = if *spender == self.contracts.token {
                    &self.backing_allowance
                } else {
                    &self.router_allowance
                };
                *allowance.lock() = *amount;
            }
        }
        let mut submitted = self.submitted.lock();
        submitted.push(call.function_name());
        Ok(TxHash::with_last_byte(submitted.len() as u8))
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ChainError> {
        let is_approval = self.function_of(tx_hash) == Some("approve");
        let success = match *self.outcome.lock() {
            Outcome::Succeed | Outcome::Reject => true,
            Outcome::RevertPrimary => is_approval,
            Outcome::RevertApproval => !is_approval,
        };
        Ok(TxReceipt {
            tx_hash,
            success,
            block_number: Some(1_000),
        })
    }
}

/// Config with a short cooldown and no periodic refresh during a test.
pub fn test_config() -> Config {
    Config {
        cooldown: Duration::from_millis(10),
        refresh_interval: Duration::from_secs(600),
        ..Config::default()
    }
}

/// App wired to a fresh [`RecordingChain`], with the first snapshot loaded.
pub async fn connected_app() -> (App, Arc<RecordingChain>) {
    let config = test_config();
    let chain = Arc::new(RecordingChain::new(&config));
    let mut app = App::with_service(config, chain.clone());
    pump_until(&mut app, "initial snapshot", |s| {
        s.snapshot
            .account
            .as_ref()
            .is_some_and(|a| a.backing_allowance.is_some() && a.native_balance.is_some())
    })
    .await;
    (app, chain)
}

/// Tick the app until `done` holds, failing after a few seconds.
pub async fn pump_until(app: &mut App, what: &str, mut done: impl FnMut(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.on_tick();
        if done(&*app.state.read()) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for {what}");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Tick the app for `duration`.
pub async fn pump_for(app: &mut App, duration: Duration) {
    let until = Instant::now() + duration;
    while Instant::now() < until {
        app.on_tick();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
