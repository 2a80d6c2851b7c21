//! # xTIME Terminal - Library Root
//!
//! A **native desktop GUI** for the xTIME token protocol on PulseChain.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Protocol statistics**: price, holders, supply, backing and USD values
//! - **Mint / Redeem**: TIME ↔ xTIME through the token contract
//! - **Buy / Sell**: PLS ↔ xTIME through the exchange router
//! - **Liquidity locker**: `boost()` the locker balances
//! - **Arbitrage helper**: best-move recommendation and `fing` / `fong`
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI                   │
//! │  Tokio          - Async runtime                        │
//! │  lib-evm        - alloy contract bindings + RPC client │
//! └────────────────────────────────────────────────────────┘
//!                          │ JSON-RPC
//!                          ▼
//!              ┌─────────────────────────┐
//!              │   PulseChain (id 369)   │
//!              └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: state, events, handlers, async tasks and the transaction lifecycle
//! - **core**: error types and the [`core::ChainService`] seam
//! - **debug**: file logging
//! - **services**: local wallet
//! - **ui**: panels, widgets and theme
//! - **utils**: runtime and input validation
//!
//! ## Core Concepts
//!
//! Async tasks report back to the main thread through an unbounded channel
//! of [`AppEvent`]s. Shared state is `Arc<RwLock<AppState>>`; locks are held
//! briefly and never across `.await`.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use core::{AppError, Result};
