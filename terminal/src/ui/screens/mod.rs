//! # Screens
//!
//! Panels of the dashboard. Each renders a cloned [`crate::app::AppState`]
//! and dispatches user intents to [`crate::app::App`].

pub mod arbitrage;
pub mod dashboard;
pub mod locker;
pub mod trade_card;
