//! # Async Tasks
//!
//! Async task spawning for contract readings, quotes and transaction execution.

pub mod market;
pub mod quote;
pub mod transaction;
