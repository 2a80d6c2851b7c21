//! # EVM Library
//!
//! PulseChain integration for the xTIME dashboard: contract bindings, the write
//! surface ([`ContractCall`]), readings types, chain errors and the RPC client.

pub mod call;
pub mod client;
pub mod contracts;
pub mod error;
pub mod types;

// Re-export commonly used types from root for convenience
pub use alloy::primitives::{Address, TxHash, U256};
pub use call::{min_output, ContractCall};
pub use client::{RpcClient, RpcClientBuilder};
pub use error::ChainError;
pub use types::{AccountReadings, ArbitrageSide, BestMove, FeeSchedule, Snapshot, TokenInfo, TxReceipt};
