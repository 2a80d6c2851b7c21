//! # Services Module
//!
//! External service integrations for the xTIME terminal.
//!
//! ```text
//! services/
//! └── wallet.rs    - Local signer (private key loading, signing client)
//! ```
//!
//! Chain access itself goes through [`crate::core::service::ChainService`],
//! implemented by [`lib_evm::RpcClient`].

pub mod wallet;

pub use wallet::{WalletError, WalletService, WalletStatus};
