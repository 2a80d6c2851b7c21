//! # Wallet Service
//!
//! Manages the local signing key used for PulseChain transactions.
//!
//! ## Features
//! - Load a hex private key (from `XTIME_PRIVATE_KEY` via [`Config`])
//! - Bind the key to the configured chain id
//! - Build a signing [`RpcClient`] for the connected account

use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use lib_core::Config;
use lib_evm::{Address, RpcClient};
use std::str::FromStr;
use thiserror::Error;

/// Wallet connection errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No private key configured
    #[error("no private key configured (set XTIME_PRIVATE_KEY)")]
    MissingKey,
    /// Private key could not be parsed
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    /// Signing client could not be created
    #[error("signing client unavailable: {0}")]
    Client(String),
}

/// Wallet connection status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    /// Not connected
    #[default]
    Disconnected,
    /// Connected with wallet address
    Connected(Address),
    /// Last connect attempt failed
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            WalletStatus::Connected(addr) => Some(*addr),
            _ => None,
        }
    }
}

/// Wallet service holding an optional local signer.
#[derive(Debug, Clone, Default)]
pub struct WalletService {
    signer: Option<PrivateKeySigner>,
    status: WalletStatus,
}

impl WalletService {
    /// Create a disconnected wallet service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet service from a hex private key (with or without `0x`).
    pub fn from_private_key(key: &str, chain_id: u64) -> Result<Self, WalletError> {
        let signer = PrivateKeySigner::from_str(key.trim())
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?
            .with_chain_id(Some(chain_id));
        let address = signer.address();

        tracing::info!(address = %address, chain_id, "Wallet key loaded");

        Ok(Self {
            signer: Some(signer),
            status: WalletStatus::Connected(address),
        })
    }

    /// Create a wallet service from the configured private key.
    pub fn from_config(config: &Config) -> Result<Self, WalletError> {
        let key = config.private_key.as_deref().ok_or(WalletError::MissingKey)?;
        Self::from_private_key(key, config.chain_id)
    }

    /// Address of the loaded key
    pub fn address(&self) -> Option<Address> {
        self.signer.as_ref().map(|s| s.address())
    }

    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    /// Build an RPC client that signs with this wallet.
    pub fn signing_client(&self, config: &Config) -> Result<RpcClient, WalletError> {
        let signer = self.signer.clone().ok_or(WalletError::MissingKey)?;
        RpcClient::builder()
            .rpc_url(config.rpc_url.clone())
            .chain_id(config.chain_id)
            .signer(signer)
            .build()
            .map_err(|e| WalletError::Client(e.to_string()))
    }

    /// Drop the signer
    pub fn disconnect(&mut self) {
        self.signer = None;
        self.status = WalletStatus::Disconnected;
    }
}
