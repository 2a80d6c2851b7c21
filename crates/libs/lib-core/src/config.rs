//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! Defaults describe the PulseChain deployment of the xTIME protocol, so an empty
//! environment yields a working read-only dashboard. A `.env` file in the working
//! directory is honoured through `dotenvy`.
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::load().expect("invalid configuration");
//! println!("connecting to {}", config.rpc_url);
//! ```
//!
//! The loaded [`Config`] is passed explicitly (usually behind an `Arc`) to
//! whatever needs it; there is no process-wide instance.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::{address, Address, U256};
use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{AppError, Result};

/// Default PulseChain RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://rpc.pulsechain.com";
/// PulseChain chain id.
pub const DEFAULT_CHAIN_ID: u64 = 369;
/// Block explorer used for contract links.
pub const DEFAULT_EXPLORER_URL: &str = "https://scan.pulsechain.com";

/// How much to spend on an ERC-20 approval when one is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalPolicy {
    /// Approve exactly the amount about to be spent.
    #[default]
    Exact,
    /// Approve `U256::MAX` once so later actions skip the approval step.
    Unlimited,
}

impl ApprovalPolicy {
    /// Allowance to request for spending `amount`.
    pub fn allowance_for(self, amount: U256) -> U256 {
        match self {
            ApprovalPolicy::Exact => amount,
            ApprovalPolicy::Unlimited => U256::MAX,
        }
    }
}

impl FromStr for ApprovalPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(ApprovalPolicy::Exact),
            "unlimited" | "max" => Ok(ApprovalPolicy::Unlimited),
            other => Err(format!("unknown approval policy '{}'", other)),
        }
    }
}

/// Addresses of the deployed contracts the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    /// xTIME, the derivative token (mint/redeem/price/fees).
    pub token: Address,
    /// TIME, the backing ERC-20 locked on mint.
    pub backing: Address,
    /// PulseX router (quotes and swaps).
    pub router: Address,
    /// Wrapped native currency (WPLS), first/last hop of swap paths.
    pub wrapped_native: Address,
    /// DAI, the USD leg of price routes.
    pub dai: Address,
    /// Liquidity lock contract (`boost`).
    pub locker: Address,
    /// Arbitrage helper (`getBestMove`, `fing`, `fong`).
    pub arbitrage: Address,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            token: address!("dcE001f55DA9c00c438d4129c6f02000b818e792"),
            backing: address!("CA35638A3fdDD02fEC597D8c1681198C06b23F58"),
            router: address!("165C3410fC91EF562C50559f7d2289fEbed552d9"),
            wrapped_native: address!("A1077a294dDE1B09bB078844df40758a5D0f9a27"),
            dai: address!("efD766cCb38EaF1dfd701853BFCe31359239F305"),
            locker: address!("2f1176A677f67C109578D3Acb8Ac261555Dd31C6"),
            arbitrage: address!("154C760e242e29af94cD6BDa2d2536eaEa7fB92f"),
        }
    }
}

impl ContractAddresses {
    /// Router path for buying xTIME with the native currency.
    pub fn buy_path(&self) -> Vec<Address> {
        vec![self.wrapped_native, self.token]
    }

    /// Router path for selling xTIME for the native currency.
    pub fn sell_path(&self) -> Vec<Address> {
        vec![self.token, self.wrapped_native]
    }

    /// xTIME → TIME → WPLS → DAI, used to price xTIME in USD.
    pub fn token_usd_path(&self) -> Vec<Address> {
        vec![self.token, self.backing, self.wrapped_native, self.dai]
    }

    /// TIME → WPLS → DAI, used to price TIME in USD.
    pub fn backing_usd_path(&self) -> Vec<Address> {
        vec![self.backing, self.wrapped_native, self.dai]
    }

    fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            token: env_address("XTIME_TOKEN_ADDRESS", defaults.token)?,
            backing: env_address("XTIME_BACKING_ADDRESS", defaults.backing)?,
            router: env_address("XTIME_ROUTER_ADDRESS", defaults.router)?,
            wrapped_native: env_address("XTIME_WPLS_ADDRESS", defaults.wrapped_native)?,
            dai: env_address("XTIME_DAI_ADDRESS", defaults.dai)?,
            locker: env_address("XTIME_LOCKER_ADDRESS", defaults.locker)?,
            arbitrage: env_address("XTIME_ARBITRAGE_ADDRESS", defaults.arbitrage)?,
        })
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// JSON-RPC endpoint of the single supported chain.
    pub rpc_url: String,

    /// Chain id the signer is bound to.
    pub chain_id: u64,

    /// Human readable network name for the header.
    pub chain_name: String,

    /// Ticker of the native currency.
    pub native_symbol: String,

    /// Block explorer base URL.
    pub explorer_url: String,

    /// Deployed contract addresses.
    pub contracts: ContractAddresses,

    /// Interval between snapshot refreshes.
    pub refresh_interval: Duration,

    /// How long a success/error result stays on screen before the surface returns to idle.
    pub cooldown: Duration,

    /// Slippage tolerance applied to swap minimum outputs, in basis points.
    pub slippage_bps: u16,

    /// Swap deadline window in seconds.
    pub deadline_secs: u64,

    /// Amount requested by approvals.
    pub approval_policy: ApprovalPolicy,

    /// Hex private key of the signing account. `None` runs the dashboard read-only.
    pub private_key: Option<String>,

    /// Native balance left untouched by "Max" on the buy side (gas money).
    pub buy_gas_reserve: U256,

    /// Native balance left untouched by "Max" on the arbitrage panel.
    pub arbitrage_gas_reserve: U256,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            chain_name: "PulseChain".to_string(),
            native_symbol: "PLS".to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            contracts: ContractAddresses::default(),
            refresh_interval: Duration::from_secs(15),
            cooldown: Duration::from_millis(2000),
            slippage_bps: 100,
            deadline_secs: 1200,
            approval_policy: ApprovalPolicy::Exact,
            private_key: None,
            buy_gas_reserve: whole_tokens(10),
            arbitrage_gas_reserve: whole_tokens(100),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("chain_name", &self.chain_name)
            .field("contracts", &self.contracts)
            .field("refresh_interval", &self.refresh_interval)
            .field("cooldown", &self.cooldown)
            .field("slippage_bps", &self.slippage_bps)
            .field("deadline_secs", &self.deadline_secs)
            .field("approval_policy", &self.approval_policy)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load `.env` (if present), read the environment and validate the result.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let approval_policy = match std::env::var("XTIME_APPROVAL_POLICY") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse().map_err(AppError::Config)?,
            _ => defaults.approval_policy,
        };

        let private_key = std::env::var("XTIME_PRIVATE_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            rpc_url: get_env_or("XTIME_RPC_URL", &defaults.rpc_url),
            chain_id: get_env_parse_or("XTIME_CHAIN_ID", defaults.chain_id)?,
            chain_name: get_env_or("XTIME_CHAIN_NAME", &defaults.chain_name),
            native_symbol: defaults.native_symbol,
            explorer_url: get_env_or("XTIME_EXPLORER_URL", &defaults.explorer_url),
            contracts: ContractAddresses::from_env()?,
            refresh_interval: Duration::from_secs(get_env_parse_or(
                "XTIME_REFRESH_SECS",
                defaults.refresh_interval.as_secs(),
            )?),
            cooldown: Duration::from_millis(get_env_parse_or(
                "XTIME_COOLDOWN_MS",
                u64::try_from(defaults.cooldown.as_millis()).unwrap_or(2000),
            )?),
            slippage_bps: get_env_parse_or("XTIME_SLIPPAGE_BPS", defaults.slippage_bps)?,
            deadline_secs: get_env_parse_or("XTIME_DEADLINE_SECS", defaults.deadline_secs)?,
            approval_policy,
            private_key,
            buy_gas_reserve: defaults.buy_gas_reserve,
            arbitrage_gas_reserve: defaults.arbitrage_gas_reserve,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(AppError::Config("XTIME_RPC_URL must not be empty".to_string()));
        }
        if self.slippage_bps >= 10_000 {
            return Err(AppError::Config(
                "XTIME_SLIPPAGE_BPS must be below 10000 (100%)".to_string(),
            ));
        }
        if self.refresh_interval.is_zero() {
            return Err(AppError::Config("XTIME_REFRESH_SECS must be at least 1".to_string()));
        }
        if self.deadline_secs == 0 {
            return Err(AppError::Config("XTIME_DEADLINE_SECS must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Explorer page for a contract or account.
    pub fn explorer_address_url(&self, address: Address) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    /// Explorer page for a transaction hash (hex, `0x`-prefixed).
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

fn whole_tokens(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(crate::units::TOKEN_DECIMALS))
}

fn env_address(name: &'static str, default: Address) -> Result<Address> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<Address>()
            .map_err(|e| AppError::Config(format!("{} is not a valid address: {}", name, e))),
        _ => Ok(default),
    }
}
