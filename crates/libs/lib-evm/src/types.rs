//! # Readings Type Definitions
//!
//! Plain data mirrored from contract reads. Every field that comes from the
//! chain is an `Option`: `None` means "not read yet or the read failed" and is
//! rendered as a placeholder, never as zero.
//!
//! ## Type Categories
//!
//! - [`TokenInfo`]: protocol-wide figures from `getInfo`
//! - [`FeeSchedule`]: mint/sell fee percentages derived from `mintFee`/`sellFee`
//! - [`BestMove`]: the arbitrage helper's recommendation
//! - [`AccountReadings`] and [`Snapshot`]: one refresh worth of readings
//! - [`TxReceipt`]: the part of a transaction receipt the dashboard cares about

use std::str::FromStr;

use alloy::primitives::{Address, TxHash, U256};

/// Protocol-wide figures returned by the token contract's `getInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    /// Number of holders.
    pub users: U256,
    /// Number of protocol transactions.
    pub txs: U256,
    /// TIME held as backing.
    pub underlying_supply: U256,
    /// xTIME total supply.
    pub supply: U256,
    /// xTIME price in TIME.
    pub price: U256,
}

/// Mint and sell fees as displayable percentages.
///
/// The token contract reports fees as the share kept by the user in base
/// 100000, so `95000` means the user keeps 95% and the fee is 5%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub mint_fee_pct: f64,
    pub sell_fee_pct: f64,
}

impl FeeSchedule {
    /// Fee shown while the contract has not been read.
    pub const DEFAULT_FEE_PCT: f64 = 5.0;

    /// Build from the raw `mintFee` / `sellFee` reads.
    ///
    /// Missing reads and a raw `0` (fee not configured) use the default.
    pub fn from_raw(mint_fee: Option<U256>, sell_fee: Option<U256>) -> Self {
        let pct = |raw: Option<U256>| {
            raw.filter(|r| !r.is_zero())
                .map_or(Self::DEFAULT_FEE_PCT, Self::pct_from_raw)
        };
        Self {
            mint_fee_pct: pct(mint_fee),
            sell_fee_pct: pct(sell_fee),
        }
    }

    /// `100 - raw / 1000`, clamped to `0..=100`.
    pub fn pct_from_raw(raw: U256) -> f64 {
        match u64::try_from(raw) {
            Ok(raw) => (100.0 - raw as f64 / 1000.0).clamp(0.0, 100.0),
            Err(_) => 0.0,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

/// Which payable entry point of the arbitrage helper to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbitrageSide {
    Fing,
    Fong,
}

impl ArbitrageSide {
    pub fn function_name(self) -> &'static str {
        match self {
            ArbitrageSide::Fing => "fing",
            ArbitrageSide::Fong => "fong",
        }
    }
}

impl FromStr for ArbitrageSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fing" => Ok(ArbitrageSide::Fing),
            "fong" => Ok(ArbitrageSide::Fong),
            other => Err(format!("unknown arbitrage function '{}'", other)),
        }
    }
}

/// Recommendation returned by `getBestMove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    pub title: String,
    pub description: String,
    pub function_id: String,
}

impl BestMove {
    /// The entry point the helper recommends, if it names one we know.
    pub fn side(&self) -> Option<ArbitrageSide> {
        self.function_id.parse().ok()
    }
}

/// Readings that only exist for a connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountReadings {
    pub address: Address,
    /// Native (PLS) balance.
    pub native_balance: Option<U256>,
    /// xTIME balance.
    pub token_balance: Option<U256>,
    /// TIME balance.
    pub backing_balance: Option<U256>,
    /// TIME allowance granted to the xTIME contract (gates minting).
    pub backing_allowance: Option<U256>,
    /// xTIME allowance granted to the router (gates selling).
    pub router_allowance: Option<U256>,
    /// `getValueOfHoldings`, the xTIME position valued in TIME.
    pub holdings_value: Option<U256>,
}

impl AccountReadings {
    pub fn empty(address: Address) -> Self {
        Self {
            address,
            native_balance: None,
            token_balance: None,
            backing_balance: None,
            backing_allowance: None,
            router_allowance: None,
            holdings_value: None,
        }
    }
}

/// One refresh worth of contract readings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Latest block number seen by the node.
    pub block_number: Option<u64>,
    pub info: Option<TokenInfo>,
    /// `calculatePrice`: xTIME price in TIME.
    pub price: Option<U256>,
    pub fees: FeeSchedule,
    /// DAI received for one xTIME along the USD route.
    pub token_usd: Option<U256>,
    /// DAI received for one TIME along the USD route.
    pub backing_usd: Option<U256>,
    /// PLS received for one xTIME on the DEX.
    pub token_in_native: Option<U256>,
    /// xTIME received for one PLS on the DEX.
    pub native_in_token: Option<U256>,
    /// Native balance held by the liquidity locker.
    pub locker_native: Option<U256>,
    /// xTIME balance held by the liquidity locker.
    pub locker_token: Option<U256>,
    pub best_move: Option<BestMove>,
    pub arbitrage_paused: Option<bool>,
    /// `None` when no wallet is connected.
    pub account: Option<AccountReadings>,
}

impl Snapshot {
    /// Whether the locker holds anything for `boost` to lock.
    pub fn locker_has_balance(&self) -> bool {
        self.locker_native.is_some_and(|v| !v.is_zero())
            || self.locker_token.is_some_and(|v| !v.is_zero())
    }

    pub fn is_paused(&self) -> bool {
        self.arbitrage_paused.unwrap_or(false)
    }
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    /// `false` when the transaction reverted.
    pub success: bool,
    pub block_number: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_schedule_from_raw() {
        let fees = FeeSchedule::from_raw(Some(U256::from(95_000u64)), Some(U256::from(97_500u64)));
        assert_eq!(fees.mint_fee_pct, 5.0);
        assert_eq!(fees.sell_fee_pct, 2.5);
    }

    #[test]
    fn test_fee_schedule_defaults_when_unread() {
        let fees = FeeSchedule::from_raw(None, Some(U256::from(100_000u64)));
        assert_eq!(fees.mint_fee_pct, FeeSchedule::DEFAULT_FEE_PCT);
        assert_eq!(fees.sell_fee_pct, 0.0);
        assert_eq!(FeeSchedule::default().sell_fee_pct, 5.0);
    }

    #[test]
    fn test_fee_schedule_zero_read_uses_default() {
        let fees = FeeSchedule::from_raw(Some(U256::ZERO), Some(U256::ZERO));
        assert_eq!(fees.mint_fee_pct, FeeSchedule::DEFAULT_FEE_PCT);
        assert_eq!(fees.sell_fee_pct, FeeSchedule::DEFAULT_FEE_PCT);
    }

    #[test]
    fn test_fee_schedule_clamps_out_of_range() {
        assert_eq!(FeeSchedule::pct_from_raw(U256::from(250_000u64)), 0.0);
        assert_eq!(FeeSchedule::pct_from_raw(U256::ZERO), 100.0);
        assert_eq!(FeeSchedule::pct_from_raw(U256::MAX), 0.0);
    }

    #[test]
    fn test_best_move_side() {
        let best = BestMove {
            title: "Buy on DEX".to_string(),
            description: "xTIME trades below its backing".to_string(),
            function_id: "Fong".to_string(),
        };
        assert_eq!(best.side(), Some(ArbitrageSide::Fong));

        let idle = BestMove { function_id: "none".to_string(), ..best };
        assert_eq!(idle.side(), None);
    }

    #[test]
    fn test_locker_has_balance() {
        let mut snapshot = Snapshot::default();
        assert!(!snapshot.locker_has_balance());

        snapshot.locker_native = Some(U256::ZERO);
        snapshot.locker_token = Some(U256::ZERO);
        assert!(!snapshot.locker_has_balance());

        snapshot.locker_token = Some(U256::from(1u64));
        assert!(snapshot.locker_has_balance());
    }
}
