//! # Contract Calls
//!
//! [`ContractCall`] is the complete write surface of the dashboard. Every
//! transaction the app can send is one of these variants, built by a control
//! surface and handed to the chain service for signing and submission.

use std::fmt;

use alloy::primitives::{Address, U256};

/// Basis-point denominator (100% = 10000 bps).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A state-changing contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// ERC-20 `approve(spender, amount)` on `token`.
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    /// xTIME `mintWithBacking(numTokens, recipient)`; spends TIME.
    MintWithBacking {
        contract: Address,
        amount: U256,
        recipient: Address,
    },
    /// xTIME `redeem(tokenAmount)`.
    Redeem { contract: Address, amount: U256 },
    /// Router `swapExactETHForTokens`, paying `value` in the native currency.
    SwapExactEthForTokens {
        router: Address,
        value: U256,
        min_out: U256,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    },
    /// Router `swapExactTokensForETH`; spends the first token of `path`.
    SwapExactTokensForEth {
        router: Address,
        amount_in: U256,
        min_out: U256,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    },
    /// Liquidity locker `boost()`.
    Boost { locker: Address },
    /// Arbitrage helper `fing(minProfitBps)`, paying `value`.
    Fing {
        contract: Address,
        value: U256,
        min_profit_bps: U256,
    },
    /// Arbitrage helper `fong(minProfitBps)`, paying `value`.
    Fong {
        contract: Address,
        value: U256,
        min_profit_bps: U256,
    },
}

impl ContractCall {
    /// Solidity function name, used in logs and by test doubles.
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractCall::Approve { .. } => "approve",
            ContractCall::MintWithBacking { .. } => "mintWithBacking",
            ContractCall::Redeem { .. } => "redeem",
            ContractCall::SwapExactEthForTokens { .. } => "swapExactETHForTokens",
            ContractCall::SwapExactTokensForEth { .. } => "swapExactTokensForETH",
            ContractCall::Boost { .. } => "boost",
            ContractCall::Fing { .. } => "fing",
            ContractCall::Fong { .. } => "fong",
        }
    }

    /// Contract the call is sent to.
    pub fn target(&self) -> Address {
        match self {
            ContractCall::Approve { token, .. } => *token,
            ContractCall::MintWithBacking { contract, .. }
            | ContractCall::Redeem { contract, .. }
            | ContractCall::Fing { contract, .. }
            | ContractCall::Fong { contract, .. } => *contract,
            ContractCall::SwapExactEthForTokens { router, .. }
            | ContractCall::SwapExactTokensForEth { router, .. } => *router,
            ContractCall::Boost { locker } => *locker,
        }
    }

    /// Native currency attached to the call.
    pub fn value(&self) -> U256 {
        match self {
            ContractCall::SwapExactEthForTokens { value, .. }
            | ContractCall::Fing { value, .. }
            | ContractCall::Fong { value, .. } => *value,
            _ => U256::ZERO,
        }
    }
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.function_name(), self.target())
    }
}

/// Minimum acceptable output for a swap: `quoted * (10000 - slippage_bps) / 10000`.
///
/// Slippage at or above 100% yields zero.
pub fn min_output(quoted: U256, slippage_bps: u16) -> U256 {
    let slippage = u64::from(slippage_bps).min(BPS_DENOMINATOR);
    let keep = U256::from(BPS_DENOMINATOR - slippage);
    quoted.saturating_mul(keep) / U256::from(BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const ROUTER: Address = address!("165C3410fC91EF562C50559f7d2289fEbed552d9");

    #[test]
    fn test_min_output() {
        assert_eq!(min_output(U256::from(10_000u64), 100), U256::from(9_900u64));
        assert_eq!(min_output(U256::from(1_000u64), 0), U256::from(1_000u64));
        assert_eq!(min_output(U256::from(1_000u64), 10_000), U256::ZERO);
        assert_eq!(min_output(U256::from(99u64), 100), U256::from(98u64));
    }

    #[test]
    fn test_min_output_does_not_overflow() {
        let out = min_output(U256::MAX, 100);
        assert!(out < U256::MAX);
    }

    #[test]
    fn test_call_metadata() {
        let swap = ContractCall::SwapExactEthForTokens {
            router: ROUTER,
            value: U256::from(5u64),
            min_out: U256::from(4u64),
            path: vec![],
            to: Address::ZERO,
            deadline: 1_704_068_400,
        };
        assert_eq!(swap.function_name(), "swapExactETHForTokens");
        assert_eq!(swap.target(), ROUTER);
        assert_eq!(swap.value(), U256::from(5u64));

        let boost = ContractCall::Boost { locker: ROUTER };
        assert_eq!(boost.value(), U256::ZERO);
        assert!(boost.to_string().starts_with("boost@0x"));
    }
}
