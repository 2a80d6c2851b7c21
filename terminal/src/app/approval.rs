//! # Approval Gate
//!
//! Decides whether an ERC-20 `approve` must be mined before a transaction
//! that pulls tokens from the user.

use lib_evm::U256;

/// Every write the dashboard can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// TIME → xTIME via `mintWithBacking` (pulls TIME, spender = xTIME contract)
    Mint,
    /// xTIME → TIME via `redeem` (burns the caller's own balance)
    Redeem,
    /// PLS → xTIME on the router (payable)
    Buy,
    /// xTIME → PLS on the router (pulls xTIME, spender = router)
    Sell,
    /// Liquidity locker `boost`
    Boost,
    /// Arbitrage helper `fing` / `fong` (payable)
    Arbitrage,
}

impl Action {
    /// Whether the action spends an ERC-20 allowance.
    pub fn is_allowance_governed(self) -> bool {
        matches!(self, Action::Mint | Action::Sell)
    }
}

/// `true` exactly when `action` spends an allowance and `amount` exceeds it.
///
/// An allowance that has not been read yet counts as zero.
pub fn needs_approval(action: Action, amount: U256, allowance: Option<U256>) -> bool {
    action.is_allowance_governed() && amount > allowance.unwrap_or(U256::ZERO)
}
