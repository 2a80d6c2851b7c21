//! # Quote Derivation
//!
//! Turns an amount string and a direction into an estimated output using
//! contract reads. Quotes are display-only; swap minimum outputs are derived
//! separately from the raw quoted amount.

use crate::app::approval::Action;
use crate::app::lifecycle::Surface;
use crate::core::service::ChainService;
use lib_core::{parse_positive_amount, ContractAddresses};
use lib_evm::{FeeSchedule, U256};

/// Trade direction on one of the two trading cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// TIME → xTIME through the token contract
    Mint,
    /// xTIME → TIME through the token contract
    Redeem,
    /// PLS → xTIME on the DEX
    Buy,
    /// xTIME → PLS on the DEX
    Sell,
}

impl Direction {
    /// Protocol fee shown next to the quote. DEX trades carry none.
    pub fn fee_pct(self, fees: &FeeSchedule) -> f64 {
        match self {
            Direction::Mint => fees.mint_fee_pct,
            Direction::Redeem => fees.sell_fee_pct,
            Direction::Buy | Direction::Sell => 0.0,
        }
    }

    pub fn input_symbol(self) -> &'static str {
        match self {
            Direction::Mint => "TIME",
            Direction::Redeem | Direction::Sell => "xTIME",
            Direction::Buy => "PLS",
        }
    }

    pub fn output_symbol(self) -> &'static str {
        match self {
            Direction::Mint | Direction::Buy => "xTIME",
            Direction::Redeem => "TIME",
            Direction::Sell => "PLS",
        }
    }

    /// The opposite direction on the same card.
    pub fn flip(self) -> Direction {
        match self {
            Direction::Mint => Direction::Redeem,
            Direction::Redeem => Direction::Mint,
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }

    pub fn action(self) -> Action {
        match self {
            Direction::Mint => Action::Mint,
            Direction::Redeem => Action::Redeem,
            Direction::Buy => Action::Buy,
            Direction::Sell => Action::Sell,
        }
    }

    pub fn surface(self) -> Surface {
        match self {
            Direction::Mint | Direction::Redeem => Surface::MintRedeem,
            Direction::Buy | Direction::Sell => Surface::Swap,
        }
    }

    /// Label of the submit button once the amount is valid.
    pub fn action_label(self) -> &'static str {
        match self {
            Direction::Mint => "Mint xTIME",
            Direction::Redeem => "Redeem TIME",
            Direction::Buy => "Buy xTIME",
            Direction::Sell => "Sell xTIME",
        }
    }
}

/// Estimated output of a trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub amount_out: U256,
    pub fee_pct: f64,
}

impl Quote {
    pub fn zero(fee_pct: f64) -> Self {
        Self {
            amount_out: U256::ZERO,
            fee_pct,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount_out.is_zero()
    }
}

/// Estimate the output of `input` traded in `direction`.
///
/// Empty, unparsable or non-positive input yields a zero quote without
/// touching the chain. A failed read also yields a zero quote.
pub async fn derive_quote(
    service: &dyn ChainService,
    contracts: &ContractAddresses,
    direction: Direction,
    input: &str,
    fees: &FeeSchedule,
) -> Quote {
    let fee_pct = direction.fee_pct(fees);
    let Some(amount) = parse_positive_amount(input) else {
        return Quote::zero(fee_pct);
    };

    let result = match direction {
        Direction::Mint => service.estimate_minted(contracts.token, amount).await,
        Direction::Redeem => service.estimate_redeemed(contracts.token, amount).await,
        Direction::Buy => service
            .amounts_out(contracts.router, amount, contracts.buy_path())
            .await
            .map(|amounts| amounts.last().copied().unwrap_or(U256::ZERO)),
        Direction::Sell => service
            .amounts_out(contracts.router, amount, contracts.sell_path())
            .await
            .map(|amounts| amounts.last().copied().unwrap_or(U256::ZERO)),
    };

    match result {
        Ok(amount_out) => Quote { amount_out, fee_pct },
        Err(e) => {
            tracing::warn!(
                direction = ?direction,
                input = %input,
                error = %e,
                "Quote read failed - showing zero"
            );
            Quote::zero(fee_pct)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_by_direction() {
        let fees = FeeSchedule {
            mint_fee_pct: 5.0,
            sell_fee_pct: 2.5,
        };
        assert_eq!(Direction::Mint.fee_pct(&fees), 5.0);
        assert_eq!(Direction::Redeem.fee_pct(&fees), 2.5);
        assert_eq!(Direction::Buy.fee_pct(&fees), 0.0);
        assert_eq!(Direction::Sell.fee_pct(&fees), 0.0);
    }

    #[test]
    fn test_flip_stays_on_card() {
        for direction in [Direction::Mint, Direction::Redeem, Direction::Buy, Direction::Sell] {
            assert_eq!(direction.flip().surface(), direction.surface());
            assert_eq!(direction.flip().flip(), direction);
            assert_eq!(direction.flip().input_symbol(), direction.output_symbol());
        }
    }

    #[test]
    fn test_actions() {
        assert_eq!(Direction::Mint.action(), Action::Mint);
        assert_eq!(Direction::Sell.action(), Action::Sell);
        assert!(Direction::Mint.action().is_allowance_governed());
        assert!(!Direction::Buy.action().is_allowance_governed());
    }
}
