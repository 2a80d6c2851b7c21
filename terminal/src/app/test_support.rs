//! Minimal chain double for unit tests.

use crate::core::service::ChainService;
use async_trait::async_trait;
use lib_evm::{Address, BestMove, ChainError, ContractCall, TokenInfo, TxHash, TxReceipt, U256};

/// Every read fails; submissions are refused.
pub(crate) struct OfflineChain {
    pub account: Option<Address>,
}

impl OfflineChain {
    pub fn read_only() -> Self {
        Self { account: None }
    }

    pub fn with_account() -> Self {
        Self {
            account: Some(Address::repeat_byte(0x11)),
        }
    }
}

fn offline<T>() -> Result<T, ChainError> {
    Err(ChainError::Rpc("offline".to_string()))
}

#[async_trait]
impl ChainService for OfflineChain {
    fn account(&self) -> Option<Address> {
        self.account
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        offline()
    }

    async fn native_balance(&self, _owner: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn allowance(&self, _t: Address, _o: Address, _s: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn token_info(&self, _token: Address) -> Result<TokenInfo, ChainError> {
        offline()
    }

    async fn calculate_price(&self, _token: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn mint_fee(&self, _token: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn sell_fee(&self, _token: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn estimate_minted(&self, _token: Address, _amount: U256) -> Result<U256, ChainError> {
        offline()
    }

    async fn estimate_redeemed(&self, _token: Address, _amount: U256) -> Result<U256, ChainError> {
        offline()
    }

    async fn value_of_holdings(&self, _token: Address, _holder: Address) -> Result<U256, ChainError> {
        offline()
    }

    async fn amounts_out(
        &self,
        _router: Address,
        _amount_in: U256,
        _path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError> {
        offline()
    }

    async fn best_move(&self, _arbitrage: Address) -> Result<BestMove, ChainError> {
        offline()
    }

    async fn arbitrage_paused(&self, _arbitrage: Address) -> Result<bool, ChainError> {
        offline()
    }

    async fn submit(&self, _call: &ContractCall) -> Result<TxHash, ChainError> {
        Err(ChainError::NoSigner)
    }

    async fn wait_for_receipt(&self, _tx_hash: TxHash) -> Result<TxReceipt, ChainError> {
        offline()
    }
}
