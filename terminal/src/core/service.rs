//! # Service Traits
//!
//! The chain boundary used by the app, enabling dependency injection and
//! in-memory fakes in tests.

use async_trait::async_trait;
use lib_evm::{
    Address, BestMove, ChainError, ContractCall, RpcClient, TokenInfo, TxHash, TxReceipt, U256,
};

/// Contract reads and writes the dashboard needs.
///
/// Every method maps onto one JSON-RPC round trip (or one submission). Token
/// and contract addresses are passed in so the trait stays deployment-agnostic.
#[async_trait]
pub trait ChainService: Send + Sync {
    /// Address of the signing account, `None` in read-only mode.
    fn account(&self) -> Option<Address>;

    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Native (PLS) balance.
    async fn native_balance(&self, owner: Address) -> Result<U256, ChainError>;

    /// ERC-20 `balanceOf`.
    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ChainError>;

    /// ERC-20 `allowance`.
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError>;

    /// `getInfo` on the token contract.
    async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError>;

    /// `calculatePrice` on the token contract.
    async fn calculate_price(&self, token: Address) -> Result<U256, ChainError>;

    /// Raw `mintFee` (share kept by the user, base 100000).
    async fn mint_fee(&self, token: Address) -> Result<U256, ChainError>;

    /// Raw `sellFee` (share kept by the user, base 100000).
    async fn sell_fee(&self, token: Address) -> Result<U256, ChainError>;

    async fn estimate_minted(&self, token: Address, amount: U256) -> Result<U256, ChainError>;

    async fn estimate_redeemed(&self, token: Address, amount: U256) -> Result<U256, ChainError>;

    async fn value_of_holdings(&self, token: Address, holder: Address) -> Result<U256, ChainError>;

    /// Router `getAmountsOut`; one entry per hop, input first.
    async fn amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError>;

    async fn best_move(&self, arbitrage: Address) -> Result<BestMove, ChainError>;

    async fn arbitrage_paused(&self, arbitrage: Address) -> Result<bool, ChainError>;

    /// Sign and broadcast a write call.
    async fn submit(&self, call: &ContractCall) -> Result<TxHash, ChainError>;

    /// Block until the transaction is mined (or the wait times out).
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ChainError>;
}

#[async_trait]
impl ChainService for RpcClient {
    fn account(&self) -> Option<Address> {
        RpcClient::account(self)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        RpcClient::block_number(self).await
    }

    async fn native_balance(&self, owner: Address) -> Result<U256, ChainError> {
        RpcClient::native_balance(self, owner).await
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ChainError> {
        RpcClient::token_balance(self, token, owner).await
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError> {
        RpcClient::allowance(self, token, owner, spender).await
    }

    async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError> {
        RpcClient::token_info(self, token).await
    }

    async fn calculate_price(&self, token: Address) -> Result<U256, ChainError> {
        RpcClient::calculate_price(self, token).await
    }

    async fn mint_fee(&self, token: Address) -> Result<U256, ChainError> {
        RpcClient::mint_fee(self, token).await
    }

    async fn sell_fee(&self, token: Address) -> Result<U256, ChainError> {
        RpcClient::sell_fee(self, token).await
    }

    async fn estimate_minted(&self, token: Address, amount: U256) -> Result<U256, ChainError> {
        RpcClient::estimate_minted(self, token, amount).await
    }

    async fn estimate_redeemed(&self, token: Address, amount: U256) -> Result<U256, ChainError> {
        RpcClient::estimate_redeemed(self, token, amount).await
    }

    async fn value_of_holdings(&self, token: Address, holder: Address) -> Result<U256, ChainError> {
        RpcClient::value_of_holdings(self, token, holder).await
    }

    async fn amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError> {
        RpcClient::amounts_out(self, router, amount_in, path).await
    }

    async fn best_move(&self, arbitrage: Address) -> Result<BestMove, ChainError> {
        RpcClient::best_move(self, arbitrage).await
    }

    async fn arbitrage_paused(&self, arbitrage: Address) -> Result<bool, ChainError> {
        RpcClient::arbitrage_paused(self, arbitrage).await
    }

    async fn submit(&self, call: &ContractCall) -> Result<TxHash, ChainError> {
        RpcClient::submit(self, call).await
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ChainError> {
        RpcClient::wait_for_receipt(self, tx_hash).await
    }
}
