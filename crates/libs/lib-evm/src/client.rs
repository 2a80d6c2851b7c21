//! # EVM RPC Client
//!
//! High-level wrapper around an `alloy` HTTP provider with an optional local
//! signer.
//!
//! ## Features
//!
//! - **Contract Reads**: balances, allowances, prices, fees, quotes, arbitrage state
//! - **Transaction Submission**: sign and broadcast any [`ContractCall`]
//! - **Receipt Tracking**: wait for a submitted transaction to be mined
//! - **Read-only Mode**: without a signer every write fails with [`ChainError::NoSigner`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_evm::RpcClient;
//! use lib_evm::Address;
//!
//! # async fn example() -> Result<(), lib_evm::ChainError> {
//! let client = RpcClient::builder()
//!     .rpc_url("https://rpc.pulsechain.com")
//!     .chain_id(369)
//!     .build()?;
//!
//! let block = client.block_number().await?;
//! let balance = client.native_balance(Address::ZERO).await?;
//! println!("block {} balance {}", block, balance);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use tracing::{debug, info};

use crate::call::ContractCall;
use crate::contracts::{IArbitrage, IERC20, ILiquidityLocker, IPulseXRouter, IXTime};
use crate::error::ChainError;
use crate::types::{BestMove, TokenInfo, TxReceipt};

/// How long to wait for a receipt before reporting the transaction as failed.
const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(180);

/// Builder for configuring [`RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    rpc_url: String,
    chain_id: u64,
    signer: Option<PrivateKeySigner>,
    receipt_timeout: Duration,
}

impl Default for RpcClientBuilder {
    fn default() -> Self {
        Self {
            rpc_url: lib_core::config::DEFAULT_RPC_URL.to_string(),
            chain_id: lib_core::config::DEFAULT_CHAIN_ID,
            signer: None,
            receipt_timeout: DEFAULT_RECEIPT_TIMEOUT,
        }
    }
}

impl RpcClientBuilder {
    /// Set the JSON-RPC endpoint.
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Set the chain id transactions are signed for.
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Attach a local signer; without one the client is read-only.
    pub fn signer(mut self, signer: PrivateKeySigner) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Override the receipt wait timeout.
    pub fn receipt_timeout(mut self, timeout: Duration) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    /// Build the client. No network request is made here.
    pub fn build(self) -> Result<RpcClient, ChainError> {
        let url = self
            .rpc_url
            .trim()
            .parse()
            .map_err(|_| ChainError::Rpc(format!("invalid RPC URL '{}'", self.rpc_url)))?;

        let (provider, account) = match self.signer {
            Some(signer) => {
                let signer = signer.with_chain_id(Some(self.chain_id));
                let account = signer.address();
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer))
                    .connect_http(url)
                    .erased();
                (provider, Some(account))
            }
            None => (ProviderBuilder::new().connect_http(url).erased(), None),
        };

        info!(
            rpc_url = %self.rpc_url,
            chain_id = self.chain_id,
            account = ?account,
            "Connecting to EVM RPC"
        );

        Ok(RpcClient {
            provider,
            account,
            chain_id: self.chain_id,
            receipt_timeout: self.receipt_timeout,
        })
    }
}

/// High-level EVM RPC client.
///
/// Cloning is cheap: the underlying provider is reference counted.
#[derive(Clone)]
pub struct RpcClient {
    provider: DynProvider,
    account: Option<Address>,
    chain_id: u64,
    receipt_timeout: Duration,
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("account", &self.account)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

impl RpcClient {
    /// Create a client using a builder for configuration.
    pub fn builder() -> RpcClientBuilder {
        RpcClientBuilder::default()
    }

    /// Address of the signing account, if any.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Latest block number. Doubles as a health check.
    pub async fn block_number(&self) -> Result<u64, ChainError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }

    /// Native currency balance (`eth_getBalance`).
    pub async fn native_balance(&self, owner: Address) -> Result<U256, ChainError> {
        self.provider
            .get_balance(owner)
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }

    /// ERC-20 `balanceOf`.
    pub async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ChainError> {
        Ok(IERC20::new(token, &self.provider).balanceOf(owner).call().await?)
    }

    /// ERC-20 `allowance`.
    pub async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError> {
        Ok(IERC20::new(token, &self.provider)
            .allowance(owner, spender)
            .call()
            .await?)
    }

    /// `getInfo` on the xTIME contract.
    pub async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError> {
        let info = IXTime::new(token, &self.provider).getInfo().call().await?;
        Ok(TokenInfo {
            users: info.users,
            txs: info.txs,
            underlying_supply: info.underlyingSupply,
            supply: info.supply,
            price: info.price,
        })
    }

    /// `calculatePrice` on the xTIME contract.
    pub async fn calculate_price(&self, token: Address) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider).calculatePrice().call().await?)
    }

    /// Raw `mintFee` (share kept by the user, base 100000).
    pub async fn mint_fee(&self, token: Address) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider).mintFee().call().await?)
    }

    /// Raw `sellFee` (share kept by the user, base 100000).
    pub async fn sell_fee(&self, token: Address) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider).sellFee().call().await?)
    }

    /// xTIME minted for `amount` TIME.
    pub async fn estimate_minted(&self, token: Address, amount: U256) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider)
            .estimateMinted(amount)
            .call()
            .await?)
    }

    /// TIME returned for redeeming `amount` xTIME.
    pub async fn estimate_redeemed(&self, token: Address, amount: U256) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider)
            .estimateRedeemed(amount)
            .call()
            .await?)
    }

    /// `getValueOfHoldings(holder)`.
    pub async fn value_of_holdings(&self, token: Address, holder: Address) -> Result<U256, ChainError> {
        Ok(IXTime::new(token, &self.provider)
            .getValueOfHoldings(holder)
            .call()
            .await?)
    }

    /// Router `getAmountsOut`; one amount per hop of `path`.
    pub async fn amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError> {
        Ok(IPulseXRouter::new(router, &self.provider)
            .getAmountsOut(amount_in, path)
            .call()
            .await?)
    }

    /// Arbitrage helper `getBestMove`.
    pub async fn best_move(&self, arbitrage: Address) -> Result<BestMove, ChainError> {
        let response = IArbitrage::new(arbitrage, &self.provider)
            .getBestMove()
            .call()
            .await?;
        Ok(BestMove {
            title: response.title,
            description: response.description,
            function_id: response.functionId,
        })
    }

    /// Arbitrage helper `paused`.
    pub async fn arbitrage_paused(&self, arbitrage: Address) -> Result<bool, ChainError> {
        Ok(IArbitrage::new(arbitrage, &self.provider).paused().call().await?)
    }

    /// Sign and broadcast `call`, returning its hash without waiting for inclusion.
    pub async fn submit(&self, call: &ContractCall) -> Result<TxHash, ChainError> {
        if self.account.is_none() {
            return Err(ChainError::NoSigner);
        }

        debug!(call = %call, value = %call.value(), "Submitting transaction");

        let pending = match call {
            ContractCall::Approve { token, spender, amount } => {
                IERC20::new(*token, &self.provider)
                    .approve(*spender, *amount)
                    .send()
                    .await?
            }
            ContractCall::MintWithBacking { contract, amount, recipient } => {
                IXTime::new(*contract, &self.provider)
                    .mintWithBacking(*amount, *recipient)
                    .send()
                    .await?
            }
            ContractCall::Redeem { contract, amount } => {
                IXTime::new(*contract, &self.provider)
                    .redeem(*amount)
                    .send()
                    .await?
            }
            ContractCall::SwapExactEthForTokens { router, value, min_out, path, to, deadline } => {
                IPulseXRouter::new(*router, &self.provider)
                    .swapExactETHForTokens(*min_out, path.clone(), *to, U256::from(*deadline))
                    .value(*value)
                    .send()
                    .await?
            }
            ContractCall::SwapExactTokensForEth { router, amount_in, min_out, path, to, deadline } => {
                IPulseXRouter::new(*router, &self.provider)
                    .swapExactTokensForETH(*amount_in, *min_out, path.clone(), *to, U256::from(*deadline))
                    .send()
                    .await?
            }
            ContractCall::Boost { locker } => {
                ILiquidityLocker::new(*locker, &self.provider)
                    .boost()
                    .send()
                    .await?
            }
            ContractCall::Fing { contract, value, min_profit_bps } => {
                IArbitrage::new(*contract, &self.provider)
                    .fing(*min_profit_bps)
                    .value(*value)
                    .send()
                    .await?
            }
            ContractCall::Fong { contract, value, min_profit_bps } => {
                IArbitrage::new(*contract, &self.provider)
                    .fong(*min_profit_bps)
                    .value(*value)
                    .send()
                    .await?
            }
        };

        let tx_hash = *pending.tx_hash();
        info!(call = %call, tx_hash = %tx_hash, "Transaction broadcast");
        Ok(tx_hash)
    }

    /// Wait until `tx_hash` is mined and report whether it succeeded.
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ChainError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_timeout(Some(self.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        let outcome = TxReceipt {
            tx_hash,
            success: ReceiptResponse::status(&receipt),
            block_number: ReceiptResponse::block_number(&receipt),
        };
        debug!(tx_hash = %tx_hash, success = outcome.success, block = ?outcome.block_number, "Receipt received");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = RpcClient::builder().rpc_url("not a url").build();
        assert!(matches!(result, Err(ChainError::Rpc(_))));
    }

    #[test]
    fn test_read_only_client_has_no_account() {
        let client = RpcClient::builder()
            .rpc_url("http://localhost:8545")
            .build()
            .expect("valid url");
        assert_eq!(client.account(), None);
        assert_eq!(client.chain_id(), 369);
    }

    #[test]
    fn test_signer_sets_account() {
        let signer = PrivateKeySigner::random();
        let expected = signer.address();
        let client = RpcClient::builder()
            .rpc_url("http://localhost:8545")
            .chain_id(943)
            .signer(signer)
            .build()
            .expect("valid url");
        assert_eq!(client.account(), Some(expected));
        assert_eq!(client.chain_id(), 943);
    }

    #[tokio::test]
    async fn test_read_only_client_refuses_to_submit() {
        let client = RpcClient::builder()
            .rpc_url("http://localhost:8545")
            .build()
            .expect("valid url");
        let result = client.submit(&ContractCall::Boost { locker: Address::ZERO }).await;
        assert_eq!(result, Err(ChainError::NoSigner));
    }
}
