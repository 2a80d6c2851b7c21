//! # Market Data Tasks
//!
//! Pulls one [`Snapshot`] of contract readings: protocol stats, fees, DEX and
//! USD prices, locker and arbitrage status, plus the connected account.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ChainService;
use async_channel::Sender;
use lib_core::{ContractAddresses, TOKEN_DECIMALS};
use lib_evm::{AccountReadings, Address, ChainError, FeeSchedule, Snapshot, U256};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tokio::spawn;
use tracing::{debug, info};

/// Fetch a fresh snapshot in the background.
///
/// Internal task function - skipped while a fetch is already in flight; the
/// request is remembered and replayed when the running fetch lands.
pub(crate) fn fetch_snapshot(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, contracts, account) = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.fetching_snapshot {
            state.refresh_pending = true;
            return;
        }

        state.fetching_snapshot = true;
        state.refresh_pending = false;
        state.last_refresh = Some(Instant::now());
        (
            state.chain.clone(),
            state.config.contracts,
            state.wallet.address(),
        )
    }; // Lock released here

    let state_arc = Arc::clone(&state);
    spawn(async move {
        let started = Instant::now();
        let snapshot = read_snapshot(chain.as_ref(), &contracts, account).await;

        // Always reset fetching flag when done
        state_arc.write().fetching_snapshot = false;

        info!(
            block = ?snapshot.block_number,
            account = ?account,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Snapshot refreshed"
        );
        let _ = event_tx.send(AppEvent::SnapshotUpdated(Box::new(snapshot))).await;
    });
}

/// Read every value the dashboard displays.
///
/// Reads run concurrently; a failed read leaves its field `None`.
pub async fn read_snapshot(
    service: &dyn ChainService,
    contracts: &ContractAddresses,
    account: Option<Address>,
) -> Snapshot {
    let one = one_token();

    let (
        block_number,
        info,
        price,
        mint_fee,
        sell_fee,
        token_usd,
        backing_usd,
        token_in_native,
        native_in_token,
        locker_native,
        locker_token,
        best_move,
        paused,
    ) = futures::join!(
        service.block_number(),
        service.token_info(contracts.token),
        service.calculate_price(contracts.token),
        service.mint_fee(contracts.token),
        service.sell_fee(contracts.token),
        service.amounts_out(contracts.router, one, contracts.token_usd_path()),
        service.amounts_out(contracts.router, one, contracts.backing_usd_path()),
        service.amounts_out(contracts.router, one, contracts.sell_path()),
        service.amounts_out(contracts.router, one, contracts.buy_path()),
        service.native_balance(contracts.locker),
        service.token_balance(contracts.token, contracts.locker),
        service.best_move(contracts.arbitrage),
        service.arbitrage_paused(contracts.arbitrage),
    );

    let account = match account {
        Some(address) => Some(read_account(service, contracts, address).await),
        None => None,
    };

    Snapshot {
        block_number: logged("block_number", block_number),
        info: logged("getInfo", info),
        price: logged("calculatePrice", price),
        fees: FeeSchedule::from_raw(logged("mintFee", mint_fee), logged("sellFee", sell_fee)),
        token_usd: logged("token_usd", token_usd).and_then(last_amount),
        backing_usd: logged("backing_usd", backing_usd).and_then(last_amount),
        token_in_native: logged("token_in_native", token_in_native).and_then(last_amount),
        native_in_token: logged("native_in_token", native_in_token).and_then(last_amount),
        locker_native: logged("locker_native", locker_native),
        locker_token: logged("locker_token", locker_token),
        best_move: logged("getBestMove", best_move),
        arbitrage_paused: logged("paused", paused),
        account,
    }
}

async fn read_account(
    service: &dyn ChainService,
    contracts: &ContractAddresses,
    address: Address,
) -> AccountReadings {
    let (native, token, backing, backing_allowance, router_allowance, holdings) = futures::join!(
        service.native_balance(address),
        service.token_balance(contracts.token, address),
        service.token_balance(contracts.backing, address),
        service.allowance(contracts.backing, address, contracts.token),
        service.allowance(contracts.token, address, contracts.router),
        service.value_of_holdings(contracts.token, address),
    );

    AccountReadings {
        address,
        native_balance: logged("native_balance", native),
        token_balance: logged("token_balance", token),
        backing_balance: logged("backing_balance", backing),
        backing_allowance: logged("backing_allowance", backing_allowance),
        router_allowance: logged("router_allowance", router_allowance),
        holdings_value: logged("getValueOfHoldings", holdings),
    }
}

fn logged<T>(read: &'static str, result: Result<T, ChainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(read, error = %e, "Contract read failed");
            None
        }
    }
}

fn last_amount(amounts: Vec<U256>) -> Option<U256> {
    amounts.last().copied()
}

fn one_token() -> U256 {
    U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
}
