//! # Transaction Tasks
//!
//! Drives one approve-then-act plan to completion and reports each step to
//! the main thread as lifecycle events.
//!
//! Steps are strictly sequential: the primary call is only submitted after
//! the approval receipt came back successful. Nothing is retried.

use crate::app::events::AppEvent;
use crate::app::lifecycle::{LifecycleEvent, Surface};
use crate::core::service::ChainService;
use async_channel::Sender;
use lib_evm::{ChainError, ContractCall, TxReceipt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Transactions submitted for one user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxPlan {
    /// `approve` that must be mined first, if the allowance is short
    pub approval: Option<ContractCall>,
    pub primary: ContractCall,
}

impl TxPlan {
    pub fn direct(primary: ContractCall) -> Self {
        Self {
            approval: None,
            primary,
        }
    }
}

/// Spawn [`run`] on the runtime.
pub(crate) fn spawn(
    service: Arc<dyn ChainService>,
    surface: Surface,
    plan: TxPlan,
    cooldown: Duration,
    event_tx: Sender<AppEvent>,
) {
    tokio::spawn(run(service, surface, plan, cooldown, event_tx));
}

/// Execute `plan`, then report `CooldownElapsed` once `cooldown` has passed.
pub async fn run(
    service: Arc<dyn ChainService>,
    surface: Surface,
    plan: TxPlan,
    cooldown: Duration,
    event_tx: Sender<AppEvent>,
) {
    info!(
        surface = ?surface,
        approval = ?plan.approval.as_ref().map(ToString::to_string),
        primary = %plan.primary,
        "Executing transaction plan"
    );

    if let Err(e) = execute(service.as_ref(), surface, &plan, &event_tx).await {
        warn!(surface = ?surface, error = %e, "Transaction plan failed");
        send_lifecycle(
            &event_tx,
            surface,
            LifecycleEvent::Failed {
                message: e.user_message(),
            },
        )
        .await;
    }

    tokio::time::sleep(cooldown).await;
    send_lifecycle(&event_tx, surface, LifecycleEvent::CooldownElapsed).await;
}

async fn execute(
    service: &dyn ChainService,
    surface: Surface,
    plan: &TxPlan,
    event_tx: &Sender<AppEvent>,
) -> Result<(), ChainError> {
    if let Some(approval) = &plan.approval {
        confirm(service, surface, approval, event_tx).await?;
        send_lifecycle(event_tx, surface, LifecycleEvent::ApprovalConfirmed).await;
    }

    confirm(service, surface, &plan.primary, event_tx).await?;
    send_lifecycle(event_tx, surface, LifecycleEvent::PrimaryConfirmed).await;
    Ok(())
}

/// Submit `call` and wait for a successful receipt.
async fn confirm(
    service: &dyn ChainService,
    surface: Surface,
    call: &ContractCall,
    event_tx: &Sender<AppEvent>,
) -> Result<TxReceipt, ChainError> {
    let tx_hash = service.submit(call).await?;
    let _ = event_tx
        .send(AppEvent::TxSubmitted {
            surface,
            tx_hash,
            function: call.function_name(),
        })
        .await;

    let receipt = service.wait_for_receipt(tx_hash).await?;
    if !receipt.success {
        return Err(ChainError::Reverted { tx_hash });
    }

    info!(
        surface = ?surface,
        call = %call,
        tx_hash = %tx_hash,
        block = ?receipt.block_number,
        "Transaction confirmed"
    );
    Ok(receipt)
}

async fn send_lifecycle(event_tx: &Sender<AppEvent>, surface: Surface, event: LifecycleEvent) {
    let _ = event_tx.send(AppEvent::Lifecycle { surface, event }).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::OfflineChain;
    use lib_evm::{Address, U256};

    #[tokio::test]
    async fn test_submission_failure_skips_primary_and_cools_down() {
        let (tx, rx) = async_channel::unbounded();
        let plan = TxPlan {
            approval: Some(ContractCall::Approve {
                token: Address::repeat_byte(1),
                spender: Address::repeat_byte(2),
                amount: U256::from(1u8),
            }),
            primary: ContractCall::Boost {
                locker: Address::repeat_byte(3),
            },
        };

        run(
            Arc::new(OfflineChain::read_only()),
            Surface::Boost,
            plan,
            Duration::from_millis(1),
            tx,
        )
        .await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            AppEvent::Lifecycle {
                surface: Surface::Boost,
                event: LifecycleEvent::Failed { message }
            } if message == "Transaction failed: no wallet connected"
        ));
        assert!(matches!(
            &events[1],
            AppEvent::Lifecycle {
                event: LifecycleEvent::CooldownElapsed,
                ..
            }
        ));
    }
}
