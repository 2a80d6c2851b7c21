//! # Transaction Lifecycle
//!
//! Per-surface state machine for approve-then-act transactions.
//!
//! ```text
//! Idle ──Begin{approval}──▶ Approving ──ApprovalConfirmed──▶ Pending
//! Idle ──Begin{no approval}──────────────────────────────▶ Pending
//! Pending ──PrimaryConfirmed──▶ Success
//! Approving | Pending ──Failed──▶ Error
//! Success | Error ──CooldownElapsed──▶ Idle
//! ```

use lib_evm::TxHash;
use std::fmt;

/// Control surfaces that submit transactions. Each owns its own lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    MintRedeem,
    Swap,
    Boost,
    Arbitrage,
}

impl Surface {
    pub const ALL: [Surface; 4] = [
        Surface::MintRedeem,
        Surface::Swap,
        Surface::Boost,
        Surface::Arbitrage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Surface::MintRedeem => "Mint/Redeem",
            Surface::Swap => "Swap",
            Surface::Boost => "Boost",
            Surface::Arbitrage => "Arbitrage",
        }
    }

    fn index(self) -> usize {
        match self {
            Surface::MintRedeem => 0,
            Surface::Swap => 1,
            Surface::Boost => 2,
            Surface::Arbitrage => 3,
        }
    }
}

/// Transaction lifecycle state of one surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TxState {
    #[default]
    Idle,
    /// Approval submitted, waiting for its receipt
    Approving,
    /// Primary call submitted (or about to be), waiting for its receipt
    Pending,
    Success,
    Error { message: String },
}

impl TxState {
    pub fn is_idle(&self) -> bool {
        matches!(self, TxState::Idle)
    }

    /// Approving or pending
    pub fn is_busy(&self) -> bool {
        matches!(self, TxState::Approving | TxState::Pending)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TxState::Idle => "idle",
            TxState::Approving => "approving",
            TxState::Pending => "pending",
            TxState::Success => "success",
            TxState::Error { .. } => "error",
        }
    }

    /// Next state for `event`, or `None` if the pair is not a valid transition.
    pub fn transition(&self, event: &LifecycleEvent) -> Option<TxState> {
        match (self, event) {
            (TxState::Idle, LifecycleEvent::Begin { needs_approval: true }) => {
                Some(TxState::Approving)
            }
            (TxState::Idle, LifecycleEvent::Begin { needs_approval: false }) => {
                Some(TxState::Pending)
            }
            (TxState::Approving, LifecycleEvent::ApprovalConfirmed) => Some(TxState::Pending),
            (TxState::Pending, LifecycleEvent::PrimaryConfirmed) => Some(TxState::Success),
            (TxState::Approving | TxState::Pending, LifecycleEvent::Failed { message }) => {
                Some(TxState::Error {
                    message: message.clone(),
                })
            }
            (TxState::Success | TxState::Error { .. }, LifecycleEvent::CooldownElapsed) => {
                Some(TxState::Idle)
            }
            _ => None,
        }
    }

    /// Apply `event`; invalid transitions leave the state unchanged.
    pub fn apply(self, event: &LifecycleEvent) -> TxState {
        match self.transition(event) {
            Some(next) => next,
            None => {
                tracing::warn!(
                    state = self.name(),
                    event = ?event,
                    "Ignoring invalid lifecycle transition"
                );
                self
            }
        }
    }
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxState::Error { message } => write!(f, "error: {message}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Inputs to the lifecycle state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Begin { needs_approval: bool },
    ApprovalConfirmed,
    PrimaryConfirmed,
    Failed { message: String },
    CooldownElapsed,
}

/// Lifecycle controller of one surface.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: TxState,
    /// What the current run does, e.g. "Mint 100 TIME"
    pub description: String,
    /// Hash of the most recently broadcast transaction
    pub last_tx: Option<TxHash>,
    /// States visited since the last `Idle`, used for the step indicator
    history: Vec<TxState>,
}

impl Lifecycle {
    pub fn state(&self) -> &TxState {
        &self.state
    }

    /// States visited in the current (or last finished) run, starting with `Idle`.
    pub fn history(&self) -> &[TxState] {
        &self.history
    }

    /// Apply `event` and return whether the state changed.
    pub fn handle(&mut self, event: &LifecycleEvent) -> bool {
        let Some(next) = self.state.transition(event) else {
            // logs the rejection
            self.state = std::mem::take(&mut self.state).apply(event);
            return false;
        };

        if matches!(event, LifecycleEvent::Begin { .. }) {
            self.history = vec![TxState::Idle];
            self.description.clear();
            self.last_tx = None;
        }
        self.history.push(next.clone());
        self.state = next;
        true
    }
}

/// Lifecycle controllers for all surfaces.
#[derive(Debug, Clone, Default)]
pub struct Lifecycles {
    surfaces: [Lifecycle; 4],
}

impl Lifecycles {
    pub fn get(&self, surface: Surface) -> &Lifecycle {
        &self.surfaces[surface.index()]
    }

    pub fn get_mut(&mut self, surface: Surface) -> &mut Lifecycle {
        &mut self.surfaces[surface.index()]
    }

    pub fn state(&self, surface: Surface) -> &TxState {
        self.get(surface).state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> LifecycleEvent {
        LifecycleEvent::Failed {
            message: msg.to_string(),
        }
    }

    #[test]
    fn test_approval_path() {
        let state = TxState::Idle.apply(&LifecycleEvent::Begin { needs_approval: true });
        assert_eq!(state, TxState::Approving);
        let state = state.apply(&LifecycleEvent::ApprovalConfirmed);
        assert_eq!(state, TxState::Pending);
        let state = state.apply(&LifecycleEvent::PrimaryConfirmed);
        assert_eq!(state, TxState::Success);
        let state = state.apply(&LifecycleEvent::CooldownElapsed);
        assert_eq!(state, TxState::Idle);
    }

    #[test]
    fn test_direct_path() {
        let state = TxState::Idle.apply(&LifecycleEvent::Begin { needs_approval: false });
        assert_eq!(state, TxState::Pending);
    }

    #[test]
    fn test_failure_from_busy_states() {
        assert_eq!(
            TxState::Approving.apply(&failed("boom")),
            TxState::Error { message: "boom".to_string() }
        );
        assert_eq!(
            TxState::Pending.apply(&failed("boom")),
            TxState::Error { message: "boom".to_string() }
        );
        let err = TxState::Error { message: "boom".to_string() };
        assert_eq!(err.apply(&LifecycleEvent::CooldownElapsed), TxState::Idle);
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        assert_eq!(TxState::Idle.apply(&LifecycleEvent::PrimaryConfirmed), TxState::Idle);
        assert_eq!(TxState::Idle.apply(&LifecycleEvent::CooldownElapsed), TxState::Idle);
        assert_eq!(TxState::Idle.apply(&failed("x")), TxState::Idle);
        assert_eq!(
            TxState::Approving.apply(&LifecycleEvent::PrimaryConfirmed),
            TxState::Approving
        );
        assert_eq!(
            TxState::Pending.apply(&LifecycleEvent::Begin { needs_approval: false }),
            TxState::Pending
        );
        assert_eq!(
            TxState::Pending.apply(&LifecycleEvent::ApprovalConfirmed),
            TxState::Pending
        );
        assert_eq!(TxState::Success.apply(&failed("late")), TxState::Success);
        assert_eq!(
            TxState::Success.apply(&LifecycleEvent::Begin { needs_approval: true }),
            TxState::Success
        );
    }

    #[test]
    fn test_controller_history() {
        let mut lifecycle = Lifecycle::default();
        assert!(lifecycle.handle(&LifecycleEvent::Begin { needs_approval: true }));
        assert!(lifecycle.handle(&LifecycleEvent::ApprovalConfirmed));
        assert!(lifecycle.handle(&LifecycleEvent::PrimaryConfirmed));
        assert!(lifecycle.handle(&LifecycleEvent::CooldownElapsed));
        assert_eq!(
            lifecycle.history(),
            &[
                TxState::Idle,
                TxState::Approving,
                TxState::Pending,
                TxState::Success,
                TxState::Idle
            ]
        );
    }

    #[test]
    fn test_controller_rejects_second_begin() {
        let mut lifecycle = Lifecycle::default();
        assert!(lifecycle.handle(&LifecycleEvent::Begin { needs_approval: false }));
        assert!(!lifecycle.handle(&LifecycleEvent::Begin { needs_approval: false }));
        assert_eq!(lifecycle.state(), &TxState::Pending);
        assert_eq!(lifecycle.history(), &[TxState::Idle, TxState::Pending]);
    }

    #[test]
    fn test_surfaces_are_independent() {
        let mut lifecycles = Lifecycles::default();
        lifecycles
            .get_mut(Surface::Swap)
            .handle(&LifecycleEvent::Begin { needs_approval: false });
        assert_eq!(lifecycles.state(Surface::Swap), &TxState::Pending);
        for surface in [Surface::MintRedeem, Surface::Boost, Surface::Arbitrage] {
            assert!(lifecycles.state(surface).is_idle());
        }
    }
}
