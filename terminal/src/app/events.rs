//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::app::lifecycle::{LifecycleEvent, Surface};
use crate::app::quote::{Direction, Quote};
use lib_evm::{Snapshot, TxHash};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Contract readings refreshed
    SnapshotUpdated(Box<Snapshot>),
    /// Quote computed for `input` traded in `direction`
    QuoteResult {
        surface: Surface,
        direction: Direction,
        input: String,
        quote: Quote,
    },
    /// A transaction was broadcast
    TxSubmitted {
        surface: Surface,
        tx_hash: TxHash,
        function: &'static str,
    },
    /// Lifecycle progress reported by the transaction driver
    Lifecycle {
        surface: Surface,
        event: LifecycleEvent,
    },
}
