//! Tokio runtime used for all background work.
//!
//! egui owns the main thread; the runtime is entered there so handlers can
//! `tokio::spawn` directly.

use tokio::runtime::{Builder, Runtime};

pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("xtime-worker")
        .build()
}
