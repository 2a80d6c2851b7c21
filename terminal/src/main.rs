//! xTIME Terminal - native desktop entry point.

use anyhow::Context;
use lib_core::Config;
use terminal::app::App;
use terminal::ui::TerminalWindow;
use terminal::{debug, utils};

const APP_NAME: &str = "xTIME Terminal";

fn main() -> anyhow::Result<()> {
    debug::init();
    tracing::info!(debug_mode = debug::is_debug_mode(), "Starting {}", APP_NAME);

    let config = Config::load().context("invalid configuration")?;
    tracing::info!(
        rpc_url = %config.rpc_url,
        chain_id = config.chain_id,
        signer = config.private_key.is_some(),
        "Configuration loaded"
    );

    // Handlers spawn onto this runtime from the UI thread
    let runtime = utils::runtime::build_runtime().context("failed to build tokio runtime")?;
    let _guard = runtime.enter();

    let app = App::new(config).context("failed to create RPC client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(TerminalWindow::new(cc, app)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("Window closed, shutting down");
    Ok(())
}
