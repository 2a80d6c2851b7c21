//! # Header Widget
//!
//! Top bar: title, network, refresh and wallet connection.

use crate::app::{App, AppState};
use crate::services::wallet::WalletStatus;
use crate::ui::theme::Theme;
use egui;
use shared::utils::truncate_address;

/// Render the header bar
pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("xTIME").strong().size(20.0).color(theme.selected));
        ui.colored_label(theme.dim, "Terminal");

        ui.separator();
        ui.label(&state.config.chain_name);

        if ui
            .add_enabled(!state.fetching_snapshot, egui::Button::new("Refresh"))
            .on_hover_text("Reload contract readings")
            .clicked()
        {
            app.handle_refresh_click();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &state.wallet {
                WalletStatus::Connected(address) => {
                    if ui.button("Disconnect").clicked() {
                        app.handle_wallet_disconnect_click();
                    }
                    ui.colored_label(theme.success, truncate_address(&address.to_string()));
                }
                WalletStatus::Disconnected => {
                    if ui.button("Connect Wallet").clicked() {
                        app.handle_wallet_connect_click();
                    }
                    ui.colored_label(theme.dim, "Read-only");
                }
                WalletStatus::Error(message) => {
                    if ui.button("Connect Wallet").clicked() {
                        app.handle_wallet_connect_click();
                    }
                    ui.colored_label(theme.error, "Wallet error").on_hover_text(message);
                }
            }
        });
    });
}
