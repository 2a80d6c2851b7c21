//! # Status Bar Widget
//!
//! Bottom status bar showing the latest block, refresh age and the
//! lifecycle state of every surface.

use crate::app::{AppState, Surface};
use crate::ui::theme::Theme;
use egui;
use lib_utils::time::format_time;

/// Render status bar at bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        let block = state
            .snapshot
            .block_number
            .map(|b| format!("#{b}"))
            .unwrap_or_else(|| shared::utils::PLACEHOLDER.to_string());
        ui.colored_label(theme.dim, "Block");
        ui.label(block);

        ui.separator();

        let last_update = match &state.last_refresh_at {
            Some(at) => format_time(*at),
            None => "never".to_string(),
        };
        ui.colored_label(theme.dim, "Updated");
        ui.label(last_update);
        if state.fetching_snapshot {
            ui.spinner();
        }

        ui.separator();

        for surface in Surface::ALL {
            let tx_state = state.tx_state(surface);
            ui.colored_label(theme.dim, surface.label());
            ui.colored_label(theme.tx_state_color(tx_state), tx_state.name());
            if tx_state.is_busy() {
                ui.spinner();
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(
                theme.dim,
                format!("{} ({})", state.config.chain_name, state.config.chain_id),
            );
        });
    });
}
