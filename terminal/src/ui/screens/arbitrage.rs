//! Arbitrage helper panel: best move and the Fing/Fong entry points.

use crate::app::{App, AppState, Surface};
use crate::ui::format;
use crate::ui::screens::trade_card::render_progress;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_amount_input, render_row};
use crate::ui::widgets::layouts::render_panel;
use egui;
use lib_evm::ArbitrageSide;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let snapshot = &state.snapshot;
    let native = &state.config.native_symbol;
    let suggested = snapshot.best_move.as_ref().and_then(|m| m.side());

    render_panel(ui, Some("Arbitrage"), |ui| {
        match &snapshot.best_move {
            Some(best) => {
                ui.label(egui::RichText::new(&best.title).strong().color(theme.selected));
                ui.label(&best.description);
                ui.colored_label(theme.dim, format!("Function: {}", best.function_id));
            }
            None => {
                ui.colored_label(theme.dim, shared::utils::PLACEHOLDER);
            }
        }

        if snapshot.is_paused() {
            ui.colored_label(theme.warning, "Arbitrage is paused");
        }

        ui.add_space(6.0);
        let native_balance = snapshot.account.as_ref().and_then(|a| a.native_balance);
        render_row(ui, "Balance", format::token_with_symbol(native_balance, 4, native), theme);

        let idle = state.tx_state(Surface::Arbitrage).is_idle();
        let (edited, max_clicked) = render_amount_input(ui, &state.arbitrage_amount, native, idle);
        if let Some(text) = edited {
            app.handle_arbitrage_amount_change(&text);
        }
        if max_clicked {
            app.handle_arbitrage_max_click();
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if !state.wallet.is_connected() {
                if ui.button("Connect Wallet").clicked() {
                    app.handle_wallet_connect_click();
                }
                return;
            }
            let enabled = state.arbitrage_enabled();
            for side in [ArbitrageSide::Fing, ArbitrageSide::Fong] {
                let mut text = egui::RichText::new(side.function_name());
                if suggested == Some(side) {
                    text = text.strong().color(theme.success);
                }
                if ui.add_enabled(enabled, egui::Button::new(text)).clicked() {
                    app.handle_arbitrage_click(side);
                }
            }
        });

        render_progress(ui, state, app, Surface::Arbitrage, theme);
    });
}
