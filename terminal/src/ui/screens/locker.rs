//! Liquidity locker panel.

use crate::app::{App, AppState, Surface};
use crate::ui::format;
use crate::ui::screens::trade_card::render_progress;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::render_row;
use crate::ui::widgets::layouts::render_panel;
use egui;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let snapshot = &state.snapshot;

    render_panel(ui, Some("Liquidity Locker"), |ui| {
        render_row(
            ui,
            &state.config.native_symbol,
            format::token(snapshot.locker_native, 4),
            theme,
        );
        render_row(ui, "xTIME", format::token(snapshot.locker_token, 4), theme);

        if !snapshot.locker_has_balance() {
            ui.colored_label(theme.dim, "Nothing to lock right now");
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if !state.wallet.is_connected() {
                if ui.button("Connect Wallet").clicked() {
                    app.handle_wallet_connect_click();
                }
            } else if ui
                .add_enabled(state.boost_enabled(), egui::Button::new("Boost"))
                .on_hover_text("Add the locker balances as locked liquidity")
                .clicked()
            {
                app.handle_boost_click();
            }

            if ui.link("View on explorer").clicked() {
                app.handle_locker_link_click();
            }
        });

        render_progress(ui, state, app, Surface::Boost, theme);
    });
}
