//! Protocol statistics panel.

use crate::app::AppState;
use crate::ui::format;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::render_row;
use crate::ui::widgets::layouts::render_panel;
use egui;

pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let snapshot = &state.snapshot;
    let info = snapshot.info.as_ref();

    render_panel(ui, Some("xTIME"), |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format::usd_price(snapshot.token_usd))
                    .size(26.0)
                    .color(theme.selected),
            );
            ui.colored_label(theme.dim, "per xTIME");
        });
        ui.add_space(6.0);

        render_row(ui, "Price", format::token_with_symbol(snapshot.price, 6, "TIME"), theme);
        render_row(ui, "TIME price", format::usd_price(snapshot.backing_usd), theme);
        render_row(ui, "Holders", format::count(info.map(|i| i.users)), theme);
        render_row(ui, "Transactions", format::count(info.map(|i| i.txs)), theme);
        render_row(
            ui,
            "xTIME supply",
            format::token(info.map(|i| i.supply), 2),
            theme,
        );
        render_row(
            ui,
            "TIME backing",
            format::token(info.map(|i| i.underlying_supply), 2),
            theme,
        );
        render_row(
            ui,
            "Backing value",
            format::usd(info.map(|i| i.underlying_supply), snapshot.backing_usd),
            theme,
        );
        render_row(
            ui,
            "Mint / sell fee",
            format!(
                "{} / {}",
                format::percent(snapshot.fees.mint_fee_pct),
                format::percent(snapshot.fees.sell_fee_pct)
            ),
            theme,
        );

        if let Some(account) = &snapshot.account {
            ui.separator();
            render_row(
                ui,
                "Your xTIME",
                format::token(account.token_balance, 4),
                theme,
            );
            render_row(
                ui,
                "Holdings value",
                format::token_with_symbol(account.holdings_value, 4, "TIME"),
                theme,
            );
            render_row(
                ui,
                "Holdings (USD)",
                format::usd(account.holdings_value, snapshot.backing_usd),
                theme,
            );
        }
    });
}
