//! Mint/Redeem and Buy/Sell cards.

use crate::app::{App, AppState, Direction, FormState, Surface, TxState};
use crate::ui::format;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{render_amount_input, render_row, render_steps, render_submit_button};
use crate::ui::widgets::layouts::render_panel;
use egui;

/// Render the card of `surface` (only the two trading surfaces have one).
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, surface: Surface, theme: &Theme) {
    let Some(form) = state.form(surface) else {
        return;
    };
    let heading = match surface {
        Surface::MintRedeem => "Mint / Redeem",
        _ => "Buy / Sell",
    };
    let idle = state.tx_state(surface).is_idle();

    render_panel(ui, Some(heading), |ui| {
        render_direction_tabs(ui, app, surface, form.direction, idle);
        ui.add_space(6.0);

        render_row(
            ui,
            "Balance",
            format::token_with_symbol(state.input_balance(form.direction), 4, form.direction.input_symbol()),
            theme,
        );

        let (edited, max_clicked) =
            render_amount_input(ui, &form.amount, form.direction.input_symbol(), idle);
        if let Some(text) = edited {
            app.handle_amount_change(surface, &text);
        }
        if max_clicked {
            app.handle_max_click(surface);
        }

        ui.add_space(4.0);
        render_quote(ui, form, theme);

        if surface == Surface::MintRedeem {
            render_row(ui, "Fee", format::percent(form.quote.fee_pct), theme);
        } else {
            render_dex_price(ui, state, theme);
        }

        ui.add_space(8.0);
        let button = state.submit_button(surface);
        if render_submit_button(ui, &button, theme) {
            if button.connects_wallet {
                app.handle_wallet_connect_click();
            } else {
                app.handle_submit_click(surface);
            }
        }

        render_progress(ui, state, app, surface, theme);
    });
}

fn render_direction_tabs(ui: &mut egui::Ui, app: &mut App, surface: Surface, current: Direction, enabled: bool) {
    ui.horizontal(|ui| {
        for direction in [current, current.flip()] {
            let selected = direction == current;
            let label = match direction {
                Direction::Mint => "Mint",
                Direction::Redeem => "Redeem",
                Direction::Buy => "Buy",
                Direction::Sell => "Sell",
            };
            let clicked = ui
                .add_enabled(enabled, egui::Button::selectable(selected, label))
                .clicked();
            if clicked && !selected {
                app.handle_flip_click(surface);
            }
        }
    });
}

fn render_quote(ui: &mut egui::Ui, form: &FormState, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "You receive");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if form.quote_loading || form.quote_requested_at.is_some() {
                ui.spinner();
            } else {
                ui.label(format::token_with_symbol(
                    Some(form.quote.amount_out),
                    6,
                    form.direction.output_symbol(),
                ));
            }
        });
    });
}

fn render_dex_price(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let native = &state.config.native_symbol;
    render_row(
        ui,
        "1 xTIME",
        format::token_with_symbol(state.snapshot.token_in_native, 4, native),
        theme,
    );
    render_row(
        ui,
        &format!("1 {native}"),
        format::token_with_symbol(state.snapshot.native_in_token, 6, "xTIME"),
        theme,
    );
}

/// Step indicator, message and explorer link of the current transaction.
pub(crate) fn render_progress(ui: &mut egui::Ui, state: &AppState, app: &mut App, surface: Surface, theme: &Theme) {
    let lifecycle = state.lifecycles.get(surface);
    let with_approval = lifecycle.history().contains(&TxState::Approving);
    render_steps(ui, lifecycle.state(), with_approval, theme);

    if !lifecycle.state().is_idle() && !lifecycle.description.is_empty() {
        ui.colored_label(theme.dim, &lifecycle.description);
    }
    if lifecycle.last_tx.is_some() && ui.link("View transaction").clicked() {
        app.handle_tx_link_click(surface);
    }
}
