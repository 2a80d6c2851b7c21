//! # Form Components
//!
//! Amount inputs, labelled rows and the submit button shared by the cards.

use crate::app::{SubmitButton, TxState};
use crate::ui::theme::Theme;
use egui;

/// Amount text field with a Max button.
///
/// Returns `(edited_text, max_clicked)`; `edited_text` is `Some` only when
/// the user changed the field this frame.
pub fn render_amount_input(
    ui: &mut egui::Ui,
    value: &str,
    symbol: &str,
    enabled: bool,
) -> (Option<String>, bool) {
    let mut text = value.to_string();
    let mut max_clicked = false;

    let response = ui
        .horizontal(|ui| {
            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut text)
                    .hint_text("0.0")
                    .desired_width(180.0),
            );
            ui.label(symbol);
            if ui.add_enabled(enabled, egui::Button::new("Max")).clicked() {
                max_clicked = true;
            }
            response
        })
        .inner;

    let edited = response.changed().then_some(text);
    (edited, max_clicked)
}

/// Label on the left, value on the right.
pub fn render_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

/// Full-width primary button driven by [`SubmitButton`].
pub fn render_submit_button(ui: &mut egui::Ui, button: &SubmitButton, theme: &Theme) -> bool {
    let fill = if button.enabled {
        theme.colors.accent_dark
    } else {
        theme.colors.gray_inactive
    };
    let size = egui::vec2(ui.available_width(), 34.0);
    ui.add_enabled(
        button.enabled,
        egui::Button::new(egui::RichText::new(&button.label).strong())
            .fill(fill)
            .min_size(size),
    )
    .clicked()
}

/// Step indicator for a two-step approval flow: `Approve → Confirm`.
pub fn render_steps(ui: &mut egui::Ui, state: &TxState, with_approval: bool, theme: &Theme) {
    if state.is_idle() {
        return;
    }
    ui.horizontal(|ui| {
        if with_approval {
            let approve_color = match state {
                TxState::Approving => theme.warning,
                TxState::Error { .. } => theme.dim,
                _ => theme.success,
            };
            ui.colored_label(approve_color, "1. Approve");
            ui.colored_label(theme.dim, "→");
            ui.colored_label(theme.tx_state_color(state), format!("2. {}", step_label(state)));
        } else {
            ui.colored_label(theme.tx_state_color(state), step_label(state));
        }
    });
    if let TxState::Error { message } = state {
        ui.colored_label(theme.error, message);
    }
}

fn step_label(state: &TxState) -> &'static str {
    match state {
        TxState::Idle | TxState::Approving => "Confirm",
        TxState::Pending => "Confirming...",
        TxState::Success => "Confirmed",
        TxState::Error { .. } => "Failed",
    }
}
