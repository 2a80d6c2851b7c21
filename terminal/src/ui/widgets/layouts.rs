//! # Layout Components
//!
//! Reusable layout patterns for consistent screen organization

use egui;

/// Render a two-column split layout
///
/// `shared` is handed to both columns in turn, so both sides can dispatch
/// into the same mutable target.
pub fn render_split_layout<T, F1, F2>(ui: &mut egui::Ui, shared: &mut T, left_content: F1, right_content: F2)
where
    T: ?Sized,
    F1: FnOnce(&mut egui::Ui, &mut T),
    F2: FnOnce(&mut egui::Ui, &mut T),
{
    ui.columns(2, |columns| {
        left_content(&mut columns[0], &mut *shared);
        right_content(&mut columns[1], &mut *shared);
    });
}

/// Render a grouped panel with optional heading
pub fn render_panel<F>(ui: &mut egui::Ui, heading: Option<&str>, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        if let Some(heading_text) = heading {
            ui.heading(heading_text);
            ui.add_space(8.0);
        }
        content(ui);
    });
}
