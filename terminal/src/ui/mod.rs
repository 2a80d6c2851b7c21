//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame rendering pipeline with **egui widgets**:
//! header and status bars, the statistics panel, both trading cards, the
//! locker panel and the arbitrage panel.

pub mod format;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Surface};
use egui;
use std::time::Duration;
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Repaint cadence so async results show up without user input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Native window hosting the [`App`].
pub struct TerminalWindow {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl TerminalWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let pending = std::mem::take(&mut self.app.state.write().pending_notifications);
        for (level, message) in pending {
            self.notifications.push(level, message);
        }

        render(ctx, &mut self.app, &self.theme);

        self.notifications.show(ctx);
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Render from a clone so no lock is held while handlers run
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => return,
    };

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        widgets::header::render_header(ui, &state, app, theme);
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        widgets::status_bar::render_status_bar(ui, &state, theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            widgets::layouts::render_split_layout(
                ui,
                app,
                |ui, app| {
                    screens::dashboard::render(ui, &state, theme);
                    ui.add_space(8.0);
                    screens::locker::render(ui, &state, app, theme);
                    ui.add_space(8.0);
                    screens::arbitrage::render(ui, &state, app, theme);
                },
                |ui, app| {
                    screens::trade_card::render(ui, &state, app, Surface::MintRedeem, theme);
                    ui.add_space(8.0);
                    screens::trade_card::render(ui, &state, app, Surface::Swap, theme);
                },
            );
        });
    });
}
