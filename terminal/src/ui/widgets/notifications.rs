//! # Notifications Widget
//!
//! Toast notification system using egui-notify for transaction progress and errors.

use crate::app::NotificationLevel;
use egui_notify::Toasts;
use std::time::Duration;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification queued by the app state
    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Success => self.success(message),
            NotificationLevel::Error => self.error(message),
            NotificationLevel::Warning => self.warning(message),
            NotificationLevel::Info => self.info(message),
        }
    }

    /// Show a success notification (confirmed transactions)
    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(Duration::from_secs(5)));
    }

    /// Show an error notification (failed or rejected transactions)
    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Some(Duration::from_secs(8)));
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
