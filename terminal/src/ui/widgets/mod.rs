//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod forms;
pub mod header;
pub mod layouts;
pub mod notifications;
pub mod status_bar;
