//! # GUI Theme
//!
//! Dark terminal theme for egui: black panels, white text, sharp edges and a
//! single accent color.

use crate::app::TxState;
use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Pure black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Primary accent (buttons, headings)
    pub accent: Color32,
    /// Dark accent for pressed widgets
    pub accent_dark: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub yellow_warning: Color32,
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(0, 0, 0),           // #000000
            text: Color32::from_rgb(255, 255, 255),           // #FFFFFF
            accent: Color32::from_rgb(0, 170, 255),           // #00AAFF
            accent_dark: Color32::from_rgb(0, 85, 128),       // #005580
            border_dark: Color32::from_rgb(51, 51, 51),       // #333333
            green_success: Color32::from_rgb(0, 220, 90),     // #00DC5A
            red_error: Color32::from_rgb(255, 60, 60),        // #FF3C3C
            yellow_warning: Color32::from_rgb(255, 170, 0),   // #FFAA00
            blue_info: Color32::from_rgb(100, 150, 255),      // #6496FF
            gray_inactive: Color32::from_rgb(26, 26, 26),     // #1A1A1A
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Headings and highlighted values
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            colors,
        }
    }
}

impl Theme {
    /// Color of a lifecycle state badge
    pub fn tx_state_color(&self, state: &TxState) -> Color32 {
        match state {
            TxState::Idle => self.dim,
            TxState::Approving | TxState::Pending => self.warning,
            TxState::Success => self.success,
            TxState::Error { .. } => self.error,
        }
    }

    /// egui visuals for the palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 30, 30);

        visuals.widgets.hovered.bg_fill = colors.accent_dark;
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.hovered.weak_bg_fill = colors.accent_dark;

        visuals.widgets.active.bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.active.weak_bg_fill = colors.accent_dark;

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0, 170, 255, 76);
        visuals.selection.stroke = Stroke::new(2.0, colors.accent);
        visuals.hyperlink_color = colors.blue_info;

        visuals
    }

    /// Apply the theme to an egui context
    ///
    /// Uses `style_mut_of` which is the safe way to modify styles in egui 0.33.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.window_margin = egui::Margin::same(6);
            });
        }
        tracing::debug!("Applied terminal theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_state_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tx_state_color(&TxState::Idle), theme.dim);
        assert_eq!(theme.tx_state_color(&TxState::Pending), theme.warning);
        assert_eq!(theme.tx_state_color(&TxState::Approving), theme.warning);
        assert_eq!(theme.tx_state_color(&TxState::Success), theme.success);
        assert_eq!(
            theme.tx_state_color(&TxState::Error { message: "x".to_string() }),
            theme.error
        );
    }
}
