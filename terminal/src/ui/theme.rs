//! # GUI Theme
//!
//! Terminal-style dark theme with red, white, and black colors for egui.
//! High contrast, sharp edges, green/red for TVL gains and losses.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::pipeline::TvlChange;

/// Terminal color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Pure black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Primary red accent
    pub red_primary: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Success green (gains)
    pub green_success: Color32,
    /// Error red (losses)
    pub red_error: Color32,
    /// Warning yellow/orange
    pub yellow_warning: Color32,
    /// Info blue
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
            red_primary: Color32::from_rgb(204, 0, 0),        // #CC0000
            border_dark: Color32::from_rgb(51, 51, 51),       // #333333
            green_success: Color32::from_rgb(0, 255, 0),      // #00FF00
            red_error: Color32::from_rgb(255, 0, 0),          // #FF0000
            yellow_warning: Color32::from_rgb(255, 170, 0),   // #FFAA00
            blue_info: Color32::from_rgb(100, 150, 255),      // #6496FF
            gray_inactive: Color32::from_rgb(26, 26, 26),     // #1A1A1A
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Error text and retry prompts
    pub error: Color32,
    /// Warning/attention (yellow)
    pub warning: Color32,
    /// Information (blue), chart line
    pub info: Color32,
    /// TVL up (green)
    pub tvl_up: Color32,
    /// TVL down or unknown (red)
    pub tvl_down: Color32,
    /// Background color
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.red_primary,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            tvl_up: colors.green_success,
            tvl_down: colors.red_error,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Arrow and color for a TVL change, e.g. `("▲ 20.00%", green)`
    pub fn format_tvl_change(&self, change: &TvlChange) -> (String, Color32) {
        if change.is_up() {
            (format!("▲ {}", change.text()), self.tvl_up)
        } else {
            (format!("▼ {}", change.text()), self.tvl_down)
        }
    }

    /// Terminal-style egui Visuals
    pub fn terminal_visuals() -> Visuals {
        let colors = Palette::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = Color32::from_rgb(10, 10, 10);
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

        // Hovered widgets - red highlight
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 0);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 0, 0);

        visuals.widgets.active.bg_fill = Color32::from_rgb(102, 0, 0);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(76, 0, 0);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(204, 0, 0, 76); // 30% opacity red
        visuals.selection.stroke = Stroke::new(2.0, colors.red_primary);

        visuals.hyperlink_color = colors.blue_info;

        visuals
    }

    /// Apply the terminal theme to an egui context.
    ///
    /// Uses `style_mut_of` for both dark and light so a system theme switch
    /// keeps the same look.
    pub fn apply(ctx: &Context) {
        let visuals = Self::terminal_visuals();

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
                style.spacing.window_margin = egui::Margin::same(4);
            });
        }

        tracing::debug!("Applied terminal theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tvl_change;

    #[test]
    fn test_format_tvl_change() {
        let theme = Theme::default();

        let (text, color) = theme.format_tvl_change(&tvl_change(Some(120.0), Some(100.0)));
        assert_eq!(text, "▲ 20.00%");
        assert_eq!(color, theme.tvl_up);

        let (text, color) = theme.format_tvl_change(&tvl_change(Some(120.0), None));
        assert_eq!(text, "▼ 0.00%");
        assert_eq!(color, theme.tvl_down);
    }
}
