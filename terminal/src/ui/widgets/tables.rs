//! # Table Components
//!
//! Shared header styling and empty states for list views

use egui;
use crate::ui::theme::Theme;

/// Row height used by list tables
pub const ROW_HEIGHT: f32 = 26.0;

/// Header row height
pub const HEADER_HEIGHT: f32 = 22.0;

/// Render a column header cell
pub fn render_header_cell(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.colored_label(theme.selected, egui::RichText::new(text).strong());
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Render stats summary (e.g., "Chains: X  |  Shown: Y")
pub fn render_stats_summary(ui: &mut egui::Ui, stats: &[(&str, usize)], theme: &Theme) {
    let parts: Vec<String> = stats
        .iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect();
    ui.colored_label(theme.dim, parts.join("  |  "));
}
