//! # Navigation Bar
//!
//! Top bar with screen tabs, navigation arrows, the cluster badge and a
//! refresh button for the current screen.

use egui;
use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(32.0);

        // Navigation arrows at far left
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 0.0);
            if ui.button("<").on_hover_text("Previous screen (Shift+Tab)").clicked() {
                app.previous_screen();
            }
            if ui.button(">").on_hover_text("Next screen (Tab)").clicked() {
                app.next_screen();
            }
        });

        ui.add_space(10.0);
        ui.colored_label(theme.selected, egui::RichText::new("LLAMA").strong());
        ui.add_space(10.0);

        for &screen in Screen::all() {
            let is_current = state.current_screen == screen;
            if ui.selectable_label(is_current, screen.title()).clicked() && !is_current {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(10.0);

            let busy = state.is_busy();
            let refresh = ui.add_enabled(!busy, egui::Button::new("⟳ Refresh"));
            if refresh.clicked() {
                app.refresh_current_screen();
            }
            if busy {
                ui.spinner();
            }

            ui.separator();
            ui.colored_label(theme.dim, state.connection.badge());
        });
    });
}
