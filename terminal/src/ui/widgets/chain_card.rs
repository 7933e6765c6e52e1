//! # Chain Card Widget
//!
//! Compact card for one chain: name, TVL and the day-over-day change.

use egui;
use shared::dto::llama::Chain;
use shared::utils::format_billions;

use crate::pipeline::TvlChange;
use crate::ui::theme::Theme;

/// Render a chain card with its rank
pub fn render_chain_card(ui: &mut egui::Ui, rank: usize, chain: &Chain, theme: &Theme) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, format!("#{}", rank));
            ui.label(egui::RichText::new(&chain.name).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (change_text, change_color) =
                    theme.format_tvl_change(&TvlChange::for_chain(chain));
                ui.colored_label(change_color, change_text);
                ui.label(format_billions(chain.tvl_or_zero()));
            });
        });
    });
}
