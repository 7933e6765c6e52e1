//! # Overview Screen
//!
//! Total value locked across all chains, the top chains by TVL and the
//! aggregate TVL history.

use egui;
use shared::utils::format_billions;

use crate::app::{App, AppState};
use crate::pipeline::{self, TOP_CHAINS};
use crate::ui::chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::chain_card;
use crate::ui::widgets::query_status::{self, QueryView};
use crate::ui::widgets::tables;

/// Render overview screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("DeFi Overview");
    ui.add_space(10.0);

    match QueryView::of(&state.chains) {
        QueryView::Loading | QueryView::Idle => {
            query_status::render_loading(ui, "Loading chains...", &theme);
            return;
        }
        QueryView::Failed => {
            let message = state.chains.error.as_deref().unwrap_or("unknown error");
            if query_status::render_error(ui, message, &theme) {
                app.refresh_overview();
            }
            return;
        }
        QueryView::Ready => {}
    }

    // A failed refresh keeps the previous data on screen
    if let Some(error) = &state.chains.error {
        if query_status::render_error(ui, error, &theme) {
            app.refresh_chains();
        }
    }

    let summary = pipeline::summarize(state.chain_records());

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_total_card(ui, summary.total_tvl, &theme);
        ui.add_space(10.0);

        ui.label(egui::RichText::new(format!("Top {} Chains", TOP_CHAINS)).strong());
        ui.add_space(4.0);
        if summary.top_chains.is_empty() {
            tables::render_empty_state(ui, "No chains", None, &theme);
        }
        for (idx, chain) in summary.top_chains.iter().enumerate() {
            chain_card::render_chain_card(ui, idx + 1, chain, &theme);
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Historical TVL").strong());
        ui.add_space(4.0);
        render_history(ui, state, app, &theme);

        ui.add_space(8.0);
        query_status::render_updated_at(ui, &state.chains, &theme);
    });
}

fn render_total_card(ui: &mut egui::Ui, total_tvl: f64, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.colored_label(theme.dim, "Total Value Locked");
            ui.label(egui::RichText::new(format_billions(total_tvl)).size(28.0).strong());
        });
    });
}

fn render_history(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    match QueryView::of(&state.historical_tvl) {
        QueryView::Loading | QueryView::Idle => {
            query_status::render_loading(ui, "Loading TVL history...", theme);
        }
        QueryView::Failed => {
            let message = state.historical_tvl.error.as_deref().unwrap_or("unknown error");
            if query_status::render_error(ui, message, theme) {
                app.refresh_overview();
            }
        }
        QueryView::Ready => {
            if let Some(points) = &state.historical_tvl.data {
                chart::render_tvl_chart(ui, points, theme);
            }
        }
    }
}
