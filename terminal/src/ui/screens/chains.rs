//! # Chains Screen
//!
//! Every chain with its TVL, daily change and protocol count. A search box
//! filters by name and three buttons pick the sort order.

use egui;
use egui_extras::{Column, TableBuilder};
use shared::dto::llama::Chain;
use shared::utils::{format_billions, format_number};

use crate::app::{App, AppState};
use crate::pipeline::{self, SortKey, TvlChange};
use crate::ui::theme::Theme;
use crate::ui::widgets::query_status::{self, QueryView};
use crate::ui::widgets::tables;

/// Render chains screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("Chains");
    ui.add_space(10.0);

    render_controls(ui, state, app, &theme);
    ui.add_space(8.0);

    match QueryView::of(&state.chains) {
        QueryView::Loading | QueryView::Idle => {
            query_status::render_loading(ui, "Loading chains...", &theme);
            return;
        }
        QueryView::Failed => {
            let message = state.chains.error.as_deref().unwrap_or("unknown error");
            if query_status::render_error(ui, message, &theme) {
                app.refresh_chains();
            }
            return;
        }
        QueryView::Ready => {}
    }

    if let Some(error) = &state.chains.error {
        if query_status::render_error(ui, error, &theme) {
            app.refresh_chains();
        }
    }

    let view = pipeline::derive(
        state.chain_records(),
        &state.chain_list.search,
        state.chain_list.sort,
    );

    tables::render_stats_summary(
        ui,
        &[
            ("Chains", state.chain_records().map_or(0, <[Chain]>::len)),
            ("Shown", view.len()),
        ],
        &theme,
    );
    ui.add_space(4.0);

    if view.is_empty() {
        tables::render_empty_state(
            ui,
            "No chains match your search",
            Some("Try a shorter or different name"),
            &theme,
        );
        return;
    }

    render_table(ui, &view, state.chain_list.selected.as_deref(), app, &theme);
}

fn render_controls(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let mut search = state.chain_list.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Chain name")
                .desired_width(220.0),
        );
        if response.changed() {
            app.handle_search_change(search);
        }

        ui.add_space(16.0);
        ui.colored_label(theme.dim, "Sort by:");
        for &key in SortKey::all() {
            let active = state.chain_list.sort == key;
            if ui.selectable_label(active, key.label()).clicked() && !active {
                app.handle_sort_change(key);
            }
        }
    });
}

fn render_table(
    ui: &mut egui::Ui,
    view: &[Chain],
    selected: Option<&str>,
    app: &mut App,
    theme: &Theme,
) {
    // Row actions are collected and applied after the table borrows end
    let mut clicked: Option<String> = None;
    let mut open_page: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(40.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto())
        .header(tables::HEADER_HEIGHT, |mut header| {
            for title in ["#", "Chain", "TVL", "24h", "Protocols", ""] {
                header.col(|ui| tables::render_header_cell(ui, title, theme));
            }
        })
        .body(|body| {
            body.rows(tables::ROW_HEIGHT, view.len(), |mut row| {
                let idx = row.index();
                let chain = &view[idx];
                let is_selected = selected == Some(chain.key());
                let change = TvlChange::for_chain(chain);

                row.col(|ui| {
                    ui.colored_label(theme.dim, format!("{}", idx + 1));
                });
                row.col(|ui| {
                    if ui.selectable_label(is_selected, &chain.name).clicked() {
                        clicked = Some(chain.key().to_string());
                    }
                });
                row.col(|ui| {
                    ui.label(format_billions(chain.tvl_or_zero()));
                });
                row.col(|ui| {
                    let (text, color) = theme.format_tvl_change(&change);
                    ui.colored_label(color, text);
                });
                row.col(|ui| {
                    ui.label(format_number(f64::from(chain.protocol_count()), 0));
                });
                row.col(|ui| {
                    if ui.small_button("DefiLlama").clicked() {
                        open_page = Some(chain.name.clone());
                    }
                });
            });
        });

    if let Some(key) = clicked {
        app.handle_chain_select(key);
    }
    if let Some(name) = open_page {
        app.handle_open_chain_page(&name);
    }
}
