//! # Chart Module
//!
//! Historical TVL line chart using egui_plot.

use egui;
use egui_plot::{Line, Plot, PlotPoints};
use shared::dto::llama::HistoricalTvlPoint;
use shared::utils::format_billions;

use crate::ui::theme::Theme;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Plot coordinates: x in days since the Unix epoch, y in billions of USD
pub fn tvl_plot_points(points: &[HistoricalTvlPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [p.date as f64 / SECONDS_PER_DAY, p.tvl / 1e9])
        .collect()
}

/// Render the aggregate TVL history
pub fn render_tvl_chart(ui: &mut egui::Ui, points: &[HistoricalTvlPoint], theme: &Theme) {
    if points.is_empty() {
        ui.colored_label(theme.dim, "No chart data available");
        return;
    }

    tracing::trace!(point_count = points.len(), "Rendering TVL chart");

    Plot::new("historical_tvl_chart")
        .view_aspect(3.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .y_axis_label("TVL ($B)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Total TVL", PlotPoints::from(tvl_plot_points(points)))
                    .color(theme.info)
                    .width(2.0),
            );
        });

    // Date range and latest value
    let first = points.first().and_then(HistoricalTvlPoint::date_time);
    let last = points.last();
    ui.horizontal(|ui| {
        if let (Some(first), Some(last_point)) = (first, last) {
            let last_date = last_point
                .date_time()
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "?".to_string());
            ui.colored_label(
                theme.dim,
                format!("{} → {}", first.format("%Y-%m-%d"), last_date),
            );
            ui.separator();
            ui.label(format!("Latest: {}", format_billions(last_point.tvl)));
        }
    });
}
