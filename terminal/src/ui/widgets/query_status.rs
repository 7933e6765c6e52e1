//! # Query Status Widgets
//!
//! Spinner for a first load and the error banner with its retry button.

use egui;
use crate::app::QueryState;
use crate::ui::theme::Theme;

/// What a screen should draw for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryView {
    /// First load pending, nothing to show yet
    Loading,
    /// Failed with no data to fall back on
    Failed,
    /// Data available (possibly refetching or with a stale error)
    Ready,
    /// Not requested yet
    Idle,
}

impl QueryView {
    pub fn of<T>(query: &QueryState<T>) -> Self {
        match (&query.data, &query.error) {
            (Some(_), _) => QueryView::Ready,
            (None, _) if query.is_loading => QueryView::Loading,
            (None, Some(_)) => QueryView::Failed,
            (None, None) => QueryView::Idle,
        }
    }
}

/// Centered spinner with a caption
pub fn render_loading(ui: &mut egui::Ui, caption: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.colored_label(theme.dim, caption);
    });
}

/// Red error label with a retry button. Returns true when retry was clicked.
pub fn render_error(ui: &mut egui::Ui, message: &str, theme: &Theme) -> bool {
    let mut retry = false;
    ui.horizontal(|ui| {
        ui.colored_label(theme.error, format!("Error: {}", message));
        if ui.button("Retry").clicked() {
            retry = true;
        }
    });
    retry
}

/// "Updated HH:MM:SS" footer, with a refetch marker
pub fn render_updated_at<T>(ui: &mut egui::Ui, query: &QueryState<T>, theme: &Theme) {
    if let Some(updated_at) = query.updated_at {
        let mut text = format!("Updated {}", updated_at.format("%H:%M:%S"));
        if query.is_refetching {
            text.push_str(" · refreshing");
        }
        ui.colored_label(theme.dim, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_query_view() {
        let mut query: QueryState<Vec<u8>> = QueryState::default();
        assert_eq!(QueryView::of(&query), QueryView::Idle);

        query.begin_fetch();
        assert_eq!(QueryView::of(&query), QueryView::Loading);

        query.is_loading = false;
        query.error = Some("boom".to_string());
        assert_eq!(QueryView::of(&query), QueryView::Failed);

        query.data = Some(Arc::new(vec![1]));
        assert_eq!(QueryView::of(&query), QueryView::Ready);
    }
}
