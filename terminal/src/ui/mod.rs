//! # GUI Rendering Framework
//!
//! This module orchestrates the UI rendering pipeline using **egui widgets**:
//! a top navigation panel and the current screen in the central panel.

pub mod chart;
pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;
use crate::app::{App, Screen};

/// Repaint interval while a query is in flight, so results show without input
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => {
            // Lock is held by another task, skip this frame
            ctx.request_repaint();
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    // Tab / Shift+Tab cycle screens
    let (tab, shift) = ctx.input(|i| (i.key_pressed(egui::Key::Tab), i.modifiers.shift));
    if tab && !ctx.wants_keyboard_input() {
        if shift {
            app.previous_screen();
        } else {
            app.next_screen();
        }
    }

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::Overview => screens::overview::render(ui, &state, app),
        Screen::Chains => screens::chains::render(ui, &state, app),
    });

    if state.is_busy() {
        ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();
        render(ctx, self);
    }
}
