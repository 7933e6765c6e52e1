//! Llama Terminal binary: logging, configuration, runtime, then the egui window.

use terminal::app::App;
use terminal::core::config::AppConfig;
use terminal::ui::theme::Theme;
use terminal::utils::runtime::TOKIO_RT;

const APP_NAME: &str = "Llama Terminal";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = terminal::debug::init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    // tokio::spawn from the UI thread lands on the global runtime
    let _rt_guard = TOKIO_RT.enter();
    let app = App::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    tracing::info!("Starting {}", APP_NAME);
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    tracing::info!("{} exited", APP_NAME);
    Ok(())
}
