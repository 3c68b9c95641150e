pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod notification;
pub mod palette;
pub mod render;

pub use app::DrawingApp;
pub use error::{AppError, AppResult};

/// Entrypoint used by the desktop binary.
#[cfg(feature = "gui")]
pub fn run() -> gtk4::glib::ExitCode {
    logging::init();
    tracing::info!("starting Dotpad");

    let config = config::load_app_config();
    app::run_window(config)
}
