//! # GeoMaps
//!
//! An educational tool for learning geography by labeling schematic contour
//! maps. Pick one of the built-in maps (world, Europe, Russia), click a point,
//! type a name, and the label is drawn at that spot. Click a label to remove it.
//!
//! ## Features
//! - Home, Maps and About sections with a shared navigation header
//! - Click-to-label with a pending marker and confirm/cancel input row
//! - Resolution-independent label placement (percent coordinates)
//! - Label summary badges that double as removal buttons
//!
//! Labels live only for the current session.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod artwork;
mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use types::*;
pub use ui::GeoMapsApp;

use eframe::egui;

/// Runs the application in a native window.
///
/// # Returns
///
/// Returns `Ok(())` when the window closes normally, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use geomaps::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("GeoMaps")
            .with_inner_size(constants::INITIAL_WINDOW_SIZE),
        ..Default::default()
    };
    log::info!("Starting GeoMaps");
    eframe::run_native(
        "GeoMaps",
        options,
        Box::new(|cc| Ok(Box::new(GeoMapsApp::new(cc)))),
    )
}

/// Mounts the application onto the `<canvas>` element with the given ID.
///
/// Failures are logged; the page keeps running without the app.
#[cfg(target_arch = "wasm32")]
pub fn start_web(canvas_id: &str) {
    use eframe::wasm_bindgen::JsCast;

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        log::error!("No canvas element with id '{}'", canvas_id);
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(GeoMapsApp::new(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("Failed to start GeoMaps: {:?}", err);
        }
    });
}
