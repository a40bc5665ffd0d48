//! User interface components for GeoMaps.
//!
//! This module contains the main application struct, the section views, and
//! the map surface with its click-to-label interaction.
//!
//! # Module Organization
//!
//! - `state` - The application struct and persisted preferences
//! - `sections` - Header, footer, and the Home/Maps/About views
//! - `canvas` - Map surface coordinates, hit-testing, and click handling
//! - `rendering` - Drawing artwork, labels, and the pending marker

mod canvas;
mod rendering;
mod sections;
mod state;

pub use state::GeoMapsApp;

use self::state::APP_STATE_KEY;
use crate::constants::CONTENT_MAX_WIDTH;
use crate::types::*;
use eframe::egui;

impl eframe::App for GeoMapsApp {
    /// Persist UI preferences between restarts. Labels are never stored.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(APP_STATE_KEY, json);
            }
            Err(err) => {
                log::error!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl GeoMapsApp {
    /// Lays out the whole application for one frame.
    ///
    /// Split from `update` so it can be driven headless without an `eframe::Frame`.
    pub fn show(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());

        self.handle_escape_key(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_header(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_footer(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Center a fixed-width content column
                    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            ui.add_space(16.0);
                            match self.session.section {
                                Section::Home => self.draw_home(ui),
                                Section::Maps => self.draw_maps(ui),
                                Section::About => self.draw_about(ui),
                            }
                            ui.add_space(32.0);
                        });
                    });
                });
        });
    }

    /// Escape abandons the pending click.
    fn handle_escape_key(&mut self, ctx: &egui::Context) {
        if self.session.pending.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.session.cancel_pending();
        }
    }
}
