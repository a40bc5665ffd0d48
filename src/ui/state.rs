//! Application state structures.
//!
//! The labeling session itself lives in [`Session`]; this module wraps it with
//! the transient UI bookkeeping and the preferences that survive restarts.

use crate::types::*;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Storage key of the persisted UI preferences.
pub const APP_STATE_KEY: &str = "app_state";

/// Transient per-frame interaction bookkeeping.
#[derive(Default)]
pub struct InteractionState {
    /// Request keyboard focus for the label input on the next frame
    pub focus_label_input: bool,
    /// Label currently under the pointer on the map surface
    pub hovered_label: Option<LabelId>,
}

/// The main application structure.
///
/// Implements `eframe::App`. Only UI preferences are serialized; the session
/// with all maps and labels is rebuilt fresh on every start.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct GeoMapsApp {
    /// Sections, maps, labels and the pending click
    #[serde(skip)]
    pub session: Session,
    /// UI interaction state
    #[serde(skip)]
    pub interaction: InteractionState,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl Default for GeoMapsApp {
    fn default() -> Self {
        Self {
            session: Session::new(),
            interaction: InteractionState::default(),
            dark_mode: false,
        }
    }
}

impl GeoMapsApp {
    /// Creates the app, restoring UI preferences from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(APP_STATE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("Discarding unreadable preferences: {err}");
                    None
                }
            });
        let mut app = restored.unwrap_or_default();
        app.reset_non_ui_fields();
        app
    }

    /// Serializes the persisted preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes persisted preferences from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resets everything except UI preferences to a fresh session.
    pub fn reset_non_ui_fields(&mut self) {
        *self = Self {
            dark_mode: self.dark_mode,
            ..Default::default()
        };
    }

    /// Visuals matching the current theme preference.
    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}
