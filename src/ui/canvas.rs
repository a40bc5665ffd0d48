//! Map surface interaction.
//!
//! This module converts pointer clicks on the map surface into either a label
//! removal (when a label is hit) or a staged pending click, and maps between
//! the screen, the 800×500 viewBox, and normalized percent coordinates.

use super::state::GeoMapsApp;
use crate::constants::*;
use crate::types::*;
use eframe::egui;
use std::sync::Arc;

/// Screen placement of the map surface for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct MapSurface {
    /// Screen-space rectangle covered by the 800×500 viewBox
    pub rect: egui::Rect,
}

impl MapSurface {
    /// Wraps the rectangle allocated for the surface.
    pub fn new(rect: egui::Rect) -> Self {
        Self { rect }
    }

    /// Screen pixels per viewBox unit.
    pub fn scale(&self) -> f32 {
        self.rect.width() / VIEWBOX_WIDTH
    }

    /// Converts a viewBox position to screen space.
    pub fn viewbox_to_screen(&self, pos: egui::Pos2) -> egui::Pos2 {
        self.rect.min + pos.to_vec2() * self.scale()
    }

    /// Converts normalized percentages to screen space.
    pub fn percent_to_screen(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + x / PERCENT_MAX * self.rect.width(),
            self.rect.min.y + y / PERCENT_MAX * self.rect.height(),
        )
    }

    /// Converts a screen position to normalized percentages, clamped to the surface.
    pub fn screen_to_percent(&self, pos: egui::Pos2) -> Option<(f32, f32)> {
        normalize_click(
            (pos.x, pos.y),
            (self.rect.min.x, self.rect.min.y),
            (self.rect.width(), self.rect.height()),
        )
    }
}

/// Where a label is drawn this frame, used for both painting and hit-testing.
pub struct LabelGeometry {
    /// Label this geometry belongs to
    pub id: LabelId,
    /// Marker center in screen space
    pub center: egui::Pos2,
    /// Marker radius in screen space
    pub radius: f32,
    /// Laid-out label text
    pub galley: Arc<egui::Galley>,
    /// Screen rectangle of the text
    pub text_rect: egui::Rect,
}

impl LabelGeometry {
    /// Whether a screen position hits the marker (with slop) or the text.
    pub fn contains(&self, pos: egui::Pos2, hit_slop: f32) -> bool {
        self.center.distance(pos) <= self.radius + hit_slop || self.text_rect.contains(pos)
    }
}

/// Lays out every label of a map on the surface, in draw order.
pub fn layout_labels(
    painter: &egui::Painter,
    surface: &MapSurface,
    labels: &[Label],
    text_color: egui::Color32,
) -> Vec<LabelGeometry> {
    let scale = surface.scale();
    let font = egui::FontId::proportional(LABEL_FONT_SIZE * scale);
    labels
        .iter()
        .map(|label| {
            let center = surface.percent_to_screen(label.x, label.y);
            let galley = painter.layout_no_wrap(label.text.clone(), font.clone(), text_color);
            // The offset points at the text baseline; leave room for descenders below it.
            let baseline = center
                + egui::vec2(LABEL_TEXT_OFFSET_X * scale, LABEL_TEXT_OFFSET_Y * scale);
            let bottom_left = baseline + egui::vec2(0.0, LABEL_FONT_SIZE * scale * 0.25);
            let text_rect = egui::Align2::LEFT_BOTTOM.anchor_size(bottom_left, galley.size());
            LabelGeometry {
                id: label.id,
                center,
                radius: LABEL_MARKER_RADIUS * scale,
                galley,
                text_rect,
            }
        })
        .collect()
}

/// Topmost label under a screen position. Later labels are drawn on top.
pub fn label_at(geometries: &[LabelGeometry], pos: egui::Pos2, hit_slop: f32) -> Option<LabelId> {
    geometries
        .iter()
        .rev()
        .find(|g| g.contains(pos, hit_slop))
        .map(|g| g.id)
}

impl GeoMapsApp {
    /// Draws the selected map and handles clicks on it.
    ///
    /// A click on a label removes it; a click anywhere else stages a pending
    /// click at the normalized position and focuses the label input.
    ///
    /// # Returns
    ///
    /// The surface response, or `None` if no map is selected.
    pub fn draw_map_surface(&mut self, ui: &mut egui::Ui) -> Option<egui::Response> {
        let map_id = self.session.selected_map.clone()?;

        let width = ui.available_width().min(CONTENT_MAX_WIDTH);
        let size = egui::vec2(width, width * VIEWBOX_HEIGHT / VIEWBOX_WIDTH);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let surface = MapSurface::new(response.rect);
        let text_color = label_text_color();
        let hit_slop = LABEL_HIT_SLOP * surface.scale();

        let mut geometries =
            layout_labels(&painter, &surface, self.session.atlas.labels(&map_id), text_color);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.handle_map_click(&map_id, &surface, &geometries, pos, hit_slop);
                geometries = layout_labels(
                    &painter,
                    &surface,
                    self.session.atlas.labels(&map_id),
                    text_color,
                );
            }
        }

        self.interaction.hovered_label = response
            .hover_pos()
            .and_then(|pos| label_at(&geometries, pos, hit_slop));
        if response.hovered() {
            let icon = if self.interaction.hovered_label.is_some() {
                egui::CursorIcon::PointingHand
            } else {
                egui::CursorIcon::Crosshair
            };
            ui.ctx().set_cursor_icon(icon);
        }

        self.render_map(&painter, &surface, &map_id, &geometries);
        Some(response)
    }

    fn handle_map_click(
        &mut self,
        map_id: &str,
        surface: &MapSurface,
        geometries: &[LabelGeometry],
        pos: egui::Pos2,
        hit_slop: f32,
    ) {
        if let Some(label_id) = label_at(geometries, pos, hit_slop) {
            self.session.remove_label(map_id, label_id);
            return;
        }
        if let Some((x, y)) = surface.screen_to_percent(pos) {
            self.session.stage_click(x, y);
            self.interaction.focus_label_input = true;
        }
    }
}

/// Label text color; the surface is always light, regardless of theme.
pub fn label_text_color() -> egui::Color32 {
    egui::Color32::from_rgb(0x1e, 0x29, 0x3b)
}
