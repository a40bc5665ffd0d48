//! Map surface rendering.
//!
//! Elements are painted in layers: background, static artwork, placed labels,
//! then the pending-click marker on top.

use super::canvas::{LabelGeometry, MapSurface};
use super::state::GeoMapsApp;
use crate::artwork::{self, Shape, ShapeStyle};
use crate::constants::*;
use eframe::egui;
use eframe::epaint::StrokeKind;

const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xef, 0x44, 0x44);
const PENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(0xf9, 0x73, 0x16);
const SURFACE_BORDER: egui::Color32 = egui::Color32::from_rgb(0xe5, 0xe7, 0xeb);

impl GeoMapsApp {
    /// Renders one map: background, artwork, labels, and the pending marker.
    ///
    /// # Arguments
    ///
    /// * `painter` - Painter clipped to the surface
    /// * `surface` - Screen placement of the viewBox
    /// * `map_id` - Map whose artwork is drawn
    /// * `labels` - Label geometry laid out for this frame
    pub fn render_map(
        &self,
        painter: &egui::Painter,
        surface: &MapSurface,
        map_id: &str,
        labels: &[LabelGeometry],
    ) {
        painter.rect_filled(surface.rect, SURFACE_CORNER_RADIUS, artwork::OCEAN);

        for shape in artwork::artwork_for(map_id) {
            draw_shape(painter, surface, shape);
        }

        for geometry in labels {
            let hovered = self.interaction.hovered_label == Some(geometry.id);
            self.draw_label(painter, geometry, hovered);
        }

        if let Some(pending) = self.session.pending.as_ref().filter(|p| p.map_id == map_id) {
            let center = surface.percent_to_screen(pending.x, pending.y);
            let time = painter.ctx().input(|i| i.time);
            let phase = (time * PENDING_PULSE_HZ * std::f64::consts::TAU).sin() as f32;
            let alpha = 0.6 + 0.2 * phase;
            painter.circle_filled(
                center,
                PENDING_MARKER_RADIUS * surface.scale(),
                PENDING_COLOR.gamma_multiply(alpha),
            );
            // Keep animating while a click is pending
            painter.ctx().request_repaint();
        }

        painter.rect_stroke(
            surface.rect,
            SURFACE_CORNER_RADIUS,
            egui::Stroke::new(SURFACE_BORDER_WIDTH, SURFACE_BORDER),
            StrokeKind::Inside,
        );
    }

    /// Draws a label marker and its text. Hovered labels get a removal hint.
    fn draw_label(&self, painter: &egui::Painter, geometry: &LabelGeometry, hovered: bool) {
        let radius = if hovered {
            geometry.radius * 1.5
        } else {
            geometry.radius
        };
        painter.circle_filled(geometry.center, radius, MARKER_COLOR);
        if hovered {
            painter.rect_filled(
                geometry.text_rect.expand(2.0),
                3.0,
                egui::Color32::from_rgba_unmultiplied(0xef, 0x44, 0x44, 40),
            );
        }
        painter.galley(
            geometry.text_rect.min,
            geometry.galley.clone(),
            super::canvas::label_text_color(),
        );
    }
}

/// Paints one artwork primitive scaled onto the surface.
fn draw_shape(painter: &egui::Painter, surface: &MapSurface, shape: &Shape) {
    match *shape {
        Shape::Path { commands, style } => {
            for polygon in artwork::flatten_path(commands) {
                let points: Vec<egui::Pos2> = polygon
                    .into_iter()
                    .map(|p| surface.viewbox_to_screen(p))
                    .collect();
                fill_polygon(painter, &points, style.fill);
                painter.add(egui::Shape::closed_line(points, outline(surface, style)));
            }
        }
        Shape::Ellipse {
            center,
            radii,
            style,
        } => {
            let center = surface.viewbox_to_screen(egui::pos2(center.0, center.1));
            let radius = egui::vec2(radii.0, radii.1) * surface.scale();
            painter.add(egui::Shape::ellipse_filled(center, radius, style.fill));
            painter.add(egui::Shape::ellipse_stroke(
                center,
                radius,
                outline(surface, style),
            ));
        }
    }
}

fn outline(surface: &MapSurface, style: ShapeStyle) -> egui::Stroke {
    egui::Stroke::new(style.stroke_width * surface.scale(), style.stroke)
}

/// Fills a possibly concave polygon through a triangulated mesh.
fn fill_polygon(painter: &egui::Painter, points: &[egui::Pos2], fill: egui::Color32) {
    let triangles = artwork::triangulate(points);
    if triangles.is_empty() {
        return;
    }
    let mut mesh = egui::Mesh::default();
    for &p in points {
        mesh.colored_vertex(p, fill);
    }
    for [a, b, c] in triangles {
        mesh.add_triangle(a as u32, b as u32, c as u32);
    }
    painter.add(egui::Shape::mesh(mesh));
}
