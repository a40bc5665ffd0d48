//! Shared application-wide constants.
//! Centralizes tweakable values used across map rendering and interactions.

// Map surface
/// Width of the logical viewBox that artwork and labels are drawn in.
pub const VIEWBOX_WIDTH: f32 = 800.0;
/// Height of the logical viewBox that artwork and labels are drawn in.
pub const VIEWBOX_HEIGHT: f32 = 500.0;
/// Upper bound of the normalized (percentage) coordinate space.
pub const PERCENT_MAX: f32 = 100.0;
/// Corner radius of the map surface frame (in screen pixels).
pub const SURFACE_CORNER_RADIUS: f32 = 12.0;
/// Stroke width of the map surface frame (in screen pixels).
pub const SURFACE_BORDER_WIDTH: f32 = 2.0;

// Labels (viewBox units, scaled with the surface)
/// Radius of a placed label's marker.
pub const LABEL_MARKER_RADIUS: f32 = 4.0;
/// Extra radius around a marker that still counts as a hit.
pub const LABEL_HIT_SLOP: f32 = 4.0;
/// Horizontal offset from the marker to the start of the label text.
pub const LABEL_TEXT_OFFSET_X: f32 = 8.0;
/// Vertical offset from the marker to the label text baseline.
pub const LABEL_TEXT_OFFSET_Y: f32 = 4.0;
/// Font size of label text.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Radius of the pending-click marker.
pub const PENDING_MARKER_RADIUS: f32 = 6.0;
/// Pulse frequency of the pending-click marker (cycles per second).
pub const PENDING_PULSE_HZ: f64 = 1.0;

// Artwork
/// Number of line segments used to approximate one quadratic curve.
pub const CURVE_FLATTEN_STEPS: usize = 12;

// Window
/// Initial native window size in logical points.
pub const INITIAL_WINDOW_SIZE: [f32; 2] = [1100.0, 860.0];
/// Maximum width of the centered content column.
pub const CONTENT_MAX_WIDTH: f32 = 960.0;
