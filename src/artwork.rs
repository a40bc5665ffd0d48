//! Static map artwork and the map registry.
//!
//! Every map is described declaratively as a list of shape primitives in the
//! 800×500 logical viewBox. Adding a map means adding a [`MapSeed`] to
//! [`MAP_REGISTRY`]; interaction code never inspects the artwork.

use crate::constants::CURVE_FLATTEN_STEPS;
use eframe::egui::{self, Color32, Pos2};

/// One step of an outline, in viewBox coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new outline at the point
    MoveTo(f32, f32),
    /// Straight segment to the point
    LineTo(f32, f32),
    /// Quadratic curve through a control point `(cx, cy)` to `(x, y)`
    QuadTo(f32, f32, f32, f32),
    /// Close the outline back to its start
    Close,
}

/// Fill and outline colors of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Interior color
    pub fill: Color32,
    /// Outline color
    pub stroke: Color32,
    /// Outline width in viewBox units
    pub stroke_width: f32,
}

/// A drawing primitive of the static artwork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A closed outline made of straight and quadratic segments
    Path {
        /// Outline commands, starting with `MoveTo`
        commands: &'static [PathCommand],
        /// Colors
        style: ShapeStyle,
    },
    /// An axis-aligned ellipse
    Ellipse {
        /// Center in viewBox coordinates
        center: (f32, f32),
        /// Horizontal and vertical radii
        radii: (f32, f32),
        /// Colors
        style: ShapeStyle,
    },
}

/// Registry entry describing one labelable map.
#[derive(Debug, Clone, Copy)]
pub struct MapSeed {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short title used on the map tab
    pub tab_title: &'static str,
    /// Drawing primitives, painted in order
    pub artwork: &'static [Shape],
}

/// Background color of every map surface.
pub const OCEAN: Color32 = Color32::from_rgb(0xf0, 0xf9, 0xff);
const LAND: Color32 = Color32::from_rgb(0xe0, 0xf2, 0xfe);
const LAKE: Color32 = Color32::from_rgb(0xdd, 0xd6, 0xfe);

const WORLD_STYLE: ShapeStyle = ShapeStyle {
    fill: LAND,
    stroke: Color32::from_rgb(0x0e, 0xa5, 0xe9),
    stroke_width: 2.0,
};
const EUROPE_STYLE: ShapeStyle = ShapeStyle {
    fill: LAND,
    stroke: Color32::from_rgb(0xf9, 0x73, 0x16),
    stroke_width: 2.0,
};
const RUSSIA_STYLE: ShapeStyle = ShapeStyle {
    fill: LAND,
    stroke: Color32::from_rgb(0x8b, 0x5c, 0xf6),
    stroke_width: 2.0,
};
const RUSSIA_LAKE_STYLE: ShapeStyle = ShapeStyle {
    fill: LAKE,
    stroke: Color32::from_rgb(0x8b, 0x5c, 0xf6),
    stroke_width: 1.5,
};

use PathCommand::{Close, LineTo as L, MoveTo as M, QuadTo as Q};

const WORLD: &[Shape] = &[
    Shape::Path {
        commands: &[
            M(100.0, 150.0),
            Q(150.0, 120.0, 200.0, 140.0),
            Q(250.0, 160.0, 300.0, 150.0),
            L(320.0, 180.0),
            L(280.0, 220.0),
            L(240.0, 200.0),
            L(180.0, 210.0),
            L(120.0, 190.0),
            Close,
        ],
        style: WORLD_STYLE,
    },
    Shape::Path {
        commands: &[
            M(350.0, 180.0),
            Q(400.0, 160.0, 450.0, 170.0),
            L(480.0, 200.0),
            L(460.0, 240.0),
            L(420.0, 250.0),
            L(380.0, 230.0),
            L(340.0, 210.0),
            Close,
        ],
        style: WORLD_STYLE,
    },
    Shape::Path {
        commands: &[
            M(500.0, 200.0),
            Q(550.0, 180.0, 600.0, 190.0),
            L(630.0, 220.0),
            L(610.0, 260.0),
            L(570.0, 270.0),
            L(520.0, 250.0),
            Close,
        ],
        style: WORLD_STYLE,
    },
    Shape::Path {
        commands: &[
            M(200.0, 280.0),
            Q(250.0, 260.0, 300.0, 270.0),
            L(320.0, 310.0),
            L(280.0, 340.0),
            L(230.0, 330.0),
            L(180.0, 310.0),
            Close,
        ],
        style: WORLD_STYLE,
    },
    Shape::Path {
        commands: &[
            M(400.0, 300.0),
            Q(450.0, 280.0, 500.0, 290.0),
            L(520.0, 330.0),
            L(480.0, 360.0),
            L(430.0, 350.0),
            L(380.0, 330.0),
            Close,
        ],
        style: WORLD_STYLE,
    },
];

const EUROPE: &[Shape] = &[
    Shape::Path {
        commands: &[
            M(300.0, 150.0),
            L(350.0, 140.0),
            L(380.0, 160.0),
            L(370.0, 190.0),
            L(340.0, 200.0),
            L(310.0, 180.0),
            Close,
        ],
        style: EUROPE_STYLE,
    },
    Shape::Path {
        commands: &[
            M(380.0, 160.0),
            L(430.0, 150.0),
            L(460.0, 170.0),
            L(450.0, 200.0),
            L(420.0, 210.0),
            L(390.0, 190.0),
            Close,
        ],
        style: EUROPE_STYLE,
    },
    Shape::Path {
        commands: &[
            M(340.0, 210.0),
            L(390.0, 200.0),
            L(420.0, 220.0),
            L(410.0, 250.0),
            L(380.0, 260.0),
            L(350.0, 240.0),
            Close,
        ],
        style: EUROPE_STYLE,
    },
    Shape::Path {
        commands: &[
            M(280.0, 220.0),
            L(330.0, 210.0),
            L(360.0, 230.0),
            L(350.0, 260.0),
            L(320.0, 270.0),
            L(290.0, 250.0),
            Close,
        ],
        style: EUROPE_STYLE,
    },
];

const RUSSIA: &[Shape] = &[
    Shape::Path {
        commands: &[
            M(150.0, 200.0),
            Q(300.0, 180.0, 450.0, 190.0),
            Q(600.0, 200.0, 700.0, 210.0),
            L(680.0, 280.0),
            L(550.0, 290.0),
            L(400.0, 280.0),
            L(250.0, 270.0),
            L(140.0, 260.0),
            Close,
        ],
        style: RUSSIA_STYLE,
    },
    Shape::Ellipse {
        center: (280.0, 240.0),
        radii: (30.0, 25.0),
        style: RUSSIA_LAKE_STYLE,
    },
    Shape::Ellipse {
        center: (450.0, 250.0),
        radii: (35.0, 30.0),
        style: RUSSIA_LAKE_STYLE,
    },
];

/// The fixed list of maps, in tab order.
pub const MAP_REGISTRY: &[MapSeed] = &[
    MapSeed {
        id: "world",
        name: "World map",
        tab_title: "🌐 World",
        artwork: WORLD,
    },
    MapSeed {
        id: "europe",
        name: "Europe",
        tab_title: "📍 Europe",
        artwork: EUROPE,
    },
    MapSeed {
        id: "russia",
        name: "Russia",
        tab_title: "⛰ Russia",
        artwork: RUSSIA,
    },
];

/// Looks up the registry entry of a map.
pub fn seed(map_id: &str) -> Option<&'static MapSeed> {
    MAP_REGISTRY.iter().find(|s| s.id == map_id)
}

/// Artwork of a map; empty for an unknown ID.
pub fn artwork_for(map_id: &str) -> &'static [Shape] {
    seed(map_id).map(|s| s.artwork).unwrap_or(&[])
}

/// Flattens outline commands into closed polygons in viewBox coordinates.
///
/// Each `MoveTo` starts a new polygon. Quadratic segments are sampled into
/// [`CURVE_FLATTEN_STEPS`] straight pieces. A trailing point equal to the
/// start is dropped since every polygon is implicitly closed.
pub fn flatten_path(commands: &[PathCommand]) -> Vec<Vec<Pos2>> {
    let mut polygons = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo(x, y) => {
                if current.len() >= 3 {
                    polygons.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(egui::pos2(x, y));
            }
            PathCommand::LineTo(x, y) => current.push(egui::pos2(x, y)),
            PathCommand::QuadTo(cx, cy, x, y) => {
                let Some(&start) = current.last() else {
                    continue;
                };
                let control = egui::pos2(cx, cy);
                let end = egui::pos2(x, y);
                for step in 1..=CURVE_FLATTEN_STEPS {
                    let t = step as f32 / CURVE_FLATTEN_STEPS as f32;
                    let u = 1.0 - t;
                    let p = start.to_vec2() * (u * u)
                        + control.to_vec2() * (2.0 * u * t)
                        + end.to_vec2() * (t * t);
                    current.push(p.to_pos2());
                }
            }
            PathCommand::Close => {
                if current.len() >= 2 && current.first() == current.last() {
                    current.pop();
                }
                if current.len() >= 3 {
                    polygons.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() >= 3 {
        polygons.push(current);
    }
    polygons
}

/// Twice the signed area of a polygon (positive for counter-clockwise in math axes).
fn signed_area2(points: &[Pos2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Whether `p` lies inside the triangle or on one of its edges.
fn inside_or_on(p: Pos2, a: Pos2, b: Pos2, c: Pos2, orientation: f32) -> bool {
    cross(a, b, p) * orientation >= 0.0
        && cross(b, c, p) * orientation >= 0.0
        && cross(c, a, p) * orientation >= 0.0
}

/// Triangulates a simple polygon by ear clipping.
///
/// egui only fills convex paths, so concave outlines are turned into a mesh
/// instead. Returns index triples into `points`.
pub fn triangulate(points: &[Pos2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let area2 = signed_area2(points);
    if area2 == 0.0 {
        return Vec::new();
    }
    let orientation = area2.signum();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;
        for i in 0..m {
            let a = remaining[(i + m - 1) % m];
            let b = remaining[i];
            let c = remaining[(i + 1) % m];
            let turn = cross(points[a], points[b], points[c]) * orientation;
            if turn.abs() <= f32::EPSILON {
                // Collinear vertex: drop it without emitting a sliver.
                remaining.remove(i);
                clipped = true;
                break;
            }
            if turn < 0.0 {
                continue;
            }
            let (pa, pb, pc) = (points[a], points[b], points[c]);
            // A vertex touching the ear, even on an edge, makes the clip unsafe.
            let blocked = remaining.iter().any(|&j| {
                let p = points[j];
                p != pa && p != pb && p != pc && inside_or_on(p, pa, pb, pc, orientation)
            });
            if blocked {
                continue;
            }
            triangles.push([a, b, c]);
            remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            log::warn!("Polygon with {} vertices could not be fully triangulated", n);
            break;
        }
    }
    if remaining.len() == 3 {
        let [a, b, c] = [remaining[0], remaining[1], remaining[2]];
        if cross(points[a], points[b], points[c]).abs() > f32::EPSILON {
            triangles.push([a, b, c]);
        }
    }
    triangles
}
