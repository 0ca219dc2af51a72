use crate::geom::Vec2;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, backend-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Rgba,
}

impl StrokeStyle {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Right-angle triangle on the canvas. `a` is the anchor, `b` sits to its
/// right, `c` above it (canvas y grows downward). AB is horizontal, CA
/// vertical, so the right angle is at `a` whenever width and height are
/// positive. Negative parameters mirror the shape, zero collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    /// Builds the vertices from the live parameters. Total over all real
    /// inputs; nothing is validated here.
    pub fn from_params(pos_x: f64, pos_y: f64, width: f64, height: f64) -> Self {
        Self {
            a: Vec2::new(pos_x, pos_y),
            b: Vec2::new(pos_x + width, pos_y),
            c: Vec2::new(pos_x, pos_y - height),
        }
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle2D {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle2D {
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The derived circle: centered at `c`, radius pinned to the vertical
    /// leg (`a.y - c.y`), so its edge passes through `a`. The radius is
    /// signed; a mirrored triangle yields a negative radius and the circle
    /// simply stops rendering meaningfully.
    pub fn from_vertical_leg(tri: &Triangle) -> Self {
        Self {
            center: tri.c,
            radius: tri.a.y - tri.c.y,
        }
    }
}
