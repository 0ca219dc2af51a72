use crate::geom::Vec2;
use crate::metrics::Metrics;
use crate::model::{Circle2D, Triangle};
use serde::{Deserialize, Serialize};

/// Auxiliary triangle A-Y-C: the wedge between the circle and the main
/// triangle's vertical leg. `c` is shared with the main triangle, `y` lies on
/// the circle in the direction of the interior angle at `c`, and `ay` is the
/// foot point directly below `c` at `a`'s height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub c: Vec2,
    pub y: Vec2,
    pub ay: Vec2,
    pub ay_angle_deg: f64,
    pub area: f64,
}

pub fn build(tri: &Triangle, circle: &Circle2D, metrics: &Metrics) -> Wedge {
    // Construction uses the full-precision radian angle; the rounded degree
    // value is only for the derived display angle below.
    let theta = metrics.radians.c;
    let y = Vec2::new(
        circle.center.x + circle.radius * theta.cos(),
        circle.center.y + circle.radius * theta.sin(),
    );
    let ay = Vec2::new(circle.center.x, tri.a.y);

    // Isosceles-wedge assumption, not a re-measurement of A-Y-C.
    let ay_angle_deg = (180.0 - metrics.degrees.c) / 2.0;
    let area = (0.5 * metrics.sides.ca * circle.radius * theta.sin()).round();

    Wedge {
        c: circle.center,
        y,
        ay,
        ay_angle_deg,
        area,
    }
}
