use crate::model::Triangle;
use serde::{Deserialize, Serialize};

/// Side lengths of the main triangle. `bc` is not a measured distance: it is
/// defined by Pythagoras from `ab` and `ca` and rounded to the nearest
/// integer, and that rounded value is what the angle formulas consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideLengths {
    pub ab: f64,
    pub bc: f64,
    pub ca: f64,
}

/// One value per vertex. Which unit depends on where the struct sits in
/// [`Metrics`]: full-precision radians for construction, integer-rounded
/// degrees for display. Kept as `f64` either way so an invalid acos domain
/// propagates NaN instead of faulting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub sides: SideLengths,
    pub degrees: Angles,
    pub radians: Angles,
}

/// Side lengths and law-of-cosines angles for the main triangle.
///
/// `ca` stays signed: a height slider pushed past zero mirrors the triangle
/// and is allowed to feed a negative "length" through the formulas. Degenerate
/// or inconsistent sides make an acos argument leave [-1, 1] (or a denominator
/// hit zero) and the affected angles come back NaN; that is a display glitch
/// for the frame, not an error.
pub fn measure(tri: &Triangle) -> Metrics {
    let ab = (tri.a.x - tri.b.x).abs();
    let ca = tri.a.y - tri.c.y;
    let bc = (ab * ab + ca * ca).sqrt().round();

    let radians = Angles {
        a: ((ca * ca + ab * ab - bc * bc) / (2.0 * ca * ab)).acos(),
        b: ((bc * bc + ca * ca - ab * ab) / (2.0 * bc * ca)).acos(),
        c: ((ab * ab + bc * bc - ca * ca) / (2.0 * ab * bc)).acos(),
    };
    let degrees = Angles {
        a: radians.a.to_degrees().round(),
        b: radians.b.to_degrees().round(),
        c: radians.c.to_degrees().round(),
    };

    Metrics {
        sides: SideLengths { ab, bc, ca },
        degrees,
        radians,
    }
}
