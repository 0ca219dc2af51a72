use serde::{Deserialize, Serialize};

/// The externally observed output record, overwritten wholesale every frame.
/// Angles are integer-rounded degrees (still `f64` so NaN from a degenerate
/// frame can pass through); areas are pixel² units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatedValues {
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    pub abc_area: f64,
    pub circle_area: f64,
    pub ayc_area: f64,
    pub abc_intersection_circle_area: f64,
    pub ay_angles: f64,
}
