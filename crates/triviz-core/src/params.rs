use crate::geom::Viewport;
use crate::model::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WIDTH_MAX: f64 = 300.0;
pub const HEIGHT_MAX: f64 = 300.0;

/// Live-adjustable inputs, owned by the host and handed to the engine each
/// frame. Colors are cosmetic; only width/height/pos drive the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub width: f64,
    pub height: f64,
    pub pos_x: f64,
    pub pos_y: f64,
    pub background_color: Rgba,
    pub triangle_color: Rgba,
    pub circle_color: Rgba,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            pos_x: 400.0,
            pos_y: 300.0,
            background_color: Rgba::opaque(255, 255, 255),
            triangle_color: Rgba::opaque(255, 0, 0),
            circle_color: Rgba::new(0, 0, 0, 26),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Params {
    /// The range checks the panel widget is expected to enforce. The engine
    /// itself accepts any real input and degrades silently, so headless
    /// callers (the CLI) run this before composing a frame.
    pub fn validate(&self, viewport: Viewport) -> Result<(), ParamError> {
        check("width", self.width, 0.0, WIDTH_MAX)?;
        check("height", self.height, 0.0, HEIGHT_MAX)?;
        check("pos_x", self.pos_x, 0.0, viewport.width)?;
        check("pos_y", self.pos_y, 0.0, viewport.height)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParamError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
