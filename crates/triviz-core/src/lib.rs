//! Geometry engine for the right-triangle + circle visualizer.
//!
//! Everything here is a pure recomputation from the current [`params::Params`]:
//! one call to [`scene::compose_frame`] produces the calculated-values record
//! and the draw-command list for a single frame. Hosts (the egui app, the CLI)
//! own the loop and the parameter/value context; no state lives in this crate.

pub mod area;
pub mod geom;
pub mod metrics;
pub mod model;
pub mod params;
pub mod report;
pub mod scene;
pub mod wedge;
