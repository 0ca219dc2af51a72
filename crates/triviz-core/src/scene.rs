use crate::area;
use crate::geom::{Vec2, Viewport};
use crate::metrics::{self, Metrics};
use crate::model::{Circle2D, Rgba, StrokeStyle, Triangle};
use crate::params::Params;
use crate::report::CalculatedValues;
use crate::wedge;
use serde::{Deserialize, Serialize};

pub const GRID_STEP: f64 = 25.0;
const GRID_COLOR: Rgba = Rgba::new(0, 0, 0, 51);
const OUTLINE_COLOR: Rgba = Rgba::opaque(0, 0, 0);
const TRIANGLE_FILL: Rgba = Rgba::new(0, 0, 255, 26);
const LABEL_SIZE: f32 = 16.0;

/// One drawing call for the rendering backend. The backend is an external
/// collaborator: it consumes this list in order and knows nothing about the
/// geometry that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    Clear {
        color: Rgba,
    },
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Rgba,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Rgba,
        stroke: StrokeStyle,
    },
    Circle {
        center: Vec2,
        radius: f64,
        fill: Rgba,
        stroke: StrokeStyle,
    },
    Text {
        at: Vec2,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// Everything one animation tick produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub values: CalculatedValues,
    pub commands: Vec<DrawCmd>,
}

/// One complete, synchronous geometry-and-draw pass.
///
/// Parameters go in, the calculated-values record and the draw-command list
/// come out; nothing is retained between calls. The host owns the loop and
/// calls this once per animation tick. A degenerate parameter set (zero
/// width/height) produces NaN angles and misshapen commands for this frame
/// only; the next tick recomputes from scratch.
pub fn compose_frame(params: &Params, viewport: Viewport) -> Frame {
    let mut values = CalculatedValues::default();
    let mut commands = Vec::new();

    commands.push(DrawCmd::Clear {
        color: params.background_color,
    });
    push_grid(&mut commands, viewport);

    let tri = Triangle::from_params(params.pos_x, params.pos_y, params.width, params.height);
    let m = metrics::measure(&tri);
    values.angle_a = m.degrees.a;
    values.angle_b = m.degrees.b;
    values.angle_c = m.degrees.c;

    commands.push(DrawCmd::Polygon {
        points: tri.vertices().to_vec(),
        fill: TRIANGLE_FILL,
        stroke: StrokeStyle::new(2.0, OUTLINE_COLOR),
    });
    push_labels(&mut commands, &tri, &m);

    let circle = Circle2D::from_vertical_leg(&tri);
    commands.push(DrawCmd::Circle {
        center: circle.center,
        radius: circle.radius,
        fill: params.circle_color,
        stroke: StrokeStyle::new(2.0, OUTLINE_COLOR),
    });

    let w = wedge::build(&tri, &circle, &m);
    values.ay_angles = w.ay_angle_deg;
    values.ayc_area = w.area;
    commands.push(DrawCmd::Polygon {
        points: vec![w.c, w.y, w.ay],
        fill: TRIANGLE_FILL,
        stroke: StrokeStyle::new(2.0, params.triangle_color),
    });

    values.circle_area = area::circle_area(circle.radius);
    values.abc_intersection_circle_area = area::circle_overlap_area(circle.radius);
    values.abc_area = area::triangle_area(tri.a, tri.b, tri.c);

    Frame { values, commands }
}

fn push_grid(commands: &mut Vec<DrawCmd>, viewport: Viewport) {
    let mut x = 0.0;
    while x < viewport.width + 1.0 {
        commands.push(DrawCmd::Line {
            a: Vec2::new(x, 0.0),
            b: Vec2::new(x, viewport.height),
            width: 1.0,
            color: GRID_COLOR,
        });
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < viewport.height + 1.0 {
        commands.push(DrawCmd::Line {
            a: Vec2::new(0.0, y),
            b: Vec2::new(viewport.width, y),
            width: 1.0,
            color: GRID_COLOR,
        });
        y += GRID_STEP;
    }
}

/// Vertex letters plus side-length readouts, placed at fixed offsets around
/// the main triangle. Only the main triangle is labeled.
fn push_labels(commands: &mut Vec<DrawCmd>, tri: &Triangle, m: &Metrics) {
    let ab = m.sides.ab;
    let ca = m.sides.ca;

    let mut label = |at: Vec2, text: String| {
        commands.push(DrawCmd::Text {
            at,
            text,
            size: LABEL_SIZE,
            color: OUTLINE_COLOR,
        });
    };

    label(Vec2::new(tri.a.x - 10.0, tri.a.y + 10.0), "a".to_string());
    label(Vec2::new(tri.b.x + 10.0, tri.b.y + 10.0), "b".to_string());
    label(Vec2::new(tri.c.x - 10.0, tri.c.y - 10.0), "c".to_string());

    label(
        Vec2::new(tri.b.x - ab / 2.0, tri.a.y + 20.0),
        format!("ab: {}", ab.round()),
    );
    label(
        Vec2::new(tri.c.x - 60.0, tri.c.y + ca / 2.0),
        format!("ca: {}", ca.round()),
    );
    label(
        Vec2::new(tri.a.x + ab / 2.0 + 10.0, tri.a.y - ca / 2.0),
        format!("bc: {}", m.sides.bc.round()),
    );
}
