use triviz_core::area::{circle_area, circle_overlap_area, triangle_area};
use triviz_core::geom::Vec2;
use triviz_core::metrics::measure;
use triviz_core::model::{Circle2D, Triangle};
use triviz_core::wedge;

#[test]
fn circle_sits_on_vertex_c_with_leg_radius() {
    let tri = Triangle::from_params(0.0, 100.0, 100.0, 100.0);
    let circle = Circle2D::from_vertical_leg(&tri);
    assert_eq!(tri.c, circle.center);
    assert_eq!(100.0, circle.radius);
}

#[test]
fn mirrored_triangle_gives_negative_radius() {
    let tri = Triangle::from_params(0.0, 100.0, 100.0, -50.0);
    let circle = Circle2D::from_vertical_leg(&tri);
    assert_eq!(-50.0, circle.radius);
}

#[test]
fn builds_wedge_for_isosceles_case() {
    let tri = Triangle::from_params(0.0, 100.0, 100.0, 100.0);
    let m = measure(&tri);
    let circle = Circle2D::from_vertical_leg(&tri);
    let w = wedge::build(&tri, &circle, &m);

    assert_eq!(tri.c, w.c);
    // Foot point directly below C at A's height.
    assert_eq!(Vec2::new(0.0, 100.0), w.ay);

    // Y lies on the circle at the unrounded interior angle at C,
    // acos(19881/28200) here because bc was rounded to 141.
    assert!((w.y.x - 70.5).abs() < 1e-9, "y.x = {}", w.y.x);
    assert!((w.y.y - 70.9207).abs() < 1e-3, "y.y = {}", w.y.y);

    assert_eq!(67.5, w.ay_angle_deg);
    assert_eq!(3546.0, w.area);
}

#[test]
fn wedge_propagates_nan_on_degenerate_input() {
    let tri = Triangle::from_params(0.0, 100.0, 0.0, 100.0);
    let m = measure(&tri);
    let circle = Circle2D::from_vertical_leg(&tri);
    let w = wedge::build(&tri, &circle, &m);
    assert!(w.y.x.is_nan());
    assert!(w.area.is_nan());
}

#[test]
fn shoelace_area_matches_leg_product() {
    for (width, height) in [(100.0, 100.0), (200.0, 50.0), (33.0, 271.0)] {
        let tri = Triangle::from_params(400.0, 300.0, width, height);
        let area = triangle_area(tri.a, tri.b, tri.c);
        assert!(
            (area - width * height / 2.0).abs() < 1e-9,
            "area {area} for width={width} height={height}"
        );
    }
}

#[test]
fn degenerate_triangle_has_zero_area() {
    let tri = Triangle::from_params(0.0, 100.0, 0.0, 100.0);
    assert_eq!(0.0, triangle_area(tri.a, tri.b, tri.c));
}

#[test]
fn overlap_is_fixed_fraction_of_circle() {
    for radius in [1.0, 5.0, 50.0, 100.0, 123.4, -40.0] {
        assert_eq!(0.125 * circle_area(radius), circle_overlap_area(radius));
    }
    assert!((circle_area(100.0) - std::f64::consts::PI * 10_000.0).abs() < 1e-9);
}
