use triviz_core::metrics::measure;
use triviz_core::model::Triangle;

#[test]
fn measures_isosceles_right_triangle() {
    // A=(0,100), B=(100,100), C=(0,0).
    let tri = Triangle::from_params(0.0, 100.0, 100.0, 100.0);
    let m = measure(&tri);

    assert_eq!(100.0, m.sides.ab);
    assert_eq!(100.0, m.sides.ca);
    // Hypotenuse is rounded before anything else consumes it.
    assert_eq!(141.0, m.sides.bc);

    assert_eq!(90.0, m.degrees.a);
    assert_eq!(45.0, m.degrees.b);
    assert_eq!(45.0, m.degrees.c);
}

#[test]
fn radian_angles_sum_to_half_turn() {
    for (width, height) in [
        (100.0, 100.0),
        (50.0, 200.0),
        (300.0, 10.0),
        (7.0, 293.0),
        (120.5, 80.25),
    ] {
        let tri = Triangle::from_params(10.0, 400.0, width, height);
        let m = measure(&tri);
        let sum_deg = (m.radians.a + m.radians.b + m.radians.c).to_degrees();
        // The rounded hypotenuse skews each angle a little; the sum still
        // lands within a degree of 180.
        assert!(
            (sum_deg - 180.0).abs() < 1.0,
            "angle sum {sum_deg} for width={width} height={height}"
        );
    }
}

#[test]
fn measurement_is_idempotent() {
    let tri = Triangle::from_params(40.0, 250.0, 120.0, 90.0);
    let first = measure(&tri);
    let second = measure(&tri);
    assert_eq!(first, second);
}

#[test]
fn widening_grows_hypotenuse_and_shrinks_opposite_angle() {
    let mut last_bc = f64::NEG_INFINITY;
    let mut last_angle_c = f64::INFINITY;
    for width in [50.0, 100.0, 150.0, 200.0, 250.0, 300.0] {
        let tri = Triangle::from_params(0.0, 100.0, width, 100.0);
        let m = measure(&tri);
        assert!(m.sides.bc > last_bc, "bc not increasing at width={width}");
        assert!(
            m.radians.c < last_angle_c,
            "angle c not decreasing at width={width}"
        );
        last_bc = m.sides.bc;
        last_angle_c = m.radians.c;
    }
}

#[test]
fn zero_width_degenerates_without_panicking() {
    let tri = Triangle::from_params(0.0, 100.0, 0.0, 100.0);
    let m = measure(&tri);
    assert_eq!(0.0, m.sides.ab);
    assert!(m.degrees.a.is_nan());
    assert!(m.degrees.c.is_nan());
}

#[test]
fn zero_height_degenerates_without_panicking() {
    let tri = Triangle::from_params(0.0, 100.0, 100.0, 0.0);
    let m = measure(&tri);
    assert_eq!(0.0, m.sides.ca);
    assert!(m.degrees.a.is_nan());
    assert!(m.degrees.b.is_nan());
}

#[test]
fn negative_height_keeps_signed_leg() {
    let tri = Triangle::from_params(0.0, 100.0, 100.0, -50.0);
    let m = measure(&tri);
    // Mirrored triangle: the vertical leg is deliberately signed, not
    // clamped, and the angle formulas are left to degrade on their own.
    assert_eq!(-50.0, m.sides.ca);
}
