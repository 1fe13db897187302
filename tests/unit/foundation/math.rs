use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-12
}

#[test]
fn rotate_quarter_turn() {
    let p = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
    assert!(close(p, Vec2::new(0.0, 1.0)));
    let p = rotate(Vec2::new(0.0, 2.0), PI);
    assert!(close(p, Vec2::new(0.0, -2.0)));
}

#[test]
fn rotate_preserves_length() {
    let p = Vec2::new(0.3, -0.7);
    for a in [0.1, 1.0, 2.5, -4.0] {
        assert!((rotate(p, a).length() - p.length()).abs() < 1e-12);
    }
}

#[test]
fn triangle_wave_shape() {
    assert_eq!(triangle_wave(0.0), 1.0);
    assert_eq!(triangle_wave(0.25), 0.0);
    assert_eq!(triangle_wave(0.5), -1.0);
    assert_eq!(triangle_wave(1.0), 1.0);
    assert_eq!(triangle_wave(-0.5), -1.0);
}

#[test]
fn shade_truncates_and_handles_nan() {
    assert_eq!(shade_unit(f64::NAN), 0);
    assert_eq!(shade_unit(-3.0), 0);
    assert_eq!(shade_unit(2.0), 255);
    assert_eq!(shade_unit(1.0), 255);
    // 255 * 0.5 = 127.5 truncates down.
    assert_eq!(shade_unit(0.5), 127);
}

#[test]
fn brighten_only_touches_positive_values() {
    assert_eq!(brighten(0.1, 2.0), 0.2);
    assert_eq!(brighten(0.9, 2.0), 1.0);
    assert_eq!(brighten(-0.4, 2.0), -0.4);
    assert_eq!(brighten(0.0, 8.0), 0.0);
}

#[test]
fn lerp_endpoints() {
    let a = Vec2::new(-0.5, 0.0);
    let b = Vec2::new(0.5, 0.2);
    assert_eq!(lerp_vec(a, b, 0.0), a);
    assert_eq!(lerp_vec(a, b, 1.0), b);
    assert_eq!(lerp(0.0, 0.4, 1.0), 0.4);
}
