use super::*;

#[test]
fn zero_scale_noise_is_identity() {
    let n = FieldNoise::uniform(0.0, 3.0, 2.0);
    let p = Vec2::new(0.25, -0.6);
    assert_eq!(n.apply(p, 0.4), p);
}

#[test]
fn noise_couples_time_into_space() {
    let n = FieldNoise::uniform(0.1, 1.0, 1.0);
    let p = Vec2::new(0.0, 0.0);
    // sin(pi * (0 + 2 * 0.25)) = 1
    let q = n.apply(p, 0.25);
    assert!((q.x - 0.1).abs() < 1e-12);
    assert!((q.y - 0.1).abs() < 1e-12);
    // A full period later the displacement repeats.
    let r = n.apply(p, 1.25);
    assert!((r - q).length() < 1e-12);
}

#[test]
fn shape_names_roundtrip() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeKind::from_name(kind.name()).unwrap(), kind);
    }
    assert!(ShapeKind::from_name("hexagon").is_err());
}

#[test]
fn every_default_shape_paints_something() {
    for kind in ShapeKind::ALL {
        let mut b = FrameBuffer::square(32);
        kind.paint_default(&mut b, 0.3);
        let lit = b
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| px[0] > 0)
            .count();
        assert!(lit > 0, "{} painted nothing", kind.name());
    }
}
