use super::*;
use std::f64::consts::FRAC_PI_2;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn full_aperture_sharp_ring_is_an_annulus() {
    assert!(close(open_ring_sharp(Vec2::new(0.5, 0.0), PI, 0.5, 0.3), -0.15));
    // The centre is the hole.
    assert!(close(open_ring_sharp(Vec2::new(0.0, 0.0), PI, 0.5, 0.3), 0.35));
}

#[test]
fn full_aperture_rounded_ring_is_an_annulus() {
    assert!(close(open_ring_rounded(Vec2::new(0.7, 0.0), PI, 0.7, 0.2), -0.2));
}

#[test]
fn zero_aperture_rounded_ring_is_a_single_cap() {
    assert!(close(open_ring_rounded(Vec2::new(-0.7, 0.0), 0.0, 0.7, 0.2), -0.2));
    let d = open_ring_rounded(Vec2::new(0.0, 0.7), 0.0, 0.7, 0.2);
    assert!(close(d, 0.7 * 2f64.sqrt() - 0.2));
}

#[test]
fn half_aperture_keeps_one_side_and_opens_the_other() {
    let kept = Vec2::new(0.0, -0.5);
    let gap = Vec2::new(0.0, 0.5);
    assert!(close(open_ring_sharp(kept, FRAC_PI_2, 0.5, 0.3), -0.15));
    assert!(open_ring_sharp(gap, FRAC_PI_2, 0.5, 0.3) > 0.5);
    assert!(close(open_ring_rounded(kept, FRAC_PI_2, 0.5, 0.15), -0.15));
    assert!(open_ring_rounded(gap, FRAC_PI_2, 0.5, 0.15) > 0.5);
}

#[test]
fn painters_grow_with_time() {
    let lit = |b: &FrameBuffer| b.as_bytes().chunks_exact(4).filter(|px| px[0] > 0).count();

    let mut early = FrameBuffer::square(48);
    let mut late = FrameBuffer::square(48);
    paint_open_ring_rounded(&mut early, 0.1, &OpenRingRoundedParams::default());
    paint_open_ring_rounded(&mut late, 0.9, &OpenRingRoundedParams::default());
    assert!(lit(&late) > lit(&early));

    paint_open_ring_sharp(&mut early, 0.1, &OpenRingSharpParams::default());
    paint_open_ring_sharp(&mut late, 0.9, &OpenRingSharpParams::default());
    assert!(lit(&late) > lit(&early));
    assert!(late.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
}
