use super::*;
use crate::foundation::core::Rgba8;

fn lit(frame: &FrameBuffer) -> usize {
    frame.as_bytes().chunks_exact(4).filter(|px| px[3] > 0).count()
}

#[test]
fn first_frame_is_empty_because_the_capsule_has_no_length() {
    let g = SlashTrailGenerator::default();
    let mut f = FrameBuffer::square(16);
    g.generate(&mut f, 0.0).unwrap();
    assert!(!f.has_visible_pixels());
}

#[test]
fn swipe_grows_as_time_advances() {
    let g = SlashTrailGenerator::default();
    let counts: Vec<usize> = [0.25, 0.5, 1.0]
        .into_iter()
        .map(|t| {
            let mut f = FrameBuffer::square(16);
            g.generate(&mut f, t).unwrap();
            lit(&f)
        })
        .collect();
    assert!(counts[0] > 0);
    assert!(counts[0] < counts[1]);
    assert!(counts[1] <= counts[2]);
}

#[test]
fn four_pixel_final_frame_matches_the_field() {
    let g = SlashTrailGenerator::default();
    let mut f = FrameBuffer::square(4);
    g.generate(&mut f, 1.0).unwrap();
    assert_eq!(f.pixel(2, 1), Rgba8::new(56, 56, 56, 56));
    assert_eq!(f.pixel(2, 2), Rgba8::new(56, 56, 56, 56));
    assert_eq!(f.pixel(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(lit(&f), 2);
}

#[test]
fn generation_is_deterministic() {
    let g = SlashTrailGenerator::default();
    let mut a = FrameBuffer::square(24);
    let mut b = FrameBuffer::square(24);
    g.generate(&mut a, 0.6).unwrap();
    g.generate(&mut b, 0.6).unwrap();
    assert_eq!(a, b);
}

#[test]
fn circular_output_differs_from_the_flat_frame() {
    let flat = SlashTrailGenerator::default();
    let ring = SlashTrailGenerator::with_params(SlashTrailParams {
        circular: true,
        ..SlashTrailParams::default()
    });
    let mut a = FrameBuffer::square(32);
    let mut b = FrameBuffer::square(32);
    flat.generate(&mut a, 1.0).unwrap();
    ring.generate(&mut b, 1.0).unwrap();
    assert_ne!(a, b);
    // Corners lie outside the ring's radius.
    assert_eq!(b.pixel(0, 0), Rgba8::TRANSPARENT);
}

#[test]
fn params_round_trip_through_edits() {
    let mut g = SlashTrailGenerator::default();
    assert!(!g.is_looping());
    assert_eq!(g.name(), "Slash Trail");

    let changed = g
        .edit_params(&serde_json::json!({ "rb": 0.2, "circular": true }))
        .unwrap();
    assert!(changed);
    assert_eq!(g.params.rb, 0.2);
    assert!(g.params.circular);

    let json = g.params().unwrap();
    assert_eq!(json["brightness"], serde_json::json!(8.0));
    assert!(!g.edit_params(&json).unwrap());
}
