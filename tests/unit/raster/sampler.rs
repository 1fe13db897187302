use super::*;

fn gradient(w: u32, h: u32) -> FrameBuffer {
    let mut b = FrameBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            b.set_pixel(x, y, Rgba8::new((x * 10) as u8, (y * 10) as u8, 200, 255));
        }
    }
    b
}

#[test]
fn integer_coordinates_return_exact_pixels() {
    let b = gradient(4, 4);
    assert_eq!(sample(&b, 1.0, 2.0), b.pixel(1, 2));
    assert_eq!(sample(&b, 0.0, 0.0), b.pixel(0, 0));
}

#[test]
fn far_edge_and_beyond_return_opaque_black() {
    let b = gradient(4, 3);
    assert_eq!(sample(&b, 3.0, 0.0), Rgba8::new(0, 0, 0, 255));
    assert_eq!(sample(&b, 0.0, 2.0), Rgba8::new(0, 0, 0, 255));
    assert_eq!(sample(&b, 10.0, 10.0), Rgba8::new(0, 0, 0, 255));
    assert_eq!(sample(&b, -0.01, 1.0), Rgba8::new(0, 0, 0, 255));
    assert_eq!(sample(&b, f64::NAN, 1.0), Rgba8::new(0, 0, 0, 255));
}

#[test]
fn single_pixel_buffer_is_all_boundary() {
    let mut b = FrameBuffer::square(1);
    b.fill(Rgba8::new(50, 50, 50, 50));
    assert_eq!(sample(&b, 0.0, 0.0), Rgba8::OPAQUE_BLACK);
}

#[test]
fn bilinear_interpolation_truncates() {
    let mut b = FrameBuffer::square(2);
    b.set_pixel(0, 0, Rgba8::new(0, 0, 0, 0));
    b.set_pixel(1, 0, Rgba8::new(3, 255, 0, 0));
    b.set_pixel(0, 1, Rgba8::new(0, 0, 0, 0));
    b.set_pixel(1, 1, Rgba8::new(3, 255, 0, 0));
    // Domain is [0, 1) on each axis for a 2x2 image.
    let px = sample(&b, 0.5, 0.25);
    // 1.5 -> 1 and 127.5 -> 127 (truncated, not rounded).
    assert_eq!(px.r, 1);
    assert_eq!(px.g, 127);
    assert_eq!(px.b, 0);
}
