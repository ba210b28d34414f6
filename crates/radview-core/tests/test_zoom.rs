use image::{GrayImage, Luma};
use radview_core::render::scale_frame;

fn gradient_frame(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]))
}

#[test]
fn test_output_dimensions_are_floored() {
    let frame = gradient_frame(100, 80);
    let scaled = scale_frame(&frame, 1.5);
    assert_eq!((scaled.width(), scaled.height()), (150, 120));

    let odd = gradient_frame(101, 81);
    let scaled = scale_frame(&odd, 0.5);
    assert_eq!((scaled.width(), scaled.height()), (50, 40));

    let scaled = scale_frame(&frame, 2.5);
    assert_eq!((scaled.width(), scaled.height()), (250, 200));
}

#[test]
fn test_factor_one_is_identity() {
    let frame = gradient_frame(64, 48);
    let scaled = scale_frame(&frame, 1.0);
    assert_eq!(scaled.as_raw(), frame.as_raw());
}

#[test]
fn test_uniform_frame_stays_uniform() {
    let frame = GrayImage::from_pixel(100, 100, Luma([100]));
    for factor in [0.7, 2.0] {
        let scaled = scale_frame(&frame, factor);
        for px in scaled.as_raw() {
            assert_eq!(*px, 100, "factor {factor} altered a uniform frame");
        }
    }
}

#[test]
fn test_repeated_renders_are_deterministic() {
    let frame = gradient_frame(73, 41);
    let first = scale_frame(&frame, 1.3);
    let second = scale_frame(&frame, 1.3);
    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!((first.width(), first.height()), (94, 53));
}

#[test]
fn test_minimum_output_is_one_pixel() {
    let frame = gradient_frame(5, 5);
    let scaled = scale_frame(&frame, 0.1);
    assert_eq!((scaled.width(), scaled.height()), (1, 1));
}
