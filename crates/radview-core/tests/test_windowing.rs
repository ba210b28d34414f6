mod common;

use common::{ramp_buffer, uniform_buffer};
use radview_core::render::apply_window;

// ---------------------------------------------------------------------------
// Linear transform
// ---------------------------------------------------------------------------

#[test]
fn test_output_monotonic_in_sample_value() {
    // Row-major ramp: consecutive raw pixels come from non-decreasing samples.
    let buffer = ramp_buffer(16, 16, 12);
    let frame = apply_window(&buffer, 128, 256);
    for pair in frame.as_raw().windows(2) {
        assert!(
            pair[1] >= pair[0],
            "windowing must be monotonic, got {} then {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_sample_at_level_maps_to_mid_gray() {
    for width in [1, 2, 400, 3999] {
        let buffer = uniform_buffer(8, 8, 200, 12);
        let frame = apply_window(&buffer, 200, width);
        for px in frame.as_raw() {
            assert!(
                *px == 127 || *px == 128,
                "width {width}: expected mid-gray, got {px}"
            );
        }
    }
}

#[test]
fn test_width_one_is_near_binary_threshold() {
    let mut buffer = uniform_buffer(1, 3, 0, 12);
    buffer.samples[[0, 0]] = 99;
    buffer.samples[[0, 1]] = 100;
    buffer.samples[[0, 2]] = 101;

    let frame = apply_window(&buffer, 100, 1);
    assert_eq!(frame.get_pixel(0, 0).0[0], 0);
    let mid = frame.get_pixel(1, 0).0[0];
    assert!(mid == 127 || mid == 128, "expected mid-gray, got {mid}");
    assert_eq!(frame.get_pixel(2, 0).0[0], 255);
}

#[test]
fn test_saturated_window_is_valid_output() {
    // Ramp samples 0..=63; a window far away saturates the whole frame.
    let buffer = ramp_buffer(8, 8, 12);

    let white = apply_window(&buffer, -2000, 100);
    for px in white.as_raw() {
        assert_eq!(*px, 255);
    }

    let black = apply_window(&buffer, 4000, 100);
    for px in black.as_raw() {
        assert_eq!(*px, 0);
    }
}

// ---------------------------------------------------------------------------
// Min-max fallback
// ---------------------------------------------------------------------------

#[test]
fn test_min_max_fallback_spans_full_range() {
    // 16x16 ramp covers samples 0..=255: min maps to 0, max to 255.
    let buffer = ramp_buffer(16, 16, 12);
    let frame = apply_window(&buffer, 0, 0);
    let raw = frame.as_raw();
    assert_eq!(raw[0], 0);
    assert_eq!(*raw.last().unwrap(), 255);
}

#[test]
fn test_min_max_fallback_uniform_buffer_collapses_to_black() {
    let buffer = uniform_buffer(8, 8, 1234, 12);
    let frame = apply_window(&buffer, 0, 0);
    for px in frame.as_raw() {
        assert_eq!(*px, 0);
    }
}

#[test]
fn test_negative_width_takes_fallback_path() {
    let buffer = ramp_buffer(8, 8, 12);
    let zero = apply_window(&buffer, 0, 0);
    let negative = apply_window(&buffer, 0, -100);
    assert_eq!(zero.as_raw(), negative.as_raw());
}

// ---------------------------------------------------------------------------
// Purity and the parallel path
// ---------------------------------------------------------------------------

#[test]
fn test_input_buffer_is_not_mutated() {
    let buffer = ramp_buffer(8, 8, 12);
    let before = buffer.samples.clone();
    let _ = apply_window(&buffer, 32, 16);
    let _ = apply_window(&buffer, 0, 0);
    assert_eq!(buffer.samples, before);
}

#[test]
fn test_parallel_path_matches_formula() {
    // 300x300 crosses the row-parallelism threshold.
    let buffer = ramp_buffer(300, 300, 16);
    let level = 40_000i32;
    let width = 20_000i32;
    let frame = apply_window(&buffer, level, width);

    let low = f64::from(level) - f64::from(width) / 2.0;
    for (row, col) in [(0usize, 0usize), (123, 45), (299, 299)] {
        let sample = f64::from(buffer.samples[[row, col]]);
        let expected = ((sample - low) / f64::from(width) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8;
        assert_eq!(frame.get_pixel(col as u32, row as u32).0[0], expected);
    }
}
