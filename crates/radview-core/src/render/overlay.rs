use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{GrayImage, Luma};

use crate::buffer::SampleBuffer;
use crate::consts::{
    OVERLAY_BOTTOM_OFFSET, OVERLAY_LINE_SPACING, OVERLAY_MARGIN_X, OVERLAY_TEXT_SCALE,
    OVERLAY_TOP_Y,
};

const GLYPH_SIZE: i64 = 8;
const TEXT_SHADE: u8 = 0xFF;
const SHADOW_SHADE: u8 = 0x00;

/// Burn the diagnostic annotations into a copy of the windowed frame.
///
/// Four fixed anchors: dimensions and photometric interpretation at the top
/// left, current window values and bit depth/modality at the bottom left.
/// Each line is drawn in white over a 1-px offset black shadow so it reads
/// on both dark and saturated backgrounds. Pixels outside the drawn glyph
/// cells are untouched, and so is the input frame.
pub fn compose_overlay(
    frame: &GrayImage,
    buffer: &SampleBuffer,
    level: i32,
    width: i32,
) -> GrayImage {
    let mut annotated = frame.clone();
    let height = annotated.height();
    let bottom = height.saturating_sub(OVERLAY_BOTTOM_OFFSET);

    let lines = [
        (
            OVERLAY_TOP_Y,
            format!("{} x {}", buffer.columns(), buffer.rows()),
        ),
        (
            OVERLAY_TOP_Y + OVERLAY_LINE_SPACING,
            format!("Photo: {}", buffer.photometric_interpretation),
        ),
        (bottom, format!("WW: {width}  WL: {level}")),
        (
            bottom + OVERLAY_LINE_SPACING,
            format!("Bits: {}  Mod: {}", buffer.bits_stored, buffer.modality),
        ),
    ];

    for (y, text) in &lines {
        // Shadow first; the glyph pass overdraws it.
        draw_text(
            &mut annotated,
            i64::from(OVERLAY_MARGIN_X) + 1,
            i64::from(*y) + 1,
            text,
            SHADOW_SHADE,
        );
        draw_text(
            &mut annotated,
            i64::from(OVERLAY_MARGIN_X),
            i64::from(*y),
            text,
            TEXT_SHADE,
        );
    }

    annotated
}

/// Draw `text` with the 8x8 bitmap font at `OVERLAY_TEXT_SCALE`, clipping at
/// the frame edges. Characters outside the basic set render as '?'.
fn draw_text(frame: &mut GrayImage, x: i64, y: i64, text: &str, shade: u8) {
    let scale = i64::from(OVERLAY_TEXT_SCALE);
    let mut cursor_x = x;

    for ch in text.chars() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            cursor_x += GLYPH_SIZE * scale;
            continue;
        };
        for (row, row_bits) in glyph.iter().copied().enumerate() {
            for col in 0..GLYPH_SIZE {
                if (row_bits >> col) & 1 == 0 {
                    continue;
                }
                fill_cell(
                    frame,
                    cursor_x + col * scale,
                    y + row as i64 * scale,
                    scale,
                    shade,
                );
            }
        }
        cursor_x += GLYPH_SIZE * scale;
    }
}

fn fill_cell(frame: &mut GrayImage, x: i64, y: i64, scale: i64, shade: u8) {
    for dy in 0..scale {
        for dx in 0..scale {
            let px = x + dx;
            let py = y + dy;
            if px >= 0
                && py >= 0
                && (px as u32) < frame.width()
                && (py as u32) < frame.height()
            {
                frame.put_pixel(px as u32, py as u32, Luma([shade]));
            }
        }
    }
}
