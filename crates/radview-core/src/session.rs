use std::path::Path;

use tracing::{debug, info};

use crate::buffer::SampleBuffer;
use crate::consts::{
    FALLBACK_WINDOW_WIDTH, WINDOW_LEVEL_MAX, WINDOW_LEVEL_MIN, WINDOW_WIDTH_MAX, WINDOW_WIDTH_MIN,
    ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use crate::error::{RadviewError, Result};
use crate::io::Decoder;
use crate::render::{apply_window, compose_overlay, scale_frame, RenderedFrame};

/// User-adjustable view parameters, always within their control ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustmentState {
    pub window_level: i32,
    pub window_width: i32,
    pub zoom_factor: f64,
}

/// Values captured once per load and restored by the reset operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionDefaults {
    pub window_level: i32,
    pub window_width: i32,
    pub zoom_factor: f64,
}

/// The one stateful component of the viewer.
///
/// Owns the current sample buffer, the adjustment state and the per-load
/// defaults, and re-runs the windowing -> overlay -> zoom pipeline on every
/// change, emitting a fresh [`RenderedFrame`] from each operation.
///
/// Starts empty; every operation other than a load returns
/// [`RadviewError::InvalidState`] until a load succeeds. All operations are
/// synchronous and run to completion on the calling thread.
pub struct ViewSession {
    buffer: Option<SampleBuffer>,
    adjust: AdjustmentState,
    defaults: SessionDefaults,
    /// Windowed and annotated frame at native resolution. Zoom-only changes
    /// rescale from this instead of re-running the whole pipeline; the
    /// overlay is always drawn before scaling so text is never distorted.
    composited: Option<RenderedFrame>,
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSession {
    pub fn new() -> Self {
        Self {
            buffer: None,
            adjust: AdjustmentState {
                window_level: 0,
                window_width: FALLBACK_WINDOW_WIDTH,
                zoom_factor: 1.0,
            },
            defaults: SessionDefaults {
                window_level: 0,
                window_width: FALLBACK_WINDOW_WIDTH,
                zoom_factor: 1.0,
            },
            composited: None,
        }
    }

    /// Decode `path` and install the result as the current image.
    ///
    /// A decode failure propagates to the caller and leaves the previous
    /// session state fully intact.
    pub fn load(&mut self, decoder: &dyn Decoder, path: &Path) -> Result<RenderedFrame> {
        let buffer = decoder.decode(path)?;
        Ok(self.load_buffer(buffer))
    }

    /// Install an already-decoded buffer, capture the per-load defaults and
    /// render the first frame.
    ///
    /// The default width falls back to 400 when the source metadata gives a
    /// non-positive one; the default level is taken from the source as-is,
    /// including 0. Zoom always restarts at 1.0.
    pub fn load_buffer(&mut self, buffer: SampleBuffer) -> RenderedFrame {
        let width = if buffer.window_width > 0 {
            buffer.window_width
        } else {
            FALLBACK_WINDOW_WIDTH
        };

        self.defaults = SessionDefaults {
            window_level: buffer.window_center.clamp(WINDOW_LEVEL_MIN, WINDOW_LEVEL_MAX),
            window_width: width.clamp(WINDOW_WIDTH_MIN, WINDOW_WIDTH_MAX),
            zoom_factor: 1.0,
        };
        self.adjust = AdjustmentState {
            window_level: self.defaults.window_level,
            window_width: self.defaults.window_width,
            zoom_factor: self.defaults.zoom_factor,
        };

        info!(
            rows = buffer.rows(),
            columns = buffer.columns(),
            bits_stored = buffer.bits_stored,
            window_level = self.adjust.window_level,
            window_width = self.adjust.window_width,
            "Installed sample buffer"
        );

        self.buffer = Some(buffer);
        self.recomposite();
        self.rescaled()
    }

    /// Set the window level, clamped to its control range, and re-render.
    pub fn set_window_level(&mut self, value: i32) -> Result<RenderedFrame> {
        self.require_loaded("set_window_level")?;
        self.adjust.window_level = value.clamp(WINDOW_LEVEL_MIN, WINDOW_LEVEL_MAX);
        debug!(window_level = self.adjust.window_level, "Window level changed");
        self.recomposite();
        Ok(self.rescaled())
    }

    /// Set the window width, clamped to its control range, and re-render.
    pub fn set_window_width(&mut self, value: i32) -> Result<RenderedFrame> {
        self.require_loaded("set_window_width")?;
        self.adjust.window_width = value.clamp(WINDOW_WIDTH_MIN, WINDOW_WIDTH_MAX);
        debug!(window_width = self.adjust.window_width, "Window width changed");
        self.recomposite();
        Ok(self.rescaled())
    }

    /// Step the zoom in by one increment; a legal no-op at the upper bound.
    pub fn zoom_in(&mut self) -> Result<RenderedFrame> {
        self.step_zoom(ZOOM_STEP, "zoom_in")
    }

    /// Step the zoom out by one increment; a legal no-op at the lower bound.
    pub fn zoom_out(&mut self) -> Result<RenderedFrame> {
        self.step_zoom(-ZOOM_STEP, "zoom_out")
    }

    /// Set the zoom factor directly, quantized to the step grid and clamped
    /// to the zoom range.
    pub fn set_zoom(&mut self, factor: f64) -> Result<RenderedFrame> {
        self.require_loaded("set_zoom")?;
        self.adjust.zoom_factor = quantize_zoom(factor);
        debug!(zoom_factor = self.adjust.zoom_factor, "Zoom changed");
        Ok(self.rescaled())
    }

    /// Restore the window level and width captured at the last load.
    pub fn reset_windowing(&mut self) -> Result<RenderedFrame> {
        self.require_loaded("reset_windowing")?;
        self.adjust.window_level = self.defaults.window_level;
        self.adjust.window_width = self.defaults.window_width;
        debug!(
            window_level = self.adjust.window_level,
            window_width = self.adjust.window_width,
            "Windowing reset"
        );
        self.recomposite();
        Ok(self.rescaled())
    }

    /// Restore the zoom factor captured at the last load.
    pub fn reset_zoom(&mut self) -> Result<RenderedFrame> {
        self.require_loaded("reset_zoom")?;
        self.adjust.zoom_factor = self.defaults.zoom_factor;
        debug!(zoom_factor = self.adjust.zoom_factor, "Zoom reset");
        Ok(self.rescaled())
    }

    pub fn is_loaded(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&SampleBuffer> {
        self.buffer.as_ref()
    }

    /// Current adjustment values, for control resynchronization.
    pub fn adjustments(&self) -> AdjustmentState {
        self.adjust
    }

    pub fn defaults(&self) -> SessionDefaults {
        self.defaults
    }

    /// Zoom as a whole percentage, for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.adjust.zoom_factor * 100.0).round() as u32
    }

    fn step_zoom(&mut self, delta: f64, operation: &'static str) -> Result<RenderedFrame> {
        self.require_loaded(operation)?;
        self.adjust.zoom_factor = quantize_zoom(self.adjust.zoom_factor + delta);
        debug!(zoom_factor = self.adjust.zoom_factor, "Zoom changed");
        Ok(self.rescaled())
    }

    fn require_loaded(&self, operation: &'static str) -> Result<&SampleBuffer> {
        self.buffer
            .as_ref()
            .ok_or(RadviewError::InvalidState { operation })
    }

    /// Re-run windowing and overlay at native resolution from the raw
    /// samples. Windowing is never derived from a previous 8-bit frame, so
    /// rounding error cannot compound across adjustments.
    fn recomposite(&mut self) {
        if let Some(ref buffer) = self.buffer {
            let windowed = apply_window(buffer, self.adjust.window_level, self.adjust.window_width);
            self.composited = Some(compose_overlay(
                &windowed,
                buffer,
                self.adjust.window_level,
                self.adjust.window_width,
            ));
        }
    }

    /// Scale the cached composited frame to the current zoom.
    fn rescaled(&self) -> RenderedFrame {
        let composited = self
            .composited
            .as_ref()
            .expect("composited frame exists while a buffer is installed");
        scale_frame(composited, self.adjust.zoom_factor)
    }
}

/// Snap a zoom factor onto the 0.1 grid and clamp it to the zoom range, so
/// repeated steps do not drift.
fn quantize_zoom(factor: f64) -> f64 {
    ((factor * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX)
}
