use std::path::Path;

use radview_core::error::Result;
use radview_core::io::DicomFileDecoder;
use radview_core::render::RenderedFrame;
use radview_core::session::ViewSession;
use tracing::warn;

use crate::convert::frame_to_color_image;
use crate::panels;
use crate::state::{UiState, ViewportState};

/// Thin synchronous shell around a [`ViewSession`]: every control event runs
/// the session operation to completion on the UI thread and displays the
/// frame it emits.
#[derive(Default)]
pub struct RadviewApp {
    pub session: ViewSession,
    pub decoder: DicomFileDecoder,
    pub ui_state: UiState,
    pub viewport: ViewportState,
}

impl RadviewApp {
    /// Load a study and resynchronize every control with the session state.
    /// A failed load keeps the previous image and controls in place.
    pub fn open_file(&mut self, ctx: &egui::Context, path: &Path) {
        match self.session.load(&self.decoder, path) {
            Ok(frame) => {
                self.ui_state.file_path = Some(path.to_path_buf());
                self.sync_controls();
                self.ui_state.status = format!("Opened {}", path.display());
                self.show_frame(ctx, &frame);
            }
            Err(err) => {
                warn!(error = %err, "Load failed");
                self.ui_state.status = format!("Load failed: {err}");
            }
        }
    }

    /// Apply a session operation and display the frame it emits.
    pub fn apply(
        &mut self,
        ctx: &egui::Context,
        op: impl FnOnce(&mut ViewSession) -> Result<RenderedFrame>,
    ) {
        match op(&mut self.session) {
            Ok(frame) => {
                self.sync_controls();
                self.show_frame(ctx, &frame);
            }
            Err(err) => {
                self.ui_state.status = format!("{err}");
            }
        }
    }

    /// Copy the session's clamped adjustment values back into the sliders.
    fn sync_controls(&mut self) {
        let adjust = self.session.adjustments();
        self.ui_state.controls.window_level = adjust.window_level;
        self.ui_state.controls.window_width = adjust.window_width;
    }

    fn show_frame(&mut self, ctx: &egui::Context, frame: &RenderedFrame) {
        let image = frame_to_color_image(frame);
        // The frame is already zoom-scaled by the core; display it 1:1.
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
    }
}

impl eframe::App for RadviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
