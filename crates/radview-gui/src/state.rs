use std::path::PathBuf;

/// Slider positions mirrored from the session, so the controls always show
/// the clamped numeric state rather than whatever the user dragged.
#[derive(Default)]
pub struct ControlState {
    pub window_level: i32,
    pub window_width: i32,
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
}

/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    pub file_path: Option<PathBuf>,
    pub status: String,
    pub controls: ControlState,
}
