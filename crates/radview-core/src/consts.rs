/// Lower bound of the window level control range.
pub const WINDOW_LEVEL_MIN: i32 = -2000;

/// Upper bound of the window level control range.
pub const WINDOW_LEVEL_MAX: i32 = 4000;

/// Lower bound of the window width control range.
pub const WINDOW_WIDTH_MIN: i32 = 1;

/// Upper bound of the window width control range.
pub const WINDOW_WIDTH_MAX: i32 = 4000;

/// Window width applied when the source metadata carries none.
pub const FALLBACK_WINDOW_WIDTH: i32 = 400;

/// Smallest zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Largest zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Zoom increment per step; zoom factors stay on this grid.
pub const ZOOM_STEP: f64 = 0.1;

/// Highest sample precision the viewer accepts.
pub const MAX_BITS_STORED: u8 = 16;

/// Minimum pixel count (rows * columns) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Left margin of the burned-in overlay text, in pixels.
pub const OVERLAY_MARGIN_X: u32 = 10;

/// Top of the first overlay line, in pixels.
pub const OVERLAY_TOP_Y: u32 = 10;

/// Vertical distance between overlay lines in a block, in pixels.
pub const OVERLAY_LINE_SPACING: u32 = 20;

/// Distance from the bottom edge to the first bottom overlay line, in pixels.
pub const OVERLAY_BOTTOM_OFFSET: u32 = 60;

/// Integer magnification applied to the 8x8 overlay font.
pub const OVERLAY_TEXT_SCALE: u32 = 2;
