mod overlay;
mod windowing;
mod zoom;

pub use overlay::compose_overlay;
pub use windowing::apply_window;
pub use zoom::scale_frame;

/// An 8-bit grayscale frame ready for display.
pub type RenderedFrame = image::GrayImage;
