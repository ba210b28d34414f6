use radview_core::render::RenderedFrame;

/// Convert an 8-bit grayscale frame to an egui ColorImage.
pub fn frame_to_color_image(frame: &RenderedFrame) -> egui::ColorImage {
    let pixels = frame
        .pixels()
        .map(|p| egui::Color32::from_gray(p.0[0]))
        .collect();

    egui::ColorImage {
        size: [frame.width() as usize, frame.height() as usize],
        pixels,
        source_size: Default::default(),
    }
}
