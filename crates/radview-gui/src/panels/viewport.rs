use crate::app::RadviewApp;

pub fn show(ctx: &egui::Context, app: &mut RadviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let texture = app.viewport.texture.as_ref().map(|t| (t.id(), t.size()));

        if let Some((texture_id, size)) = texture {
            egui::ScrollArea::both().show(ui, |ui| {
                let desired = egui::vec2(size[0] as f32, size[1] as f32);
                let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
                ui.painter().image(
                    texture_id,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Open a DICOM file to begin")
                        .size(18.0)
                        .color(egui::Color32::from_gray(100)),
                );
            });
        }
    });
}
