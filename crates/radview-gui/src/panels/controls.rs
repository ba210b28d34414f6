use radview_core::consts::{
    WINDOW_LEVEL_MAX, WINDOW_LEVEL_MIN, WINDOW_WIDTH_MAX, WINDOW_WIDTH_MIN,
};

use crate::app::RadviewApp;

pub fn show(ctx: &egui::Context, app: &mut RadviewApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        file_row(ui, ctx, app);
        ui.add_space(4.0);
        windowing_rows(ui, ctx, app);
        ui.add_space(4.0);
        zoom_row(ui, ctx, app);
        ui.add_space(2.0);
        ui.label(&app.ui_state.status);
        ui.add_space(6.0);
    });
}

fn file_row(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut RadviewApp) {
    ui.horizontal(|ui| {
        if ui.button("Open…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("DICOM", &["dcm"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                app.open_file(ctx, &path);
            }
        }
        if let Some(ref path) = app.ui_state.file_path {
            ui.label(path.display().to_string());
        }
    });
}

fn windowing_rows(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut RadviewApp) {
    let loaded = app.session.is_loaded();
    ui.add_enabled_ui(loaded, |ui| {
        ui.horizontal(|ui| {
            ui.label("Window Level:");
            let changed = ui
                .add(egui::Slider::new(
                    &mut app.ui_state.controls.window_level,
                    WINDOW_LEVEL_MIN..=WINDOW_LEVEL_MAX,
                ))
                .changed();
            if changed {
                let value = app.ui_state.controls.window_level;
                app.apply(ctx, |session| session.set_window_level(value));
            }
            ui.label(format!("WL: {}", app.ui_state.controls.window_level));
        });

        ui.horizontal(|ui| {
            ui.label("Window Width:");
            let changed = ui
                .add(egui::Slider::new(
                    &mut app.ui_state.controls.window_width,
                    WINDOW_WIDTH_MIN..=WINDOW_WIDTH_MAX,
                ))
                .changed();
            if changed {
                let value = app.ui_state.controls.window_width;
                app.apply(ctx, |session| session.set_window_width(value));
            }
            ui.label(format!("WW: {}", app.ui_state.controls.window_width));
        });

        if ui.button("Reset WL/WW").clicked() {
            app.apply(ctx, |session| session.reset_windowing());
        }
    });
}

fn zoom_row(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut RadviewApp) {
    ui.add_enabled_ui(app.session.is_loaded(), |ui| {
        ui.horizontal(|ui| {
            if ui.button("Zoom −").clicked() {
                app.apply(ctx, |session| session.zoom_out());
            }
            if ui.button("Zoom +").clicked() {
                app.apply(ctx, |session| session.zoom_in());
            }
            if ui.button("Reset Zoom").clicked() {
                app.apply(ctx, |session| session.reset_zoom());
            }
            ui.label(format!("Zoom: {}%", app.session.zoom_percent()));
        });
    });
}
