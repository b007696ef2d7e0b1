use egui::color_picker::{self, Alpha};

use crate::PixelGridApp;
use crate::color::ColorMode;

pub fn toolbar_panel(app: &mut PixelGridApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Resize").clicked() {
                app.open_resize_prompt();
            }
            if ui.button("Clear").clicked() {
                app.toolbar.clear(&mut app.state);
            }

            ui.separator();

            ui.label("Color:");
            let mut color = app.state.colors.fixed_color();
            if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                app.toolbar.set_fixed_color(color, &mut app.state);
            }

            let mut random = app.state.colors.mode() == ColorMode::Random;
            if ui.checkbox(&mut random, "Random colors").changed() {
                log::info!("Random colors toggled: {}", random);
                app.toolbar.toggle_color_mode(random, &mut app.state);
            }
            ui.label(format!("Mode: {}", app.toolbar.mode_label()));

            ui.separator();

            let side = app.state.side();
            ui.label(format!("{side} × {side}"));
        });
    });
}
