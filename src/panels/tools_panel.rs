use image::Rgba;

use crate::PaintApp;
use crate::components::ToolButton;
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(96.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.engine().active_tool();
            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, active == Some(tool)).show(ui).clicked() {
                        app.engine_mut().select_tool(tool);
                    }
                }
            });

            ui.separator();

            let [r, g, b, a] = app.engine().style().color().0;
            let mut color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.engine_mut().set_color(Rgba(color.to_srgba_unmultiplied()));
                }
            });

            let width = app.engine().style().width();
            let presets = app.config().stroke_width_presets.clone();
            egui::ComboBox::from_label("Size")
                .selected_text(format!("{width}px"))
                .show_ui(ui, |ui| {
                    for preset in presets {
                        if ui.selectable_label(preset == width, format!("{preset}px")).clicked() {
                            if let Err(err) = app.engine_mut().set_width(preset) {
                                log::warn!("Rejected stroke width {preset}: {err}");
                            }
                        }
                    }
                });
        });
}
