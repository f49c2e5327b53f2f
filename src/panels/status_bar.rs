use crate::PaintApp;

pub fn status_bar(app: &PaintApp, ctx: &egui::Context) {
    let status = app.engine().status();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(status.coords_text());
            ui.separator();
            ui.label(status.size_text());
            ui.separator();
            ui.label(app.engine().state().name());
        });
    });
}
