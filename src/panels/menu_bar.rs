use crate::PaintApp;
use crate::command::Command;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    app.request_command(Command::New);
                    ui.close_menu();
                }
                if ui.button("Save").clicked() {
                    app.request_command(Command::Save);
                    ui.close_menu();
                }
                if ui.button("Save As...").clicked() {
                    app.open_save_as();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Undo").clicked() {
                    app.request_command(Command::Undo);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    app.request_command(Command::Clear);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Help Topics").clicked() {
                    app.show_help = true;
                    ui.close_menu();
                }
                if ui.button("About Paint").clicked() {
                    app.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}
