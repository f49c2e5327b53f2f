use crate::PaintApp;
use crate::input::PointerFrame;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let (engine, input, texture) = app.canvas_parts();
            let (width, height) = engine.surface().dimensions();

            let (response, painter) = ui.allocate_painter(
                egui::vec2(width as f32, height as f32),
                egui::Sense::click_and_drag(),
            );
            let rect = response.rect;
            let visible = rect.intersect(ui.clip_rect());

            // Presses on popups covering the canvas are not ours
            let mut frame = PointerFrame::from_context(ctx);
            frame.pressed &= response.hovered();

            for event in input.process(frame, rect, visible, [width, height]) {
                engine.handle_input(&event);
            }

            if response.hovered() {
                ctx.set_cursor_icon(engine.cursor());
            }

            painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
            painter.image(
                texture.texture_id(ctx, engine.surface()),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
    });
}
