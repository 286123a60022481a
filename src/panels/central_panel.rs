use crate::app::PhotoEditorApp;

/// The drawing canvas. Returns the canvas rect so overlays can be placed on it.
pub fn central_panel(app: &mut PhotoEditorApp, ctx: &egui::Context) -> egui::Rect {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());

            app.handle_canvas_response(&response);

            let rect = response.rect;
            app.renderer()
                .render(&painter, rect, app.editor(), app.photo_texture());
            rect
        })
        .inner
}
