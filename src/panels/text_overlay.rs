use egui::{Color32, FontId, Sense};
use kurbo::Affine;

use crate::app::PhotoEditorApp;
use crate::input::InputEvent;
use crate::state::EditMode;
use crate::store::TextBoxId;
use crate::transform;

/// Editable input fields for every text box, shown only in text mode.
///
/// Each field carries a drag handle bound to its own box; edits and drags are
/// collected first and routed once all fields are laid out.
pub fn text_overlay(app: &mut PhotoEditorApp, ctx: &egui::Context, canvas: egui::Rect) {
    if app.editor().mode() != EditMode::Text {
        return;
    }

    let config = app.editor().config().clone();
    let boxes: Vec<(TextBoxId, String, Affine, Color32)> = app
        .editor()
        .texts()
        .boxes()
        .iter()
        .map(|b| (b.id(), b.text().to_owned(), b.matrix(), b.color()))
        .collect();
    let focus = app.take_focus_request();

    let mut events = Vec::new();
    for (id, mut text, matrix, color) in boxes {
        let overlay = transform::overlay_transform(matrix, config.text_box_size(), config.overlay_baseline_shift);
        let pos = canvas.min + transform::origin(overlay).to_vec2();

        // The handle hangs off the field's left edge so the field itself sits
        // exactly where the glyphs are painted outside text mode
        egui::Area::new(egui::Id::new(("text_box_handle", id)))
            .fixed_pos(pos)
            .pivot(egui::Align2::RIGHT_TOP)
            .show(ctx, |ui| {
                let handle = ui
                    .add(egui::Label::new("✥").sense(Sense::drag()))
                    .on_hover_cursor(egui::CursorIcon::Grab);
                if handle.dragged() {
                    events.push(InputEvent::DragTextBox {
                        id,
                        delta: handle.drag_delta(),
                    });
                }
            });

        egui::Area::new(egui::Id::new(("text_box", id)))
            .fixed_pos(pos)
            .show(ctx, |ui| {
                ui.set_width(config.text_box_width());
                let field = ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(FontId::proportional(config.font_size))
                        .text_color(color)
                        .frame(false)
                        .desired_rows(1)
                        .desired_width(config.text_box_width()),
                );
                if focus == Some(id) {
                    field.request_focus();
                }
                if field.changed() {
                    events.push(InputEvent::TextChanged { id, text });
                }
            });
    }

    app.handle_input(&events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EditorAction;

    #[test]
    fn test_field_sits_on_the_overlay_origin() {
        let ctx = egui::Context::default();
        let mut app = PhotoEditorApp::default();
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 30.0), egui::vec2(390.0, 844.0));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            app.apply(ctx, EditorAction::Text);
            text_overlay(&mut app, ctx, canvas);
        });

        let text_box = &app.editor().texts().boxes()[0];
        let config = app.editor().config();
        let overlay = transform::overlay_transform(
            text_box.matrix(),
            config.text_box_size(),
            config.overlay_baseline_shift,
        );
        let expected = canvas.min + transform::origin(overlay).to_vec2();

        let field = ctx
            .memory(|mem| mem.area_rect(egui::Id::new(("text_box", text_box.id()))))
            .expect("field area");
        assert!((field.min - expected).length() < 0.5, "{:?} != {:?}", field.min, expected);
    }
}
