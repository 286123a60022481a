use crate::app::{EditorAction, PhotoEditorApp};

/// Top bar: tool buttons while idle, undo / eraser / done while editing
pub fn tools_panel(app: &mut PhotoEditorApp, ctx: &egui::Context) {
    let chrome = app.editor().chrome();
    let mut pressed = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if chrome.show_tool_buttons {
                if ui.button("✖").on_hover_text("Close").clicked() {
                    pressed = Some(EditorAction::Close);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if chrome.show_add_text && ui.button("T").on_hover_text("Add text").clicked() {
                        pressed = Some(EditorAction::Text);
                    }
                    if ui.button("🖌").on_hover_text("Brush").clicked() {
                        pressed = Some(EditorAction::Brush);
                    }
                });
            }

            if chrome.show_edit_controls {
                if ui
                    .add_enabled(chrome.undo_enabled, egui::Button::new("Undo"))
                    .clicked()
                {
                    pressed = Some(EditorAction::Undo);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✔ Done").clicked() {
                        pressed = Some(EditorAction::Done);
                    }
                    if chrome.show_add_text && ui.button("T").on_hover_text("Add text").clicked() {
                        pressed = Some(EditorAction::Text);
                    }
                    if chrome.show_eraser_toggle
                        && ui.selectable_label(chrome.eraser_enabled, "Eraser").clicked()
                    {
                        pressed = Some(EditorAction::ToggleEraser);
                    }
                });
            }
        });
    });

    if let Some(action) = pressed {
        log::info!("Action from UI: {:?}", action);
        app.apply(ctx, action);
    }
}
