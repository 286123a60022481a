use egui::TextureHandle;

use crate::config::EditorConfig;
use crate::event::{LogEventHandler, RepaintHandler};
use crate::input::{route_event, InputEvent, InputHandler};
use crate::panels;
use crate::photo::Photo;
use crate::renderer::Renderer;
use crate::state::Editor;
use crate::store::TextBoxId;

/// Button presses from the editor chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Leave the editor
    Close,
    Brush,
    Text,
    ToggleEraser,
    Undo,
    Done,
}

/// We derive Deserialize/Serialize so the editor config survives restarts.
/// Annotations themselves are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PhotoEditorApp {
    config: EditorConfig,
    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    /// Decoded photo waiting to be uploaded on the first frame
    #[serde(skip)]
    pending_photo: Option<Photo>,
    #[serde(skip)]
    photo_texture: Option<TextureHandle>,
    /// Text box that should grab keyboard focus on the next frame
    #[serde(skip)]
    focus_request: Option<TextBoxId>,
}

impl PhotoEditorApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins over the one restored from storage.
    pub fn new(cc: &eframe::CreationContext<'_>, photo: Option<Photo>, config: Option<EditorConfig>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if let Some(config) = config {
            app.config = config;
        }
        app.editor = Editor::new(app.config.clone());
        app.editor
            .event_bus
            .subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));
        app.editor.event_bus.subscribe(Box::new(LogEventHandler));
        app.pending_photo = photo;
        app
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn photo_texture(&self) -> Option<&TextureHandle> {
        self.photo_texture.as_ref()
    }

    pub fn take_focus_request(&mut self) -> Option<TextBoxId> {
        self.focus_request.take()
    }

    /// Apply a chrome button press. Rejected actions are logged and dropped.
    pub fn apply(&mut self, ctx: &egui::Context, action: EditorAction) {
        let result = match action {
            EditorAction::Close => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                Ok(())
            }
            EditorAction::Brush => self.editor.select_brush(),
            EditorAction::Text => self.editor.select_text().map(|added| {
                if added.is_some() {
                    self.focus_request = added;
                }
            }),
            EditorAction::ToggleEraser => self.editor.toggle_eraser(),
            EditorAction::Undo => {
                if self.editor.can_undo() {
                    self.editor.undo().map(|_| ())
                } else {
                    log::debug!("Undo pressed with nothing to undo");
                    Ok(())
                }
            }
            EditorAction::Done => self.editor.done(),
        };

        if let Err(err) = result {
            log::debug!("Action {:?} rejected: {}", action, err);
        }
    }

    /// Route input gathered from the canvas or the text overlay
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            route_event(event, &mut self.editor);
        }
    }

    /// Feed this frame's canvas response through the touch handler
    pub fn handle_canvas_response(&mut self, response: &egui::Response) {
        self.editor.set_viewport(response.rect.size());
        let events = self.input.process_canvas(response);
        self.handle_input(&events);
    }

    fn upload_pending_photo(&mut self, ctx: &egui::Context) {
        if let Some(photo) = self.pending_photo.take() {
            let texture = ctx.load_texture("photo", photo.into_color_image(), egui::TextureOptions::LINEAR);
            self.photo_texture = Some(texture);
        }
    }
}

impl eframe::App for PhotoEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.upload_pending_photo(ctx);

        panels::tools_panel(self, ctx);
        let canvas_rect = panels::central_panel(self, ctx);
        panels::text_overlay(self, ctx, canvas_rect);
    }
}
