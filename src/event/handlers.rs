use crate::event::{EditorEvent, EventHandler};

/// Asks egui for a new frame whenever the editor requests a redraw
#[derive(Debug)]
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        if matches!(event, EditorEvent::RedrawRequested) {
            self.ctx.request_repaint();
        }
    }
}

/// Writes every event to the debug log
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        log::debug!("Editor event: {:?}", event);
    }
}
