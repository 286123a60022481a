use egui::{Pos2, Rect, Response, Vec2};

use crate::state::TouchPhase;
use crate::store::TextBoxId;

mod router;
pub use router::route_event;

/// Input delivered to the editor, already in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Finger or pointer on the drawing canvas
    Touch { phase: TouchPhase, position: Pos2 },
    /// Drag gesture bound to one text box
    DragTextBox { id: TextBoxId, delta: Vec2 },
    /// Full new content of one text box's input field
    TextChanged { id: TextBoxId, text: String },
}

/// Turns egui drag responses on the canvas into touch events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    touching: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's drag state of the canvas widget
    pub fn process_canvas(&mut self, response: &Response) -> Vec<InputEvent> {
        self.process(
            response.rect,
            response.drag_started(),
            response.drag_stopped(),
            response.interact_pointer_pos(),
        )
    }

    fn process(
        &mut self,
        canvas_rect: Rect,
        started: bool,
        stopped: bool,
        pointer_pos: Option<Pos2>,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_canvas = |pos: Pos2| Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);

        if started {
            if let Some(pos) = pointer_pos {
                self.touching = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::Touch {
                    phase: TouchPhase::Start,
                    position: to_canvas(pos),
                });
            }
        } else if self.touching {
            if let Some(pos) = pointer_pos {
                // Skip frames where the pointer did not move
                if Some(pos) != self.last_pointer_pos {
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::Touch {
                        phase: TouchPhase::Active,
                        position: to_canvas(pos),
                    });
                }
            }
        }

        if stopped && self.touching {
            let last = self.last_pointer_pos.take().unwrap_or(canvas_rect.min);
            self.touching = false;
            events.push(InputEvent::Touch {
                phase: TouchPhase::End,
                position: to_canvas(pointer_pos.unwrap_or(last)),
            });
        }

        events
    }
}
