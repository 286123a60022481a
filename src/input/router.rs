use crate::input::InputEvent;
use crate::state::Editor;

/// Routes an input event to the part of the editor that owns its target.
///
/// Events that no longer apply (stale text boxes, touches outside a brush
/// mode) are dropped after logging.
pub fn route_event(event: &InputEvent, editor: &mut Editor) {
    let result = match event {
        InputEvent::Touch { phase, position } => {
            editor.touch(*phase, *position);
            Ok(())
        }
        InputEvent::DragTextBox { id, delta } => editor.drag_text_box(*id, *delta),
        InputEvent::TextChanged { id, text } => editor.edit_text(*id, text.clone()),
    };

    if let Err(err) = result {
        log::debug!("Dropped input {:?}: {}", event, err);
    }
}
