use crate::state::EditState;
use crate::store::TextBoxId;

/// Which store an undo was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoTarget {
    Stroke,
    TextBox(TextBoxId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ModeChanged {
        old: EditState,
        new: EditState,
    },
    /// A brush stroke was frozen; `completed` is the new number of finished strokes
    StrokeFinished {
        completed: usize,
    },
    EraseFinished,
    TextBoxAdded {
        id: TextBoxId,
    },
    Undone(UndoTarget),
    /// Content changed in a way the canvas cannot pick up on its own
    RedrawRequested,
}
