mod edit_state;
mod editor;

pub use edit_state::{EditMode, EditState};
pub use editor::{ChromeState, Editor, TouchPhase};
