/// The editor's tool state machine.
///
/// The eraser flag only exists inside the brush state, so leaving the brush
/// (or any mode) for idle always drops it.
///
/// ```text
///              select_brush          toggle_eraser
///   ┌──────┐ ─────────────► ┌───────┐ ◄──────────► ┌──────────────┐
///   │      │                │ Brush │              │ Brush+Eraser │
///   │ Idle │ ◄───────────── └───────┘              └──────┬───────┘
///   │      │      done                                    │ done
///   │      │ ◄────────────────────────────────────────────┘
///   │      │  select_text   ┌──────┐
///   │      │ ─────────────► │ Text │
///   │      │ ◄───────────── └──────┘
///   └──────┘      done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// No tool selected; the photo and annotations are only displayed
    #[default]
    Idle,
    /// Freehand drawing, or erasing when `erasing` is set
    Brush { erasing: bool },
    /// Text boxes are editable and draggable
    Text,
}

/// The active tool, without the eraser sub-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    None,
    Brush,
    Text,
}

impl EditState {
    pub fn mode(&self) -> EditMode {
        match self {
            EditState::Idle => EditMode::None,
            EditState::Brush { .. } => EditMode::Brush,
            EditState::Text => EditMode::Text,
        }
    }

    pub fn eraser_enabled(&self) -> bool {
        matches!(self, EditState::Brush { erasing: true })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditState::Idle => "none",
            EditState::Brush { erasing: false } => "brush",
            EditState::Brush { erasing: true } => "eraser",
            EditState::Text => "text",
        }
    }

    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditState) -> bool {
        match (self, new_state) {
            // Tools are only picked from idle
            (EditState::Idle, EditState::Brush { erasing: false }) => true,
            (EditState::Idle, EditState::Text) => true,

            // The eraser flips within the brush
            (EditState::Brush { erasing: a }, EditState::Brush { erasing: b }) => a != b,

            // Every tool can be left
            (EditState::Brush { .. } | EditState::Text, EditState::Idle) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_only_start_from_idle() {
        let text = EditState::Text;
        assert!(!text.can_transition_to(&EditState::Brush { erasing: false }));
        assert!(!EditState::Brush { erasing: false }.can_transition_to(&EditState::Text));
        assert!(!EditState::Idle.can_transition_to(&EditState::Brush { erasing: true }));
        assert!(!EditState::Idle.can_transition_to(&EditState::Idle));
    }

    #[test]
    fn test_eraser_flag_only_inside_brush() {
        assert!(EditState::Brush { erasing: true }.eraser_enabled());
        assert!(!EditState::Brush { erasing: false }.eraser_enabled());
        assert!(!EditState::Idle.eraser_enabled());
        assert_eq!(EditState::Brush { erasing: true }.mode(), EditMode::Brush);
    }
}
