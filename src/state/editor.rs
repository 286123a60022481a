//! The edit mode controller and owner of all annotation state.
//!
//! `Editor` gates which store receives input based on the current
//! [`EditState`], decides which store an undo applies to, and reports what
//! the surrounding controls should show through [`ChromeState`].
//!
//! All rejected operations return an [`EditorError`] and leave every store
//! untouched; the UI only logs them.
use egui::{Pos2, Vec2};

use super::{EditMode, EditState};
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus, UndoTarget};
use crate::store::{StrokeStore, TextBoxId, TextStore};
use crate::transform;

/// Phase of a touch gesture on the drawing canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Active,
    End,
}

/// Which controls should be visible or enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    /// Close / brush / text buttons, shown while idle
    pub show_tool_buttons: bool,
    /// The add-text button, also offered while editing text
    pub show_add_text: bool,
    /// Undo / done, shown while a tool is active
    pub show_edit_controls: bool,
    pub show_eraser_toggle: bool,
    pub eraser_enabled: bool,
    pub undo_enabled: bool,
}

#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    state: EditState,
    strokes: StrokeStore,
    texts: TextStore,
    /// Notified of mode changes, finished gestures and redraw requests
    pub event_bus: EventBus,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            strokes: StrokeStore::new(config.brush, config.eraser_width),
            texts: TextStore::new(),
            state: EditState::Idle,
            event_bus: EventBus::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the config. Existing strokes keep their paint; new strokes and
    /// the eraser pick up the new values.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.strokes.set_eraser_width(config.eraser_width);
        self.config = config;
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.config.viewport = viewport;
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn mode(&self) -> EditMode {
        self.state.mode()
    }

    pub fn eraser_enabled(&self) -> bool {
        self.state.eraser_enabled()
    }

    pub fn strokes(&self) -> &StrokeStore {
        &self.strokes
    }

    pub fn texts(&self) -> &TextStore {
        &self.texts
    }

    fn transition_to(&mut self, new_state: EditState) -> EditorResult<()> {
        if !self.state.can_transition_to(&new_state) {
            return Err(EditorError::InvalidTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }

        let old = self.state;
        self.state = new_state;
        log::info!("Edit mode: {} -> {}", old.name(), new_state.name());
        self.event_bus.emit(EditorEvent::ModeChanged { old, new: new_state });
        Ok(())
    }

    pub fn select_brush(&mut self) -> EditorResult<()> {
        self.transition_to(EditState::Brush { erasing: false })
    }

    /// Enter text mode, adding a fresh empty box unless the newest one is
    /// still empty. Returns the id of the added box.
    ///
    /// Pressing "text" again while already in text mode only adds the box.
    pub fn select_text(&mut self) -> EditorResult<Option<TextBoxId>> {
        if self.state != EditState::Text {
            self.transition_to(EditState::Text)?;
        }

        let matrix = transform::make_matrix(self.config.text_box_width(), &self.config);
        let added = self.texts.add_text_box(self.config.brush.color, matrix);
        if let Some(id) = added {
            self.event_bus.emit(EditorEvent::TextBoxAdded { id });
        }
        Ok(added)
    }

    pub fn toggle_eraser(&mut self) -> EditorResult<()> {
        let EditState::Brush { erasing } = self.state else {
            return Err(EditorError::InvalidTransition {
                from: self.state.name(),
                to: "eraser",
            });
        };
        self.transition_to(EditState::Brush { erasing: !erasing })
    }

    /// Leave the current tool. The eraser is always switched off.
    pub fn done(&mut self) -> EditorResult<()> {
        self.transition_to(EditState::Idle)
    }

    pub fn can_undo(&self) -> bool {
        match self.state.mode() {
            EditMode::None => false,
            EditMode::Brush => self.strokes.can_undo(),
            EditMode::Text => !self.texts.is_empty(),
        }
    }

    /// Undo in the store that belongs to the current mode
    pub fn undo(&mut self) -> EditorResult<UndoTarget> {
        let target = match self.state.mode() {
            EditMode::None => return Err(EditorError::UndoUnavailable(self.state.name())),
            EditMode::Brush => {
                self.strokes.undo_last()?;
                UndoTarget::Stroke
            }
            EditMode::Text => UndoTarget::TextBox(self.texts.undo_last()?.id()),
        };
        self.event_bus.emit(EditorEvent::Undone(target));
        Ok(target)
    }

    /// Feed one canvas touch. Only the brush modes draw; elsewhere touches are
    /// ignored.
    pub fn touch(&mut self, phase: TouchPhase, pos: Pos2) {
        match (self.state, phase) {
            (EditState::Brush { erasing: false }, TouchPhase::Start) => {
                self.strokes.begin_stroke(pos);
            }
            (EditState::Brush { erasing: false }, TouchPhase::Active) => {
                self.strokes.extend_stroke(pos);
            }
            (EditState::Brush { erasing: false }, TouchPhase::End) => {
                self.strokes.finish_stroke(self.config.brush);
                self.event_bus.emit(EditorEvent::StrokeFinished {
                    completed: self.strokes.completed_len(),
                });
            }
            (EditState::Brush { erasing: true }, TouchPhase::Start) => {
                self.strokes.begin_erase(pos);
            }
            (EditState::Brush { erasing: true }, TouchPhase::Active) => {
                self.strokes.extend_erase(pos);
            }
            (EditState::Brush { erasing: true }, TouchPhase::End) => {
                self.strokes.end_erase();
                self.event_bus.emit(EditorEvent::EraseFinished);
                // Cleared pixels are not picked up by an additive repaint
                self.event_bus.emit(EditorEvent::RedrawRequested);
            }
            (state, _) => {
                log::debug!("Ignoring touch {:?} in {} mode", phase, state.name());
            }
        }
    }

    fn require_text_mode(&self, action: &'static str) -> EditorResult<()> {
        if self.state != EditState::Text {
            return Err(EditorError::WrongMode {
                action,
                mode: self.state.name(),
            });
        }
        Ok(())
    }

    /// Move a text box by a drag delta, in text mode only
    pub fn drag_text_box(&mut self, id: TextBoxId, delta: Vec2) -> EditorResult<()> {
        self.require_text_mode("text drag")?;
        self.texts
            .update_transform(id, f64::from(delta.x), f64::from(delta.y))
    }

    /// Replace a box's content, in text mode only
    pub fn edit_text(&mut self, id: TextBoxId, text: impl Into<String>) -> EditorResult<()> {
        self.require_text_mode("text edit")?;
        self.texts.update_text(id, text)
    }

    pub fn chrome(&self) -> ChromeState {
        let idle = self.state.is_idle();
        ChromeState {
            show_tool_buttons: idle,
            show_add_text: idle || self.state == EditState::Text,
            show_edit_controls: !idle,
            show_eraser_toggle: self.state.mode() == EditMode::Brush,
            eraser_enabled: self.state.eraser_enabled(),
            undo_enabled: self.can_undo(),
        }
    }
}
