use egui::Pos2;

use crate::error::{EditorError, EditorResult};
use crate::stroke::{EraserStroke, PaintStyle, Stroke};

/// Freehand strokes plus the session-wide eraser path.
///
/// The last stroke in the sequence is always the "current" one that the next
/// gesture draws into; every stroke before it is finished and never touched
/// again except by undo.
#[derive(Debug, Clone)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    eraser: EraserStroke,
    /// Set between the start and end of a gesture
    touch_active: bool,
}

impl StrokeStore {
    pub fn new(paint: PaintStyle, eraser_width: f32) -> Self {
        Self {
            strokes: vec![Stroke::new(paint)],
            eraser: EraserStroke::new(eraser_width),
            touch_active: false,
        }
    }

    /// All strokes, the current (unfinished) one last
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current(&self) -> &Stroke {
        // The sequence is never emptied: undo refuses to remove the last stroke
        &self.strokes[self.strokes.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Stroke {
        let last = self.strokes.len() - 1;
        &mut self.strokes[last]
    }

    pub fn eraser(&self) -> &EraserStroke {
        &self.eraser
    }

    pub(crate) fn set_eraser_width(&mut self, width: f32) {
        self.eraser.set_width(width);
    }

    pub fn is_touch_active(&self) -> bool {
        self.touch_active
    }

    /// Number of finished strokes, excluding the current placeholder
    pub fn completed_len(&self) -> usize {
        self.strokes.len() - 1
    }

    pub fn can_undo(&self) -> bool {
        self.strokes.len() >= 2
    }

    /// Move the pen of the current stroke to `pos` and start a gesture
    pub fn begin_stroke(&mut self, pos: Pos2) {
        self.touch_active = true;
        self.current_mut().path_mut().move_to(pos);
    }

    /// Draw a segment to `pos`. Ignored outside of a gesture.
    pub fn extend_stroke(&mut self, pos: Pos2) {
        if !self.touch_active {
            log::debug!("Ignoring stroke move at {:?}: no active touch", pos);
            return;
        }
        self.current_mut().path_mut().line_to(pos);
    }

    /// Freeze the current stroke and open a new empty one with `paint`
    pub fn finish_stroke(&mut self, paint: PaintStyle) {
        self.touch_active = false;
        self.strokes.push(Stroke::new(paint));
    }

    /// Remove the most recently finished stroke.
    ///
    /// The removed stroke is returned with its path already reset.
    pub fn undo_last(&mut self) -> EditorResult<Stroke> {
        if !self.can_undo() {
            return Err(EditorError::NothingToUndo);
        }
        let index = self.strokes.len() - 2;
        self.strokes[index].path_mut().reset();
        Ok(self.strokes.remove(index))
    }

    pub fn begin_erase(&mut self, pos: Pos2) {
        self.touch_active = true;
        self.eraser.path_mut().move_to(pos);
    }

    pub fn extend_erase(&mut self, pos: Pos2) {
        if !self.touch_active {
            log::debug!("Ignoring eraser move at {:?}: no active touch", pos);
            return;
        }
        self.eraser.path_mut().line_to(pos);
    }

    /// End the eraser gesture. The eraser path is kept as is.
    pub fn end_erase(&mut self) {
        self.touch_active = false;
    }
}
