use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use egui::Color32;
use kurbo::Affine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EditorError, EditorResult};
use crate::transform;

/// Stable identity of a text box, used by input to address its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextBoxId(Uuid);

impl TextBoxId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TextBoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a text box placement shared between the renderer and the
/// gesture that moves it.
///
/// Writes come from a single gesture at a time and readers only need the
/// latest value per frame, so a plain `Cell` is enough.
#[derive(Debug, Clone)]
pub struct SharedTransform(Rc<Cell<Affine>>);

impl SharedTransform {
    pub fn new(matrix: Affine) -> Self {
        Self(Rc::new(Cell::new(matrix)))
    }

    pub fn get(&self) -> Affine {
        self.0.get()
    }

    pub fn set(&self, matrix: Affine) {
        self.0.set(matrix);
    }
}

/// A positionable, editable text annotation
#[derive(Debug)]
pub struct TextBox {
    id: TextBoxId,
    text: String,
    transform: SharedTransform,
    color: Color32,
}

impl TextBox {
    fn new(color: Color32, matrix: Affine) -> Self {
        Self {
            id: TextBoxId::new(),
            text: String::new(),
            transform: SharedTransform::new(matrix),
            color,
        }
    }

    pub fn id(&self) -> TextBoxId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn transform(&self) -> &SharedTransform {
        &self.transform
    }

    pub fn matrix(&self) -> Affine {
        self.transform.get()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

// A cloned box gets its own placement. Only handles taken through
// `TextBox::transform` share one.
impl Clone for TextBox {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            transform: SharedTransform::new(self.matrix()),
            color: self.color,
        }
    }
}

/// Ordered text boxes, oldest first
#[derive(Debug, Clone, Default)]
pub struct TextStore {
    boxes: Vec<TextBox>,
}

impl TextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, id: TextBoxId) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: TextBoxId) -> EditorResult<&mut TextBox> {
        self.boxes
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(EditorError::StaleTextBox(id))
    }

    /// True when a new box would be created: there is none yet, or the newest
    /// one already holds text.
    pub fn wants_new_box(&self) -> bool {
        self.boxes.last().is_none_or(|b| !b.text.is_empty())
    }

    /// Append an empty box at `matrix`, unless the newest box is still empty.
    ///
    /// Returns the id of the new box, or `None` if nothing was added.
    pub fn add_text_box(&mut self, color: Color32, matrix: Affine) -> Option<TextBoxId> {
        if !self.wants_new_box() {
            return None;
        }
        let text_box = TextBox::new(color, matrix);
        let id = text_box.id;
        self.boxes.push(text_box);
        Some(id)
    }

    pub fn update_text(&mut self, id: TextBoxId, text: impl Into<String>) -> EditorResult<()> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    /// Move one box by a drag delta
    pub fn update_transform(&mut self, id: TextBoxId, dx: f64, dy: f64) -> EditorResult<()> {
        let shared = &self.get_mut(id)?.transform;
        shared.set(transform::translate(shared.get(), dx, dy));
        Ok(())
    }

    pub fn undo_last(&mut self) -> EditorResult<TextBox> {
        self.boxes.pop().ok_or(EditorError::NothingToUndo)
    }
}
