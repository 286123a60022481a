use egui::{Color32, Pos2};
use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

/// Width and colour of a stroke, fixed when the stroke is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub width: f32,
    pub color: Color32,
}

impl PaintStyle {
    pub fn new(width: f32, color: Color32) -> Self {
        Self { width, color }
    }
}

/// Append-only polyline path.
///
/// A path only ever grows by `move_to`/`line_to` or is reset as a whole;
/// existing segments are never edited, so a reader always sees a prefix of
/// the final path.
#[derive(Debug, Clone, Default)]
pub struct Path {
    inner: BezPath,
}

fn to_point(pos: Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_pos(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `pos` without drawing anything
    pub fn move_to(&mut self, pos: Pos2) {
        self.inner.move_to(to_point(pos));
    }

    /// Draw a segment from the current end to `pos`.
    ///
    /// On an empty path this starts a sub-path at `pos` instead.
    pub fn line_to(&mut self, pos: Pos2) {
        if self.inner.elements().is_empty() {
            self.inner.move_to(to_point(pos));
        } else {
            self.inner.line_to(to_point(pos));
        }
    }

    /// Drop every segment
    pub fn reset(&mut self) {
        self.inner = BezPath::new();
    }

    /// Number of drawn segments (pen moves are not counted)
    pub fn segment_count(&self) -> usize {
        self.inner
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::LineTo(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.elements().is_empty()
    }

    /// Split the path into its sub-paths as point lists, for painting
    pub fn polylines(&self) -> Vec<Vec<Pos2>> {
        let mut lines: Vec<Vec<Pos2>> = Vec::new();
        for el in self.inner.elements() {
            match *el {
                PathEl::MoveTo(p) => lines.push(vec![to_pos(p)]),
                PathEl::LineTo(p) => match lines.last_mut() {
                    Some(line) => line.push(to_pos(p)),
                    None => lines.push(vec![to_pos(p)]),
                },
                // Only lines are ever appended
                _ => {}
            }
        }
        lines
    }
}

/// One freehand line plus the paint it is drawn with
#[derive(Debug, Clone)]
pub struct Stroke {
    path: Path,
    paint: PaintStyle,
}

impl Stroke {
    /// An empty stroke, ready to receive points
    pub fn new(paint: PaintStyle) -> Self {
        Self {
            path: Path::new(),
            paint,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    pub fn paint(&self) -> PaintStyle {
        self.paint
    }
}

/// The single clear-compositing path used to mask out content.
///
/// It lives for the whole session and keeps growing across eraser gestures.
#[derive(Debug, Clone)]
pub struct EraserStroke {
    path: Path,
    width: f32,
}

impl EraserStroke {
    pub fn new(width: f32) -> Self {
        Self {
            path: Path::new(),
            width,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}
