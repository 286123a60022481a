use egui::epaint::{Mesh, TextShape, Vertex, WHITE_UV};
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, TextureHandle, TextureId, Vec2};

use crate::state::{EditMode, Editor};
use crate::stroke::{EraserStroke, Path, Stroke};
use crate::store::TextBox;
use crate::transform;

/// One layer of the canvas, in paint order
#[derive(Debug, Clone, Copy)]
pub enum DrawItem<'a> {
    Photo,
    Stroke(&'a Stroke),
    Eraser(&'a EraserStroke),
    Text(&'a TextBox),
}

/// What the canvas should show for the editor's current state.
///
/// The photo is left out while erasing, and static text glyphs are left out
/// in text mode where the editable overlay shows them instead.
pub fn scene(editor: &Editor) -> Vec<DrawItem<'_>> {
    let mut items = Vec::new();

    if !editor.eraser_enabled() {
        items.push(DrawItem::Photo);
    }
    items.extend(editor.strokes().strokes().iter().map(DrawItem::Stroke));
    items.push(DrawItem::Eraser(editor.strokes().eraser()));

    if editor.mode() != EditMode::Text {
        items.extend(editor.texts().boxes().iter().map(DrawItem::Text));
    }
    items
}

/// UV sub-rectangle that makes an image of `image_size` cover `target`
/// completely, cropping the overflowing axis around the centre.
pub fn cover_uv(image_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_aspect = image_size.x / image_size.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let w = target_aspect / image_aspect;
        Rect::from_min_max(Pos2::new((1.0 - w) / 2.0, 0.0), Pos2::new((1.0 + w) / 2.0, 1.0))
    } else {
        let h = image_aspect / target_aspect;
        Rect::from_min_max(Pos2::new(0.0, (1.0 - h) / 2.0), Pos2::new(1.0, (1.0 + h) / 2.0))
    }
}

/// What shows through where the eraser has run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EraserFill {
    /// The photo texture, sampled with the same cover mapping as the photo
    Photo { texture: TextureId, uv: Rect },
    /// A flat colour, used when no photo is on screen
    Solid(Color32),
}

/// Segments around a round join
const JOIN_SEGMENTS: usize = 12;

/// Tessellate the eraser path into a mesh `width` wide.
///
/// Path points are canvas-relative; the mesh is in screen space. Each segment
/// becomes a quad and each point a disc so joins stay round. Sub-paths
/// without a segment draw nothing.
pub fn eraser_mesh(path: &Path, width: f32, canvas: Rect, fill: EraserFill) -> Mesh {
    let (texture, color) = match fill {
        EraserFill::Photo { texture, .. } => (texture, Color32::WHITE),
        EraserFill::Solid(color) => (TextureId::default(), color),
    };
    let vertex = |pos: Pos2| {
        let uv = match fill {
            EraserFill::Photo { uv, .. } => {
                let rel = pos.to_vec2() / canvas.size();
                let p = uv.min + rel * uv.size();
                p.clamp(uv.min, uv.max)
            }
            EraserFill::Solid(_) => WHITE_UV,
        };
        Vertex {
            pos: canvas.min + pos.to_vec2(),
            uv,
            color,
        }
    };

    let mut mesh = Mesh::with_texture(texture);
    let radius = width / 2.0;
    for line in path.polylines() {
        if line.len() < 2 {
            continue;
        }
        for pair in line.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dir = b - a;
            if dir.length_sq() <= f32::EPSILON {
                continue;
            }
            let n = dir.normalized().rot90() * radius;
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend([vertex(a + n), vertex(a - n), vertex(b - n), vertex(b + n)]);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
        for &p in &line {
            let centre = mesh.vertices.len() as u32;
            mesh.vertices.push(vertex(p));
            for i in 0..JOIN_SEGMENTS {
                let angle = i as f32 * std::f32::consts::TAU / JOIN_SEGMENTS as f32;
                mesh.vertices.push(vertex(p + Vec2::angled(angle) * radius));
            }
            for i in 0..JOIN_SEGMENTS as u32 {
                let next = (i + 1) % JOIN_SEGMENTS as u32;
                mesh.add_triangle(centre, centre + 1 + i, centre + 1 + next);
            }
        }
    }
    mesh
}

/// Paints a [`scene`] with an egui painter
#[derive(Debug)]
pub struct Renderer {
    /// Canvas colour, also what the eraser shows while the photo is hidden
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
        }
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Pick what the eraser reveals: the photo whenever it is drawn under the
    /// strokes, otherwise the bare canvas.
    pub fn eraser_fill(&self, photo_visible: bool, photo: Option<(TextureId, Vec2)>, canvas: Vec2) -> EraserFill {
        match photo {
            Some((texture, size)) if photo_visible => EraserFill::Photo {
                texture,
                uv: cover_uv(size, canvas),
            },
            _ => EraserFill::Solid(self.background),
        }
    }

    pub fn render(&self, painter: &Painter, canvas: Rect, editor: &Editor, photo: Option<&TextureHandle>) {
        painter.rect_filled(canvas, 0.0, self.background);

        let items = scene(editor);
        let photo_visible = items.iter().any(|item| matches!(item, DrawItem::Photo));
        let offset = canvas.min.to_vec2();
        for item in items {
            match item {
                DrawItem::Photo => {
                    if let Some(texture) = photo {
                        let uv = cover_uv(texture.size_vec2(), canvas.size());
                        painter.image(texture.id(), canvas, uv, Color32::WHITE);
                    }
                }
                DrawItem::Stroke(stroke) => {
                    let paint = stroke.paint();
                    paint_path(painter, stroke.path(), offset, egui::Stroke::new(paint.width, paint.color));
                }
                DrawItem::Eraser(eraser) => {
                    let fill = self.eraser_fill(
                        photo_visible,
                        photo.map(|t| (t.id(), t.size_vec2())),
                        canvas.size(),
                    );
                    let mesh = eraser_mesh(eraser.path(), eraser.width(), canvas, fill);
                    if !mesh.is_empty() {
                        painter.add(Shape::mesh(mesh));
                    }
                }
                DrawItem::Text(text_box) => self.paint_text(painter, offset, editor, text_box),
            }
        }
    }

    fn paint_text(&self, painter: &Painter, offset: Vec2, editor: &Editor, text_box: &TextBox) {
        if text_box.text().is_empty() {
            return;
        }
        let config = editor.config();
        let format = TextFormat {
            font_id: FontId::proportional(config.font_size),
            color: text_box.color(),
            line_height: Some(config.line_height),
            ..Default::default()
        };
        let mut job = LayoutJob::single_section(text_box.text().to_owned(), format);
        job.wrap.max_width = config.text_box_width();

        let galley = painter.layout_job(job);
        let matrix = text_box.matrix();
        let pos = transform::origin(matrix) + offset;
        let shape = TextShape::new(pos, galley, text_box.color()).with_angle(transform::rotation(matrix));
        painter.add(shape);
    }
}

fn paint_path(painter: &Painter, path: &Path, offset: Vec2, stroke: egui::Stroke) {
    for line in path.polylines() {
        if line.len() < 2 {
            continue;
        }
        let points = line.into_iter().map(|p| p + offset).collect();
        painter.add(Shape::line(points, stroke));
    }
}
