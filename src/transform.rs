//! Affine helpers for positioning text boxes.
//!
//! A text box's placement is a plain [`kurbo::Affine`]. Drags translate it,
//! the renderer reads its origin, and the editable overlay uses a pivoted
//! version of it.

use egui::{Pos2, Vec2};
use kurbo::{Affine, Point};

use crate::config::EditorConfig;

/// Row-major 4x4 matrix, the layout expected by 3D-style render transforms
pub type Matrix4 = [f64; 16];

/// Translate `matrix` by `(dx, dy)` in the matrix's own local frame.
pub fn translate(matrix: Affine, dx: f64, dy: f64) -> Affine {
    matrix * Affine::translate((dx, dy))
}

/// Lift a 2D affine into a 4x4 matrix. No semantic change.
pub fn to_m4(matrix: Affine) -> Matrix4 {
    let [a, b, c, d, e, f] = matrix.as_coeffs();
    [
        a, c, 0.0, e, //
        b, d, 0.0, f, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Initial placement for a box of `box_width`: horizontally centred in the
/// viewport, at the configured vertical offset.
pub fn make_matrix(box_width: f32, config: &EditorConfig) -> Affine {
    let x = (config.viewport.x - box_width) / 2.0;
    Affine::translate((f64::from(x), f64::from(config.text_box_top)))
}

/// Transform used by the editable overlay: the box matrix applied around the
/// box centre, shifted up by `baseline_shift` so the input field sits on the
/// rendered glyphs.
pub fn overlay_transform(matrix: Affine, box_size: Vec2, baseline_shift: f32) -> Affine {
    let half_w = f64::from(box_size.x) / 2.0;
    let half_h = f64::from(box_size.y) / 2.0;
    Affine::translate((-half_w, -half_h))
        * matrix
        * Affine::translate((half_w, half_h - f64::from(baseline_shift)))
}

/// Where the box's local origin lands in canvas space
pub fn origin(matrix: Affine) -> Pos2 {
    let p = matrix * Point::ZERO;
    Pos2::new(p.x as f32, p.y as f32)
}

/// Rotation of the matrix's x axis, in radians clockwise on screen
pub fn rotation(matrix: Affine) -> f32 {
    let [a, b, ..] = matrix.as_coeffs();
    b.atan2(a) as f32
}
