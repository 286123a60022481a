mod strokes;
mod texts;

pub use strokes::StrokeStore;
pub use texts::{SharedTransform, TextBox, TextBoxId, TextStore};
