use std::path::Path;

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::stroke::PaintStyle;

/// Layout and paint settings for the editor.
///
/// Everything that the editor would otherwise have to look up from the
/// platform (canvas size, text box metrics) is passed in through here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct EditorConfig {
    /// Size of the drawing canvas in points
    pub viewport: Vec2,
    /// Horizontal space left free around a text box
    pub text_box_margin: f32,
    /// Vertical offset of freshly created text boxes
    pub text_box_top: f32,
    /// Nominal height of a text box, used to pivot the editable overlay
    pub text_box_height: f32,
    /// Upward shift applied to the editable overlay so it lines up with the glyphs
    pub overlay_baseline_shift: f32,
    /// Paint style for new brush strokes; text boxes take the same colour
    pub brush: PaintStyle,
    /// Stroke width of the eraser path
    pub eraser_width: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(390.0, 844.0),
            text_box_margin: 140.0,
            text_box_top: 240.0,
            text_box_height: 60.0,
            overlay_baseline_shift: 20.0,
            brush: PaintStyle::new(3.0, Color32::WHITE),
            eraser_width: 20.0,
            font_size: 25.0,
            line_height: 30.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Width of a text box for the current viewport, never negative
    pub fn text_box_width(&self) -> f32 {
        (self.viewport.x - self.text_box_margin).max(0.0)
    }

    pub fn text_box_size(&self) -> Vec2 {
        Vec2::new(self.text_box_width(), self.text_box_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json_str(r#"{ "eraser_width": 32.0 }"#).unwrap();
        assert_eq!(config.eraser_width, 32.0);
        assert_eq!(config.text_box_margin, 140.0);
        assert_eq!(config.brush, PaintStyle::new(3.0, Color32::WHITE));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = EditorConfig::from_json_str("{ eraser_width: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EditorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_text_box_width_follows_viewport() {
        let mut config = EditorConfig::default();
        assert_eq!(config.text_box_width(), 250.0);

        config.viewport = Vec2::new(100.0, 100.0);
        assert_eq!(config.text_box_width(), 0.0);
    }
}
