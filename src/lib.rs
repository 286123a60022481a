#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod photo;
pub mod renderer;
pub mod state;
pub mod store;
pub mod stroke;
pub mod transform;

pub use app::{EditorAction, PhotoEditorApp};
pub use config::EditorConfig;
pub use error::{ConfigError, EditorError, PhotoError};
pub use input::{InputEvent, InputHandler};
pub use photo::Photo;
pub use renderer::Renderer;
pub use state::{ChromeState, EditMode, EditState, Editor, TouchPhase};
pub use store::{StrokeStore, TextBox, TextBoxId, TextStore};
pub use stroke::{EraserStroke, PaintStyle, Path, Stroke};
