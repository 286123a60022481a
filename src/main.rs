#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use photo_markup::{EditorConfig, Photo, PhotoEditorApp};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "PHOTO_MARKUP_CONFIG";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let photo = std::env::args().nth(1).and_then(|path| match Photo::open(&path) {
        Ok(photo) => Some(photo),
        Err(err) => {
            log::error!("{}", err);
            None
        }
    });

    let config = std::env::var_os(CONFIG_ENV).and_then(|path| match EditorConfig::load(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Falling back to stored config: {}", err);
            None
        }
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_title("Photo Markup"),
        ..Default::default()
    };
    eframe::run_native(
        "photo_markup",
        native_options,
        Box::new(|cc| Ok(Box::new(PhotoEditorApp::new(cc, photo, config)))),
    )
}
