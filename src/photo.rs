use std::path::Path;

use egui::{ColorImage, Vec2};

use crate::error::PhotoError;

/// A decoded base photo, ready to be uploaded as a texture
#[derive(Clone)]
pub struct Photo {
    image: ColorImage,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Photo")
            .field("size", &self.image.size)
            .finish()
    }
}

impl Photo {
    /// Decode any image format supported by the `image` crate
    pub fn decode(bytes: &[u8]) -> Result<Self, PhotoError> {
        let img = image::load_from_memory(bytes)?;
        log::debug!("Decoded photo: {}x{}", img.width(), img.height());

        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Ok(Self {
            image: ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, PhotoError> {
        let path = path.as_ref();
        log::info!("Loading photo from {}", path.display());
        let bytes = std::fs::read(path).map_err(|source| PhotoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.size[0] as f32, self.image.size[1] as f32)
    }

    pub fn into_color_image(self) -> ColorImage {
        self.image
    }
}
