pub mod jpeg;
pub mod png;

pub use super::types::ImageKind;

use crate::error::WatermarkError;
use image::DynamicImage;
use std::path::Path;

impl ImageKind {
    pub fn decode(&self, path: &Path) -> Result<DynamicImage, WatermarkError> {
        match self {
            ImageKind::Jpeg => jpeg::decode(path),
            ImageKind::Png => png::decode(path),
        }
    }

    /// Encode `image` to `path` with this codec. `jpeg_quality` is ignored for PNG.
    pub fn save(
        &self,
        image: &DynamicImage,
        path: &Path,
        jpeg_quality: u8,
    ) -> Result<(), WatermarkError> {
        match self {
            ImageKind::Jpeg => jpeg::save(image, path, jpeg_quality),
            ImageKind::Png => png::save(image, path),
        }
    }
}
