use image::{DynamicImage, ImageEncoder, codecs::jpeg::JpegDecoder, codecs::jpeg::JpegEncoder};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::WatermarkError;

/// Quality used when no config overrides it.
pub const DEFAULT_QUALITY: u8 = 75;

/// Decode a JPEG file. The file handle is closed before returning.
pub fn decode(path: &Path) -> Result<DynamicImage, WatermarkError> {
    let file = std::fs::File::open(path).map_err(|source| WatermarkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decode_error = |source: image::ImageError| WatermarkError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoder = JpegDecoder::new(BufReader::new(file)).map_err(decode_error)?;
    let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;

    debug!(
        "Decoded JPEG {:?}: {}x{}",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Save image as JPEG
pub fn save(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), WatermarkError> {
    // JPEG doesn't support alpha channel, so convert to RGB
    let rgb_image = image.to_rgb8();
    let output = std::fs::File::create(path).map_err(|source| WatermarkError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let encoder = JpegEncoder::new_with_quality(output, quality);
    encoder
        .write_image(
            &rgb_image,
            rgb_image.width(),
            rgb_image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|source| WatermarkError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("JPEG written to {:?} at quality {}", path, quality);
    Ok(())
}
