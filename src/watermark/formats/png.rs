use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, codecs::png::PngDecoder, codecs::png::PngEncoder,
};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::WatermarkError;

/// Decode a PNG file. The file handle is closed before returning.
pub fn decode(path: &Path) -> Result<DynamicImage, WatermarkError> {
    let file = std::fs::File::open(path).map_err(|source| WatermarkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decode_error = |source: image::ImageError| WatermarkError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoder = PngDecoder::new(BufReader::new(file)).map_err(decode_error)?;
    let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;

    debug!(
        "Decoded PNG {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

fn is_opaque(image: &DynamicImage) -> bool {
    match image {
        DynamicImage::ImageRgba8(buf) => buf.pixels().all(|p| p[3] == u8::MAX),
        _ => !image.color().has_alpha(),
    }
}

/// Save image as PNG
///
/// Fully opaque images are written as RGB, anything with transparency as RGBA.
pub fn save(image: &DynamicImage, path: &Path) -> Result<(), WatermarkError> {
    let output = std::fs::File::create(path).map_err(|source| WatermarkError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let encoder = PngEncoder::new(output);

    let result = if is_opaque(image) {
        let rgb = image.to_rgb8();
        encoder.write_image(&rgb, rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
    } else {
        let rgba = image.to_rgba8();
        encoder.write_image(&rgba, rgba.width(), rgba.height(), ExtendedColorType::Rgba8)
    };
    result.map_err(|source| WatermarkError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("PNG written to {:?}", path);
    Ok(())
}
