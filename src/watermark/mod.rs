// Watermark module - band compositing and the PNG/JPEG codecs around it
mod compositor;
pub mod formats;
mod types;

pub use compositor::{
    BAND_COLOR, BAND_HEIGHT_DIVISOR, BAND_WIDTH_DIVISOR, apply_watermark, band_dimensions,
    watermark_band,
};
pub use types::{ImageKind, extension_of, marked_path};
