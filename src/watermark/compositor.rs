use image::{DynamicImage, Rgba, RgbaImage};

/// Black at roughly half opacity.
pub const BAND_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);
pub const BAND_WIDTH_DIVISOR: u32 = 2;
pub const BAND_HEIGHT_DIVISOR: u32 = 20;

/// Band size for a source of the given size. Either side may truncate to zero.
pub fn band_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width / BAND_WIDTH_DIVISOR, height / BAND_HEIGHT_DIVISOR)
}

/// A band of `width` x `height` filled with [`BAND_COLOR`].
pub fn watermark_band(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, BAND_COLOR)
}

/// Source-over blend of `src` onto `dst` for straight (non-premultiplied) alpha.
///
/// Integer math with truncating division. An opaque destination always stays
/// at alpha 255.
pub(crate) fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = u32::from(src[3]);
    let dst_a = u32::from(dst[3]);
    match src_a {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv_a = 255 - src_a;
    // Output alpha scaled by 255
    let out_a = src_a * 255 + dst_a * inv_a;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let premultiplied = u32::from(src[i]) * src_a * 255 + u32::from(dst[i]) * dst_a * inv_a;
        (premultiplied / out_a) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a / 255) as u8])
}

/// Draw `top` over `bottom` with its top-left corner at (0, 0), clipped to `bottom`.
fn draw_over(bottom: &mut RgbaImage, top: &RgbaImage) {
    let width = bottom.width().min(top.width());
    let height = bottom.height().min(top.height());
    for y in 0..height {
        for x in 0..width {
            let blended = blend_over(*bottom.get_pixel(x, y), *top.get_pixel(x, y));
            bottom.put_pixel(x, y, blended);
        }
    }
}

/// Composite the watermark band over the top-left corner of `source`.
///
/// The source is drawn over a transparent canvas of identical bounds, then the
/// band is drawn over that with source-over blending. `source` is left untouched.
pub fn apply_watermark(source: &DynamicImage) -> RgbaImage {
    let (width, height) = (source.width(), source.height());
    let (band_width, band_height) = band_dimensions(width, height);
    let band = watermark_band(band_width, band_height);

    let mut output = RgbaImage::new(width, height);
    draw_over(&mut output, &source.to_rgba8());
    draw_over(&mut output, &band);

    output
}
