//! Mitchell–Netravali resampling.
//!
//! Resizing runs on premultiplied RGBA so transparent pixels don't bleed
//! their color into opaque neighbours; alpha is divided back out afterwards.

use crate::error::ResizeError;
use fast_image_resize::{self as fir, MulDiv, PixelType, ResizeAlg, ResizeOptions};
use image::RgbaImage;

/// Resize `image` to exactly `width`×`height`.
///
/// Same-size requests return a copy of the input untouched.
pub fn resize(image: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage, ResizeError> {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ResizeError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }
    if (src_w, src_h) == (width, height) {
        return Ok(image.clone());
    }

    let mut src = fir::images::Image::from_vec_u8(
        src_w,
        src_h,
        image.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| ResizeError::Encode(format!("resize source: {e}")))?;
    let mut dst = fir::images::Image::new(width, height, PixelType::U8x4);

    let mul_div = MulDiv::default();
    mul_div
        .multiply_alpha_inplace(&mut src)
        .map_err(|e| ResizeError::Encode(format!("premultiply alpha: {e}")))?;

    // Alpha is handled explicitly above, so the resizer must not redo it
    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(fir::FilterType::Mitchell))
        .use_alpha(false);
    fir::Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| ResizeError::Encode(format!("resize: {e}")))?;

    mul_div
        .divide_alpha_inplace(&mut dst)
        .map_err(|e| ResizeError::Encode(format!("unpremultiply alpha: {e}")))?;

    RgbaImage::from_raw(width, height, dst.into_vec()).ok_or_else(|| {
        ResizeError::Encode(format!("resized buffer does not match {width}x{height}"))
    })
}
