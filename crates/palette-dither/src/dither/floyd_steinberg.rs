//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::output::DitheredImage;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of quantization
/// error to 4 neighboring pixels:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
///
/// # Example
///
/// ```
/// use palette_dither::{Dither, FloydSteinberg, Palette};
///
/// let gradient: Vec<[u8; 3]> = (0..64).map(|i| [i as u8 * 4; 3]).collect();
/// let result = FloydSteinberg.dither(&gradient, 8, 8, Palette::plan9());
/// assert_eq!(result.indices().len(), 64);
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither<'p>(
        &self,
        image: &[[u8; 3]],
        width: usize,
        height: usize,
        palette: &'p Palette,
    ) -> DitheredImage<'p> {
        let indices = dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG);
        DitheredImage::new(indices, width, height, palette)
    }
}
