//! DitheredImage struct.

use crate::palette::Palette;

/// The canonical output of the dithering pipeline.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette the indices refer to. The palette is
/// borrowed: dithered images are typically produced against a shared,
/// long-lived palette such as [`Palette::plan9()`].
///
/// # Example
///
/// ```
/// use palette_dither::{DitheredImage, Palette};
///
/// let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
///
/// // Simulate a 2x2 checkerboard dither result
/// let image = DitheredImage::new(vec![0, 1, 1, 0], 2, 2, &palette);
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.palette().color(image.indices()[1] as usize), [255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage<'p> {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: &'p Palette,
}

impl<'p> DitheredImage<'p> {
    /// Create a new `DitheredImage` from palette indices.
    ///
    /// Each index must be in `0..palette.len()`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: &'p Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, one per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }
}
