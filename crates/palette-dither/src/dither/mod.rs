//! Error diffusion dithering.
//!
//! # Architecture
//!
//! Algorithms implement the [`Dither`] trait. The shared diffusion loop,
//! `dither_with_kernel`, is parameterized by a [`Kernel`] so an algorithm
//! is just a kernel choice. Only [`FloydSteinberg`] is provided.
//!
//! Pixels are visited in raster order (left to right, top to bottom); error
//! is only ever pushed to pixels that have not been visited yet.

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::output::DitheredImage;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
pub trait Dither {
    /// Dither an image to palette indices.
    ///
    /// # Arguments
    ///
    /// * `image` - Input `[R, G, B]` pixels (row-major order)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Color palette for quantization
    ///
    /// # Panics
    ///
    /// Panics if `image.len() != width * height`.
    fn dither<'p>(
        &self,
        image: &[[u8; 3]],
        width: usize,
        height: usize,
        palette: &'p Palette,
    ) -> DitheredImage<'p>;
}

/// Pending quantization error for the rows the kernel can still reach.
///
/// Only `row_depth` rows are kept; `rows[0]` is the row being dithered.
/// Call [`ErrorBuffer::advance_row`] after each image row.
#[derive(Debug)]
pub(crate) struct ErrorBuffer {
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    pub(crate) fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Accumulated error for pixel `x` of the current row.
    #[inline]
    pub(crate) fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to pixel `x` of the row `row_offset` rows below the current
    /// one. Out-of-range targets are dropped.
    #[inline]
    pub(crate) fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Drop the finished row and append an empty one.
    pub(crate) fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Core error diffusion loop parameterized by kernel.
///
/// For each pixel in raster order: add the accumulated error, clamp each
/// channel to `0..=255`, pick the nearest palette entry, then spread the
/// difference between the clamped value and that entry over the kernel's
/// neighbors.
///
/// # Returns
///
/// One palette index per pixel, row-major.
pub(crate) fn dither_with_kernel(
    image: &[[u8; 3]],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<u8> {
    assert_eq!(
        image.len(),
        width * height,
        "image length ({}) must match width * height ({}x{})",
        image.len(),
        width,
        height
    );

    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;

            let accumulated = error_buf.get_accumulated(x);
            let source = image[idx];
            let pixel = [
                (source[0] as f32 + accumulated[0]).clamp(0.0, 255.0),
                (source[1] as f32 + accumulated[1]).clamp(0.0, 255.0),
                (source[2] as f32 + accumulated[2]).clamp(0.0, 255.0),
            ];

            let (nearest_idx, _dist) = palette.find_nearest(pixel);
            output[idx] = nearest_idx as u8;

            let nearest = palette.color(nearest_idx);
            let error = [
                pixel[0] - nearest[0] as f32,
                pixel[1] - nearest[1] as f32,
                pixel[2] - nearest[2] as f32,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx >= 0 && (nx as usize) < width {
                    let ny = y + dy as usize;
                    if ny < height {
                        let w = weight as f32 / divisor;
                        error_buf.add_error(
                            nx as usize,
                            dy as usize,
                            [error[0] * w, error[1] * w, error[2] * w],
                        );
                    }
                }
            }
        }

        error_buf.advance_row();
    }

    output
}
