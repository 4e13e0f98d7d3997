//! Palette struct with nearest-color matching.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::error::PaletteError;
use super::plan9::PLAN9;

static PLAN9_PALETTE: LazyLock<Palette> = LazyLock::new(|| Palette {
    colors: PLAN9.to_vec(),
});

/// A bounded set of representative colors.
///
/// Each entry is addressed by a `u8` index, so a palette holds between 1 and
/// 256 distinct colors. Palettes are immutable once built.
///
/// # Example
///
/// ```
/// use palette_dither::Palette;
///
/// let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest([200.0, 200.0, 200.0]).0, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Maximum number of entries addressable by a one-byte index.
    pub const MAX_COLORS: usize = 256;

    /// Create a palette from `[R, G, B]` colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 entries
    /// - [`PaletteError::DuplicateColor`] if a color appears twice
    pub fn new(colors: &[[u8; 3]]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The process-wide Plan 9 palette.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn plan9() -> &'static Palette {
        &PLAN9_PALETTE
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn color(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Whether `color` is one of the palette entries.
    pub fn contains(&self, color: [u8; 3]) -> bool {
        self.colors.contains(&color)
    }

    /// Flat `[R, G, B, R, G, B, ...]` color table, as indexed formats store it.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Find the palette entry closest to `pixel`.
    ///
    /// Distance is squared Euclidean over the three channels. On ties the
    /// lowest index wins.
    ///
    /// # Returns
    ///
    /// `(index, squared_distance)` of the best match.
    pub fn find_nearest(&self, pixel: [f32; 3]) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;

        for (i, color) in self.colors.iter().enumerate() {
            let dr = pixel[0] - color[0] as f32;
            let dg = pixel[1] - color[1] as f32;
            let db = pixel[2] - color[2] as f32;
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
