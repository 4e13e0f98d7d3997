//! Diffusion kernels.

/// Weights for spreading one pixel's quantization error.
///
/// Entries are `(dx, dy, weight)`; each neighbour receives
/// `error * weight / divisor`. Offsets only ever point at pixels that come
/// later in raster order. `max_dy` is the deepest row an entry touches.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub entries: &'static [(i32, i32, u8)],
    pub divisor: u8,
    pub max_dy: usize,
}

impl Kernel {
    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }
}

/// Floyd–Steinberg: four neighbours, all of the error is passed on.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};
