use crate::error::ResizeError;

/// Target geometry for one resize call.
///
/// A zero dimension means "derive from the source aspect ratio".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeRequest {
    pub width: u32,
    pub height: u32,
}

impl ResizeRequest {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fixed height, width derived from the aspect ratio.
    pub fn with_height(height: u32) -> Self {
        Self { width: 0, height }
    }

    /// Fixed width, height derived from the aspect ratio.
    pub fn with_width(width: u32) -> Self {
        Self { width, height: 0 }
    }

    /// Compute output dimensions for a `src_width`×`src_height` source.
    ///
    /// Derived dimensions use truncating integer division, e.g. a 400×200
    /// source at height 100 yields width `400 * 100 / 200 = 200`. A derived
    /// dimension that truncates to zero is raised to 1. With both dimensions
    /// unset the source size is returned.
    pub fn resolve(&self, src_width: u32, src_height: u32) -> Result<(u32, u32), ResizeError> {
        if src_width == 0 || src_height == 0 {
            return Err(ResizeError::InvalidDimensions {
                width: src_width,
                height: src_height,
            });
        }

        let (width, height) = match (self.width, self.height) {
            (0, 0) => (src_width, src_height),
            (0, h) => (scale(src_width, h, src_height), h),
            (w, 0) => (w, scale(src_height, w, src_width)),
            (w, h) => (w, h),
        };

        Ok((width.max(1), height.max(1)))
    }
}

/// `value * numerator / denominator` without intermediate overflow.
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = value as u64 * numerator as u64 / denominator as u64;
    scaled.min(u32::MAX as u64) as u32
}
