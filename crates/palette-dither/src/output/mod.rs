//! Output types for dithered images.
//!
//! [`DitheredImage`] is the canonical result of dithering: palette indices
//! plus dimensions and a reference to the palette they index into.

mod dithered_image;

pub use dithered_image::DitheredImage;
