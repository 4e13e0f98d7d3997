//! Palette types
//!
//! This module provides the fixed-size [`Palette`] used for quantization,
//! the built-in Plan 9 color table and palette validation errors.

mod error;
mod palette;
mod plan9;

pub use error::PaletteError;
pub use palette::Palette;
pub use plan9::PLAN9;
