#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! palette-dither: fixed-palette quantization for indexed image formats
//!
//! Indexed formats such as GIF store one palette index per pixel. This crate
//! reduces full-color pixels to such indices against a fixed [`Palette`]
//! using error diffusion, so gradients survive the reduction as dither
//! patterns instead of flat bands.
//!
//! # Quick Start
//!
//! ```
//! use palette_dither::{Dither, FloydSteinberg, Palette};
//!
//! let pixels = vec![[128u8, 128, 128]; 4];
//! let result = FloydSteinberg.dither(&pixels, 2, 2, Palette::plan9());
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! assert!(result.indices().iter().all(|&i| (i as usize) < result.palette().len()));
//! ```
//!
//! # Palette
//!
//! [`Palette::plan9()`] is the 256-color Plan 9 palette: the RGB cube split
//! into 4×4×4 subcubes with 4 shades each. It is built once and shared by
//! `&'static` reference, never mutated.
//!
//! # Color Arithmetic
//!
//! Matching and error diffusion both run directly on 8-bit sRGB channel
//! values held as `f32`; there is no linearization step.
//!
//! ```text
//! pixel + accumulated error   (sRGB, f32, clamped to 0..=255)
//!     |
//!     v
//! find_nearest()              (squared Euclidean, first match wins)
//!     |
//!     +---> palette index     (output)
//!     |
//!     v
//! error = pixel - palette[idx]
//!     |
//!     v
//! diffuse: 7/16 right, 3/16 below-left, 5/16 below, 1/16 below-right
//! ```

pub mod dither;
pub mod output;
pub mod palette;

pub use dither::{Dither, FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use output::DitheredImage;
pub use palette::{Palette, PaletteError, PLAN9};
