//! Resizer - aspect-preserving image resizing
//!
//! Decodes GIF, PNG, JPEG and other raster formats, resizes them to a target
//! height with a Mitchell–Netravali filter and re-encodes them. Animated GIFs
//! are composited frame by frame and dithered into the Plan 9 palette.

pub mod codec;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{ConfigError, ResizeError};
pub use services::{ResizeService, ResizeSummary};
