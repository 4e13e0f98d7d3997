//! Error types for palette construction

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be used for indexed output: it is empty,
/// it has more entries than a `u8` index can address, or it contains the
/// same color twice.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More colors than fit in a one-byte index
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette must contain at least one color"),
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {} colors (max 256)", count)
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color at index {}", index)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
