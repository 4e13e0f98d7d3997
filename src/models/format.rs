use std::fmt;

/// Source format tag produced by the detector.
///
/// The set is closed: GIF, PNG and JPEG are handled natively and anything
/// else the `image` crate can sniff lands in [`SourceFormat::Other`], which
/// decodes through `image` and re-encodes through the JPEG fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Indexed, possibly animated (GIF)
    Gif,
    /// Lossless raster with alpha (PNG)
    Png,
    /// Lossy DCT raster (JPEG)
    Jpeg,
    /// Any other format the detector recognizes (WebP, BMP, TIFF, ...)
    Other(image::ImageFormat),
}

/// Encoding chosen for the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Gif,
    Png,
    Jpeg { quality: u8 },
}

/// JPEG quality used for every lossy output.
pub const MAX_JPEG_QUALITY: u8 = 100;

impl SourceFormat {
    /// Map an `image` crate format tag onto the closed set.
    pub fn from_image_format(format: image::ImageFormat) -> Self {
        match format {
            image::ImageFormat::Gif => SourceFormat::Gif,
            image::ImageFormat::Png => SourceFormat::Png,
            image::ImageFormat::Jpeg => SourceFormat::Jpeg,
            other => SourceFormat::Other(other),
        }
    }

    /// Whether frames are decoded as an animation sequence.
    pub fn is_animatable(&self) -> bool {
        matches!(self, SourceFormat::Gif)
    }

    /// Whether output can be written back in this same format.
    pub fn is_encodable(&self) -> bool {
        !matches!(self, SourceFormat::Other(_))
    }

    /// Whether this build can decode the format at all.
    pub fn is_decodable(&self) -> bool {
        match self {
            SourceFormat::Other(format) => format.reading_enabled(),
            _ => true,
        }
    }

    /// Dispatch table: the encoding used for output from this source.
    pub fn output_encoding(&self) -> OutputEncoding {
        match self {
            SourceFormat::Gif => OutputEncoding::Gif,
            SourceFormat::Png => OutputEncoding::Png,
            SourceFormat::Jpeg => OutputEncoding::Jpeg {
                quality: MAX_JPEG_QUALITY,
            },
            SourceFormat::Other(_) => OutputEncoding::Jpeg {
                quality: MAX_JPEG_QUALITY,
            },
        }
    }

    /// True when output goes through the JPEG fallback.
    pub fn is_fallback(&self) -> bool {
        !self.is_encodable()
    }

    /// Short lowercase name, as used in log lines.
    pub fn name(&self) -> String {
        match self {
            SourceFormat::Gif => "gif".to_string(),
            SourceFormat::Png => "png".to_string(),
            SourceFormat::Jpeg => "jpeg".to_string(),
            SourceFormat::Other(format) => format!("{format:?}").to_lowercase(),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl OutputEncoding {
    /// MIME type of the encoded stream.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputEncoding::Gif => "image/gif",
            OutputEncoding::Png => "image/png",
            OutputEncoding::Jpeg { .. } => "image/jpeg",
        }
    }
}
