//! Format detection and decoding.

use crate::error::ResizeError;
use crate::models::{AnimatedImage, Frame, LoopCount, SourceFormat};
use image::RgbaImage;
use std::io::Cursor;

/// A decoded input, ready for the resize stage.
#[derive(Debug)]
pub enum Decoded {
    /// A single raster image and the format it came from
    Static {
        image: RgbaImage,
        format: SourceFormat,
    },
    /// Every frame of a GIF with its canvas metadata
    Animated(AnimatedImage<RgbaImage>),
}

impl Decoded {
    pub fn format(&self) -> SourceFormat {
        match self {
            Decoded::Static { format, .. } => *format,
            Decoded::Animated(_) => SourceFormat::Gif,
        }
    }

    /// Canvas (or image) dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Decoded::Static { image, .. } => image.dimensions(),
            Decoded::Animated(anim) => (anim.width, anim.height),
        }
    }
}

/// Sniff the encoding from the leading bytes.
pub fn detect_format(data: &[u8]) -> Result<SourceFormat, ResizeError> {
    if data.is_empty() {
        return Err(ResizeError::Decode("empty input".to_string()));
    }
    let format = image::guess_format(data)
        .map_err(|e| ResizeError::Decode(format!("unrecognized image format: {e}")))?;
    Ok(SourceFormat::from_image_format(format))
}

/// Decode raw bytes into pixels.
///
/// GIF input always takes the animated path, even with a single frame.
/// Everything else is decoded to 8-bit RGBA; higher bit depths are reduced.
pub fn decode(data: &[u8]) -> Result<Decoded, ResizeError> {
    let format = detect_format(data)?;

    if format.is_animatable() {
        return decode_gif(data).map(Decoded::Animated);
    }

    let image_format = match format {
        SourceFormat::Png => image::ImageFormat::Png,
        SourceFormat::Jpeg => image::ImageFormat::Jpeg,
        SourceFormat::Gif => image::ImageFormat::Gif,
        SourceFormat::Other(f) => f,
    };
    if !format.is_decodable() {
        return Err(ResizeError::Decode(format!(
            "no decoder available for {format}"
        )));
    }

    let image = image::load_from_memory_with_format(data, image_format)
        .map_err(|e| ResizeError::Decode(e.to_string()))?
        .to_rgba8();

    tracing::debug!(
        format = %format,
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );

    Ok(Decoded::Static { image, format })
}

/// Decode every GIF frame as RGBA together with its placement metadata.
///
/// Frames are left uncomposited: each keeps its own rectangle and offset.
pub fn decode_gif(data: &[u8]) -> Result<AnimatedImage<RgbaImage>, ResizeError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(Cursor::new(data))?;

    let width = decoder.width() as u32;
    let height = decoder.height() as u32;
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame()? {
        let (frame_w, frame_h) = (frame.width as u32, frame.height as u32);
        let image = RgbaImage::from_raw(frame_w, frame_h, frame.buffer.to_vec()).ok_or_else(
            || {
                ResizeError::Decode(format!(
                    "frame {} buffer does not match {}x{}",
                    frames.len(),
                    frame_w,
                    frame_h
                ))
            },
        )?;

        frames.push(Frame {
            image,
            left: frame.left as u32,
            top: frame.top as u32,
            disposal: frame.dispose.into(),
            delay: frame.delay,
        });
    }

    if frames.is_empty() {
        return Err(ResizeError::Decode("GIF contains no frames".to_string()));
    }

    let loop_count = LoopCount::from(decoder.repeat());

    tracing::debug!(
        width,
        height,
        frames = frames.len(),
        loop_count = ?loop_count,
        "Decoded GIF"
    );

    Ok(AnimatedImage {
        width,
        height,
        frames,
        loop_count,
    })
}
