//! Encoder dispatch.

use crate::error::ResizeError;
use crate::models::{gif_dimensions, AnimatedImage, OutputEncoding, SourceFormat};
use crate::rendering::premultiply;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbaImage};
use palette_dither::DitheredImage;
use std::borrow::Cow;
use std::io::Write;

/// Per-call encoder settings that don't affect the dispatch table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Recompress PNG output with oxipng
    pub optimize_png: bool,
}

/// Pick the output encoding for a source format.
///
/// Formats without an encoder of their own fall back to maximum-quality JPEG,
/// with a warning on the log.
pub fn select_encoding(format: SourceFormat) -> OutputEncoding {
    let encoding = format.output_encoding();
    if format.is_fallback() {
        tracing::warn!(
            format = %format,
            "Unsupported media type ({}), encoding as jpeg",
            format
        );
    }
    encoding
}

/// Encode a single resized image, choosing the encoding from `format`.
///
/// GIF sources are animations and go through [`write_gif`] instead.
pub fn encode_static<W: Write>(
    image: &RgbaImage,
    format: SourceFormat,
    options: EncodeOptions,
    out: &mut W,
) -> Result<OutputEncoding, ResizeError> {
    let encoding = select_encoding(format);
    tracing::debug!(
        encoding = encoding.mime_type(),
        width = image.width(),
        height = image.height(),
        "Encoding image"
    );

    match encoding {
        OutputEncoding::Png => write_png(image, options, out)?,
        OutputEncoding::Jpeg { quality } => write_jpeg(image, quality, out)?,
        OutputEncoding::Gif => {
            return Err(ResizeError::Encode(
                "GIF output is written frame by frame with write_gif".to_string(),
            ))
        }
    }

    Ok(encoding)
}

/// Encode every frame of a quantized animation as a GIF.
///
/// The frames' shared palette is written once as the global color table.
pub fn write_gif<W: Write>(
    animation: &AnimatedImage<DitheredImage<'_>>,
    out: &mut W,
) -> Result<(), ResizeError> {
    let (width, height) = gif_dimensions(animation.width, animation.height)?;
    let first = animation
        .frames
        .first()
        .ok_or_else(|| ResizeError::Encode("animation has no frames".to_string()))?;
    let palette = first.image.palette();

    let mut encoder = gif::Encoder::new(&mut *out, width, height, &palette.to_rgb_bytes())?;
    if let Some(repeat) = animation.loop_count.to_gif_repeat() {
        encoder.set_repeat(repeat)?;
    }

    for (index, frame) in animation.frames.iter().enumerate() {
        let (frame_w, frame_h) =
            gif_dimensions(frame.image.width() as u32, frame.image.height() as u32)?;
        let (left, top) = gif_dimensions(frame.left, frame.top)?;
        if frame.left + frame_w as u32 > animation.width
            || frame.top + frame_h as u32 > animation.height
        {
            return Err(ResizeError::Encode(format!(
                "frame {index} ({frame_w}x{frame_h} at {left},{top}) exceeds canvas {width}x{height}"
            )));
        }
        if frame.image.palette() != palette {
            return Err(ResizeError::Encode(format!(
                "frame {index} uses a different palette"
            )));
        }

        let gif_frame = gif::Frame {
            left,
            top,
            width: frame_w,
            height: frame_h,
            delay: frame.delay,
            dispose: frame.disposal.into(),
            buffer: Cow::Borrowed(frame.image.indices()),
            ..Default::default()
        };
        encoder.write_frame(&gif_frame)?;
    }

    encoder.into_inner()?;
    Ok(())
}

/// Write RGBA pixels as 8-bit PNG, dropping the alpha channel when every
/// pixel is opaque.
fn write_png<W: Write>(
    image: &RgbaImage,
    options: EncodeOptions,
    out: &mut W,
) -> Result<(), ResizeError> {
    let opaque = image.pixels().all(|p| p.0[3] == 255);
    let (color_type, data): (png::ColorType, Cow<'_, [u8]>) = if opaque {
        let rgb: Vec<u8> = image
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        (png::ColorType::Rgb, Cow::Owned(rgb))
    } else {
        (png::ColorType::Rgba, Cow::Borrowed(image.as_raw()))
    };

    if !options.optimize_png {
        return encode_png(image.width(), image.height(), color_type, &data, out);
    }

    let mut buf = Vec::new();
    encode_png(image.width(), image.height(), color_type, &data, &mut buf)?;
    let optimized = match oxipng::optimize_from_memory(
        &buf,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            ..Default::default()
        },
    ) {
        Ok(optimized) => optimized,
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            buf
        }
    };
    out.write_all(&optimized)?;
    Ok(())
}

fn encode_png<W: Write>(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
    out: &mut W,
) -> Result<(), ResizeError> {
    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    writer.finish()?;
    Ok(())
}

/// Write RGB JPEG. Alpha is flattened onto black.
fn write_jpeg<W: Write>(image: &RgbaImage, quality: u8, out: &mut W) -> Result<(), ResizeError> {
    let rgb: Vec<u8> = image
        .pixels()
        .flat_map(|p| premultiply(p.0))
        .collect();

    JpegEncoder::new_with_quality(out, quality)
        .encode(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => ResizeError::Io(io),
            other => ResizeError::Encode(other.to_string()),
        })
}
