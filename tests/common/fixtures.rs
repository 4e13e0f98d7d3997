//! In-memory input images.

use image::{ImageFormat, Rgba, RgbaImage};
use std::borrow::Cow;
use std::io::{Cursor, Write};

/// Palette indices for [`animated_gif`] frames.
pub mod colors {
    pub const BLACK: u8 = 0;
    pub const WHITE: u8 = 1;
    pub const RED: u8 = 2;
    pub const GREEN: u8 = 3;
    pub const BLUE: u8 = 4;

    /// RGB value of each index above.
    pub const RGB: [[u8; 3]; 5] = [
        [0, 0, 0],
        [255, 255, 255],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
    ];
}

/// A horizontal gradient with a little vertical variation.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

/// Encode `image` in `format`. Formats without alpha support get RGB.
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg | ImageFormat::Bmp => image::DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .write_to(&mut buf, format)
            .unwrap(),
        _ => image.write_to(&mut buf, format).unwrap(),
    }
    buf.into_inner()
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Jpeg)
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Png)
}

/// One frame of a test GIF: a solid rectangle of a single palette index.
#[derive(Debug, Clone, Copy)]
pub struct GifFrame {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub color: u8,
    pub delay: u16,
    pub dispose: gif::DisposalMethod,
}

impl GifFrame {
    /// A frame covering the whole `width`×`height` canvas.
    pub fn full(width: u16, height: u16, color: u8, delay: u16) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
            color,
            delay,
            dispose: gif::DisposalMethod::Keep,
        }
    }
}

/// Encode an animated GIF using the [`colors`] palette.
pub fn animated_gif(
    width: u16,
    height: u16,
    frames: &[GifFrame],
    repeat: Option<gif::Repeat>,
) -> Vec<u8> {
    let palette: Vec<u8> = colors::RGB.iter().flatten().copied().collect();
    let mut buf = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut buf, width, height, &palette).unwrap();
        if let Some(repeat) = repeat {
            encoder.set_repeat(repeat).unwrap();
        }
        for f in frames {
            encoder
                .write_frame(&gif::Frame {
                    left: f.left,
                    top: f.top,
                    width: f.width,
                    height: f.height,
                    delay: f.delay,
                    dispose: f.dispose,
                    buffer: Cow::Owned(vec![f.color; f.width as usize * f.height as usize]),
                    ..Default::default()
                })
                .unwrap();
        }
    }
    buf
}

/// Three full-canvas frames (red, green, blue) with distinct delays.
pub fn three_frame_gif(width: u16, height: u16) -> Vec<u8> {
    animated_gif(
        width,
        height,
        &[
            GifFrame::full(width, height, colors::RED, 10),
            GifFrame::full(width, height, colors::GREEN, 20),
            GifFrame::full(width, height, colors::BLUE, 30),
        ],
        Some(gif::Repeat::Infinite),
    )
}

/// Write `bytes` to a fresh temporary file.
pub fn temp_file(bytes: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
