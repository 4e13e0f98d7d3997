//! Assertion helpers for tests.

use image::{ImageFormat, RgbaImage};
use palette_dither::Palette;
use pretty_assertions::assert_eq;

/// Assert the encoded stream is in the expected format
pub fn assert_format(bytes: &[u8], expected: ImageFormat) {
    let actual = image::guess_format(bytes).unwrap_or_else(|e| {
        panic!(
            "Expected {expected:?}, got unrecognizable {} bytes starting with {:?}: {e}",
            bytes.len(),
            &bytes[..8.min(bytes.len())]
        )
    });
    assert_eq!(actual, expected);
}

/// Assert the encoded image decodes to the expected dimensions
pub fn assert_dimensions(bytes: &[u8], width: u32, height: u32) {
    let image = image::load_from_memory(bytes).expect("output should decode");
    assert_eq!((image.width(), image.height()), (width, height));
}

/// A frame read back from an output GIF.
#[derive(Debug)]
pub struct OutputFrame {
    pub left: u16,
    pub top: u16,
    pub delay: u16,
    pub image: RgbaImage,
}

/// An output GIF, decoded without compositing.
#[derive(Debug)]
pub struct OutputGif {
    pub width: u16,
    pub height: u16,
    pub repeat: gif::Repeat,
    pub frames: Vec<OutputFrame>,
}

/// Decode every frame of an output GIF as RGBA
pub fn read_gif(bytes: &[u8]) -> OutputGif {
    assert_format(bytes, ImageFormat::Gif);

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(bytes).expect("output GIF header");

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().expect("output GIF frame") {
        frames.push(OutputFrame {
            left: frame.left,
            top: frame.top,
            delay: frame.delay,
            image: RgbaImage::from_raw(
                frame.width as u32,
                frame.height as u32,
                frame.buffer.to_vec(),
            )
            .expect("frame buffer size"),
        });
    }

    OutputGif {
        width: decoder.width(),
        height: decoder.height(),
        repeat: decoder.repeat(),
        frames,
    }
}

/// Assert every pixel of every frame is an opaque Plan 9 palette color
pub fn assert_plan9_only(gif: &OutputGif) {
    let palette = Palette::plan9();
    for (index, frame) in gif.frames.iter().enumerate() {
        for (x, y, p) in frame.image.enumerate_pixels() {
            let [r, g, b, a] = p.0;
            assert!(
                a == 255 && palette.contains([r, g, b]),
                "frame {index} pixel ({x},{y}) = {:?} is not a Plan 9 color",
                p.0
            );
        }
    }
}

/// Assert every pixel of an RGBA image has the given RGB color
pub fn assert_solid(image: &RgbaImage, rgb: [u8; 3]) {
    for (x, y, p) in image.enumerate_pixels() {
        assert_eq!(
            [p.0[0], p.0[1], p.0[2]],
            rgb,
            "pixel ({x},{y}) differs"
        );
    }
}
