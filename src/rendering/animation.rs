//! Animated GIF pipeline: composite, resize, quantize.
//!
//! GIF frames are usually partial updates, so each one is first drawn onto a
//! persistent canvas the size of the logical screen. The composited canvas
//! is what gets resized and dithered into the fixed Plan 9 palette.

use crate::error::ResizeError;
use crate::models::{gif_dimensions, AnimatedImage, Disposal, Frame, ResizeRequest};
use crate::rendering::{premultiply, resample};
use image::{Rgba, RgbaImage};
use palette_dither::{Dither, DitheredImage, FloydSteinberg, Palette};

/// Accumulated display state of an animation.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Draw `frame` source-over at its offset, clipped to the canvas.
    pub fn draw(&mut self, frame: &Frame<RgbaImage>) {
        let (width, height) = self.pixels.dimensions();
        for (x, y, src) in frame.image.enumerate_pixels() {
            let cx = frame.left.saturating_add(x);
            let cy = frame.top.saturating_add(y);
            if cx >= width || cy >= height {
                continue;
            }
            let dst = self.pixels.get_pixel_mut(cx, cy);
            *dst = over(*src, *dst);
        }
    }

    /// Clear the rectangle covered by `frame` to transparent.
    fn clear(&mut self, frame: &Frame<RgbaImage>) {
        let (width, height) = self.pixels.dimensions();
        let right = frame.left.saturating_add(frame.image.width()).min(width);
        let bottom = frame.top.saturating_add(frame.image.height()).min(height);
        for y in frame.top..bottom {
            for x in frame.left..right {
                self.pixels.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            }
        }
    }

    /// Draw `frame`, return the visible result, then apply its disposal so
    /// the canvas is ready for the next frame.
    pub fn compose(&mut self, frame: &Frame<RgbaImage>) -> RgbaImage {
        let saved = (frame.disposal == Disposal::Previous).then(|| self.pixels.clone());

        self.draw(frame);
        let visible = self.pixels.clone();

        match frame.disposal {
            Disposal::Any | Disposal::Keep => {}
            Disposal::Background => self.clear(frame),
            Disposal::Previous => {
                if let Some(saved) = saved {
                    self.pixels = saved;
                }
            }
        }

        visible
    }
}

/// Porter-Duff source-over on straight-alpha pixels.
fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match (src.0[3], dst.0[3]) {
        (255, _) | (_, 0) => src,
        (0, _) => dst,
        (sa, da) => {
            let sa = sa as f32 / 255.0;
            let da = da as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let blend = |s: u8, d: u8| {
                ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            Rgba([
                blend(src.0[0], dst.0[0]),
                blend(src.0[1], dst.0[1]),
                blend(src.0[2], dst.0[2]),
                (out_a * 255.0).round() as u8,
            ])
        }
    }
}

/// Dither an RGBA image into the Plan 9 palette.
///
/// Alpha is flattened onto black first; the palette has no transparent entry.
pub fn quantize(image: &RgbaImage) -> DitheredImage<'static> {
    let pixels: Vec<[u8; 3]> = image.pixels().map(|p| premultiply(p.0)).collect();
    FloydSteinberg.dither(
        &pixels,
        image.width() as usize,
        image.height() as usize,
        Palette::plan9(),
    )
}

/// Composite, resize and quantize every frame of `animation`.
///
/// Output frames cover the whole resized canvas and keep their source
/// order, delay and disposal. The loop count is carried over unchanged.
pub fn resize_animation(
    animation: &AnimatedImage<RgbaImage>,
    request: ResizeRequest,
) -> Result<AnimatedImage<DitheredImage<'static>>, ResizeError> {
    let (width, height) = request.resolve(animation.width, animation.height)?;
    // Reject before any frame buffer of that size is allocated
    gif_dimensions(width, height)?;

    // The canvas is threaded through the fold: each frame sees exactly the
    // state its predecessors left behind.
    let initial = (
        Canvas::new(animation.width, animation.height),
        Vec::with_capacity(animation.frames.len()),
    );
    let (_, frames) = animation.frames.iter().enumerate().try_fold(
        initial,
        |(mut canvas, mut frames), (index, frame)| {
            let visible = canvas.compose(frame);
            let resized = resample::resize(&visible, width, height)?;
            tracing::debug!(index, delay = frame.delay, "Resized frame");

            frames.push(Frame {
                image: quantize(&resized),
                left: 0,
                top: 0,
                disposal: frame.disposal,
                delay: frame.delay,
            });
            Ok::<_, ResizeError>((canvas, frames))
        },
    )?;

    tracing::debug!(
        src_width = animation.width,
        src_height = animation.height,
        width,
        height,
        frames = frames.len(),
        "Resized animation"
    );

    Ok(AnimatedImage {
        width,
        height,
        frames,
        loop_count: animation.loop_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoopCount;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn frame(image: RgbaImage, left: u32, top: u32, disposal: Disposal) -> Frame<RgbaImage> {
        Frame {
            image,
            left,
            top,
            disposal,
            delay: 10,
        }
    }

    #[test]
    fn test_partial_frame_draws_over_previous() {
        let mut canvas = Canvas::new(3, 3);
        canvas.compose(&frame(RgbaImage::from_pixel(3, 3, RED), 0, 0, Disposal::Keep));
        let visible = canvas.compose(&frame(
            RgbaImage::from_pixel(1, 1, BLUE),
            1,
            1,
            Disposal::Keep,
        ));

        assert_eq!(*visible.get_pixel(1, 1), BLUE);
        assert_eq!(*visible.get_pixel(0, 0), RED);
        assert_eq!(*visible.get_pixel(2, 2), RED);
    }

    #[test]
    fn test_transparent_pixels_show_through() {
        let mut canvas = Canvas::new(2, 1);
        canvas.compose(&frame(RgbaImage::from_pixel(2, 1, RED), 0, 0, Disposal::Keep));
        let mut overlay = RgbaImage::from_pixel(2, 1, CLEAR);
        overlay.put_pixel(1, 0, BLUE);
        let visible = canvas.compose(&frame(overlay, 0, 0, Disposal::Keep));

        assert_eq!(*visible.get_pixel(0, 0), RED);
        assert_eq!(*visible.get_pixel(1, 0), BLUE);
    }

    #[test]
    fn test_background_disposal_clears_rect() {
        let mut canvas = Canvas::new(2, 2);
        let visible = canvas.compose(&frame(
            RgbaImage::from_pixel(1, 2, RED),
            1,
            0,
            Disposal::Background,
        ));
        assert_eq!(*visible.get_pixel(1, 0), RED);
        assert!(canvas.pixels().pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_previous_disposal_restores() {
        let mut canvas = Canvas::new(2, 2);
        canvas.compose(&frame(RgbaImage::from_pixel(2, 2, RED), 0, 0, Disposal::Keep));
        let visible = canvas.compose(&frame(
            RgbaImage::from_pixel(2, 2, BLUE),
            0,
            0,
            Disposal::Previous,
        ));
        assert_eq!(*visible.get_pixel(0, 0), BLUE);
        assert!(canvas.pixels().pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_frame_past_edge_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw(&frame(RgbaImage::from_pixel(3, 3, BLUE), 2, 3, Disposal::Keep));

        assert_eq!(*canvas.pixels().get_pixel(3, 3), BLUE);
        assert_eq!(*canvas.pixels().get_pixel(2, 3), BLUE);
        assert_eq!(*canvas.pixels().get_pixel(1, 3), CLEAR);
        assert_eq!(*canvas.pixels().get_pixel(3, 2), CLEAR);
    }

    #[test]
    fn test_half_transparent_over() {
        let out = over(Rgba([255, 255, 255, 128]), Rgba([0, 0, 0, 255]));
        assert_eq!(out.0[3], 255);
        assert!((127..=129).contains(&out.0[0]), "{:?}", out.0);
    }

    #[test]
    fn test_quantize_exact_palette_colors() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let dithered = quantize(&img);

        assert_eq!(dithered.width(), 4);
        assert_eq!(dithered.palette().color(dithered.indices()[0] as usize), [0, 0, 0]);
        assert_eq!(
            dithered.palette().color(dithered.indices()[15] as usize),
            [255, 255, 255]
        );
    }

    #[test]
    fn test_quantize_flattens_transparency() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        let dithered = quantize(&img);
        assert!(dithered
            .indices()
            .iter()
            .all(|&i| dithered.palette().color(i as usize) == [0, 0, 0]));
    }

    #[test]
    fn test_resize_animation() {
        let frames = [RED, BLUE, Rgba([0, 255, 0, 255])]
            .into_iter()
            .enumerate()
            .map(|(i, color)| Frame {
                image: RgbaImage::from_pixel(100, 100, color),
                left: 0,
                top: 0,
                disposal: Disposal::Keep,
                delay: 5 * (i as u16 + 1),
            })
            .collect();
        let animation = AnimatedImage {
            width: 100,
            height: 100,
            frames,
            loop_count: LoopCount::Infinite,
        };

        let out = resize_animation(&animation, ResizeRequest::with_height(50)).unwrap();

        assert_eq!((out.width, out.height), (50, 50));
        assert_eq!(out.loop_count, LoopCount::Infinite);
        assert_eq!(
            out.frames.iter().map(|f| f.delay).collect::<Vec<_>>(),
            vec![5, 10, 15]
        );
        for f in &out.frames {
            assert_eq!((f.image.width(), f.image.height()), (50, 50));
            assert_eq!((f.left, f.top), (0, 0));
            assert!(std::ptr::eq(f.image.palette(), Palette::plan9()));
        }
        // Pure primaries are exact Plan 9 entries
        let first = &out.frames[0].image;
        assert!(first
            .indices()
            .iter()
            .all(|&i| first.palette().color(i as usize) == [255, 0, 0]));
    }

    #[test]
    fn test_resize_animation_rejects_oversized_target() {
        let animation = AnimatedImage {
            width: 4,
            height: 4,
            frames: vec![frame(RgbaImage::from_pixel(4, 4, RED), 0, 0, Disposal::Keep)],
            loop_count: LoopCount::Once,
        };
        assert!(matches!(
            resize_animation(&animation, ResizeRequest::with_height(70_000)),
            Err(ResizeError::Encode(_))
        ));
    }

    #[test]
    fn test_resize_animation_rejects_empty_canvas() {
        let animation: AnimatedImage<RgbaImage> = AnimatedImage {
            width: 0,
            height: 10,
            frames: Vec::new(),
            loop_count: LoopCount::Once,
        };
        assert!(matches!(
            resize_animation(&animation, ResizeRequest::with_height(5)),
            Err(ResizeError::InvalidDimensions { .. })
        ));
    }
}
