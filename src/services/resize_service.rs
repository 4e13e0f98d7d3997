use crate::codec::{decode, encode_static, write_gif, Decoded, EncodeOptions};
use crate::error::ResizeError;
use crate::models::{OutputEncoding, ResizeConfig, ResizeRequest, SourceFormat};
use crate::rendering::{resize, resize_animation};
use std::io::Write;

/// What a resize call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSummary {
    pub format: SourceFormat,
    pub encoding: OutputEncoding,
    /// Source (canvas) dimensions
    pub source: (u32, u32),
    /// Output (canvas) dimensions
    pub output: (u32, u32),
    /// Frames written; 1 for static images
    pub frames: usize,
}

/// Entry point for the decode → resize → encode pipeline.
///
/// Holds only read-only configuration, so one instance can serve any
/// number of calls, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct ResizeService {
    config: ResizeConfig,
}

impl ResizeService {
    /// Identifier the service registers under.
    pub const ID: &'static str = "resize_svc";

    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    /// Lifecycle hook. There is nothing to prepare, so this always succeeds.
    pub fn start(&self) -> Result<(), ResizeError> {
        tracing::debug!(id = Self::ID, "Service started");
        Ok(())
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Resize `data` to height `size` and write the encoded result to `out`.
    ///
    /// The width follows the source aspect ratio. Animated input is resized
    /// to `size / 2`.
    pub fn resize<W: Write>(
        &self,
        data: &[u8],
        out: &mut W,
        size: u32,
    ) -> Result<ResizeSummary, ResizeError> {
        let decoded = decode(data)?;
        let request = match decoded {
            Decoded::Animated(_) => ResizeRequest::with_height(size / 2),
            Decoded::Static { .. } => ResizeRequest::with_height(size),
        };
        self.process(decoded, request, out)
    }

    /// Resize `data` to an explicit request, with no animated-path halving.
    pub fn resize_with<W: Write>(
        &self,
        data: &[u8],
        out: &mut W,
        request: ResizeRequest,
    ) -> Result<ResizeSummary, ResizeError> {
        self.process(decode(data)?, request, out)
    }

    fn process<W: Write>(
        &self,
        decoded: Decoded,
        request: ResizeRequest,
        out: &mut W,
    ) -> Result<ResizeSummary, ResizeError> {
        let format = decoded.format();
        let source = decoded.dimensions();

        let summary = match decoded {
            Decoded::Static { image, format } => {
                let (width, height) = request.resolve(image.width(), image.height())?;
                let resized = resize(&image, width, height)?;
                let options = EncodeOptions {
                    optimize_png: self.config.optimize_png,
                };
                let encoding = encode_static(&resized, format, options, out)?;
                ResizeSummary {
                    format,
                    encoding,
                    source,
                    output: (width, height),
                    frames: 1,
                }
            }
            Decoded::Animated(animation) => {
                let mut resized = resize_animation(&animation, request)?;
                resized.loop_count = self.config.resolve_loop_count(animation.loop_count);
                write_gif(&resized, out)?;
                ResizeSummary {
                    format,
                    encoding: OutputEncoding::Gif,
                    source,
                    output: (resized.width, resized.height),
                    frames: resized.frame_count(),
                }
            }
        };

        tracing::info!(
            format = %format,
            encoding = summary.encoding.mime_type(),
            src_width = source.0,
            src_height = source.1,
            width = summary.output.0,
            height = summary.output.1,
            frames = summary.frames,
            "Resized image"
        );

        Ok(summary)
    }
}
