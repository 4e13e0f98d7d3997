use crate::error::ResizeError;

/// Check that a canvas or frame fits GIF's 16-bit size fields.
pub fn gif_dimensions(width: u32, height: u32) -> Result<(u16, u16), ResizeError> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(ResizeError::Encode(format!(
            "{width}x{height} exceeds GIF maximum (65535x65535)"
        ))),
    }
}

/// What happens to the canvas after a frame has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposal {
    /// No disposal specified; treated like `Keep`
    #[default]
    Any,
    /// Leave the frame in place
    Keep,
    /// Clear the frame's rectangle to transparent
    Background,
    /// Restore the canvas to its state before the frame
    Previous,
}

impl From<gif::DisposalMethod> for Disposal {
    fn from(method: gif::DisposalMethod) -> Self {
        match method {
            gif::DisposalMethod::Any => Disposal::Any,
            gif::DisposalMethod::Keep => Disposal::Keep,
            gif::DisposalMethod::Background => Disposal::Background,
            gif::DisposalMethod::Previous => Disposal::Previous,
        }
    }
}

impl From<Disposal> for gif::DisposalMethod {
    fn from(disposal: Disposal) -> Self {
        match disposal {
            Disposal::Any => gif::DisposalMethod::Any,
            Disposal::Keep => gif::DisposalMethod::Keep,
            Disposal::Background => gif::DisposalMethod::Background,
            Disposal::Previous => gif::DisposalMethod::Previous,
        }
    }
}

/// How many times an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
    /// No loop extension: play once
    #[default]
    Once,
    /// Loop forever
    Infinite,
    /// Repeat the given number of extra times
    Finite(u16),
}

impl From<gif::Repeat> for LoopCount {
    fn from(repeat: gif::Repeat) -> Self {
        match repeat {
            gif::Repeat::Infinite => LoopCount::Infinite,
            gif::Repeat::Finite(0) => LoopCount::Once,
            gif::Repeat::Finite(n) => LoopCount::Finite(n),
        }
    }
}

impl LoopCount {
    /// Loop count in NETSCAPE2.0 terms: `None` means no extension, `Some(0)`
    /// is infinite.
    pub fn from_netscape(count: Option<u16>) -> Self {
        match count {
            None => LoopCount::Once,
            Some(0) => LoopCount::Infinite,
            Some(n) => LoopCount::Finite(n),
        }
    }

    /// The `gif` repeat setting to write, or `None` for no loop extension.
    pub fn to_gif_repeat(self) -> Option<gif::Repeat> {
        match self {
            LoopCount::Once => None,
            LoopCount::Infinite => Some(gif::Repeat::Infinite),
            LoopCount::Finite(n) => Some(gif::Repeat::Finite(n)),
        }
    }
}

/// One frame of an animation.
///
/// `P` is the pixel representation: full-color RGBA while decoding and
/// compositing, palette indices once quantized.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<P> {
    pub image: P,
    /// Horizontal offset within the canvas
    pub left: u32,
    /// Vertical offset within the canvas
    pub top: u32,
    pub disposal: Disposal,
    /// Display duration in hundredths of a second
    pub delay: u16,
}

/// An ordered frame sequence sharing one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedImage<P> {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    pub frames: Vec<Frame<P>>,
    pub loop_count: LoopCount,
}

impl<P> AnimatedImage<P> {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sum of all frame delays in hundredths of a second.
    pub fn total_delay(&self) -> u32 {
        self.frames.iter().map(|f| f.delay as u32).sum()
    }
}
