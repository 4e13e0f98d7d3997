pub mod config;
pub mod format;
pub mod frame;
pub mod request;

pub use config::ResizeConfig;
pub use format::{OutputEncoding, SourceFormat, MAX_JPEG_QUALITY};
pub use frame::{gif_dimensions, AnimatedImage, Disposal, Frame, LoopCount};
pub use request::ResizeRequest;
