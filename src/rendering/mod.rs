pub mod alpha;
pub mod animation;
pub mod resample;

pub use alpha::premultiply;
pub use animation::{quantize, resize_animation, Canvas};
pub use resample::resize;
