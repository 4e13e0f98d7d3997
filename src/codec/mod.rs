pub mod decode;
pub mod encode;

pub use decode::{decode, decode_gif, detect_format, Decoded};
pub use encode::{encode_static, select_encoding, write_gif, EncodeOptions};
