pub mod resize_service;

pub use resize_service::{ResizeService, ResizeSummary};
