#![doc = include_str!("../README.md")]

pub mod format;
pub mod frame;
pub mod layout;

/// Commonly used types, glob-importable.
pub mod prelude {
    pub use crate::format::{PixelFormat, Resolution, UnsupportedFormat, raw_file_name};
    pub use crate::frame::{Frame, LayoutError};
    pub use crate::layout::{PlaneLayout, frame_len, plane_layout};
}
