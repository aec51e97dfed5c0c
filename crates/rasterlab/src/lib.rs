#![doc = include_str!("../README.md")]

pub mod convert;
#[cfg(feature = "converter-ffmpeg")]
pub mod ffmpeg;
pub mod generate;
pub mod stream;

/// Commonly used types, glob-importable.
pub mod prelude {
    pub use crate::convert::{ConvertError, Converter, FilterKind, PassthroughConverter};
    #[cfg(feature = "converter-ffmpeg")]
    pub use crate::ffmpeg::FfmpegConverter;
    pub use crate::generate::{
        BatchReport, GenerateError, generate_all, write_bmp_file, write_cube_file,
        write_frame_file,
    };
    pub use crate::stream::{RawFrameReader, RawFrameWriter, StreamError, scale_raw_stream};
    pub use rasterlab_core::prelude::*;
    pub use rasterlab_pattern::prelude::*;
}
