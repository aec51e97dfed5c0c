use ffmpeg_next as ffmpeg;

use ffmpeg::software::scaling;
use ffmpeg::util::format::Pixel;
use ffmpeg::util::frame::video::Video;

use rasterlab_core::prelude::{Frame, PixelFormat, Resolution, plane_layout};

use crate::convert::{ConvertError, Converter, FilterKind};

/// Converter backed by FFmpeg's swscale.
///
/// A scaling context is built per call; swscale contexts are cheap
/// relative to the per-frame pixel work, and a fresh context keeps the
/// converter stateless behind the trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegConverter;

fn ff_pixel(format: PixelFormat) -> Pixel {
    match format {
        PixelFormat::Gray8 => Pixel::GRAY8,
        PixelFormat::Yuv420p => Pixel::YUV420P,
        PixelFormat::Yuv422p => Pixel::YUV422P,
        PixelFormat::Yuv444p => Pixel::YUV444P,
        PixelFormat::Yuyv422 => Pixel::YUYV422,
        PixelFormat::Rgb24 => Pixel::RGB24,
    }
}

fn ff_flags(filter: FilterKind) -> scaling::Flags {
    match filter {
        FilterKind::Nearest => scaling::Flags::POINT,
        FilterKind::Bilinear => scaling::Flags::BILINEAR,
        FilterKind::Bicubic => scaling::Flags::BICUBIC,
    }
}

fn backend(err: ffmpeg::Error) -> ConvertError {
    ConvertError::Backend(err.to_string())
}

impl Converter for FfmpegConverter {
    fn convert(
        &self,
        src: &Frame,
        dst_format: PixelFormat,
        dst_resolution: Resolution,
        filter: FilterKind,
    ) -> Result<Frame, ConvertError> {
        let src_res = src.resolution();
        let mut input = Video::new(
            ff_pixel(src.format()),
            src_res.width.get(),
            src_res.height.get(),
        );
        // FFmpeg frames carry per-row alignment padding, so planes are
        // copied row by row rather than as whole buffers.
        for (index, layout) in plane_layout(src.format(), src_res).iter().enumerate() {
            let Some(plane) = src.plane(index) else {
                continue;
            };
            let stride = input.stride(index);
            let data = input.data_mut(index);
            for row in 0..layout.rows {
                data[row * stride..row * stride + layout.stride]
                    .copy_from_slice(&plane[row * layout.stride..(row + 1) * layout.stride]);
            }
        }

        let mut scaler = scaling::Context::get(
            ff_pixel(src.format()),
            src_res.width.get(),
            src_res.height.get(),
            ff_pixel(dst_format),
            dst_resolution.width.get(),
            dst_resolution.height.get(),
            ff_flags(filter),
        )
        .map_err(backend)?;
        let mut output = Video::new(
            ff_pixel(dst_format),
            dst_resolution.width.get(),
            dst_resolution.height.get(),
        );
        scaler.run(&input, &mut output).map_err(backend)?;

        let mut frame = Frame::alloc(dst_format, dst_resolution);
        for (index, layout) in plane_layout(dst_format, dst_resolution).iter().enumerate() {
            let stride = output.stride(index);
            let data = output.data(index);
            let Some(plane) = frame.plane_mut(index) else {
                continue;
            };
            for row in 0..layout.rows {
                plane[row * layout.stride..(row + 1) * layout.stride]
                    .copy_from_slice(&data[row * stride..row * stride + layout.stride]);
            }
        }
        Ok(frame)
    }
}
