use rasterlab_core::prelude::{Frame, PixelFormat, Resolution};

/// Interpolation filter a converter should use when resampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterKind {
    /// Nearest-neighbor point sampling.
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Bicubic interpolation.
    #[default]
    Bicubic,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The backend refused or failed the conversion.
    #[error("conversion backend: {0}")]
    Backend(String),
    /// The backend does not implement this format pair.
    #[error("unsupported conversion: {src} -> {dst}")]
    Unsupported {
        src: PixelFormat,
        dst: PixelFormat,
    },
}

/// A pixel format and resolution converter.
///
/// Implementations own whatever scaler state they need; the streaming
/// driver only sees this seam, so backends can be swapped without
/// touching the file plumbing.
pub trait Converter {
    fn convert(
        &self,
        src: &Frame,
        dst_format: PixelFormat,
        dst_resolution: Resolution,
        filter: FilterKind,
    ) -> Result<Frame, ConvertError>;
}

/// A converter that only handles the identity conversion.
///
/// Useful for exercising the streaming driver without a scaler backend
/// compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughConverter;

impl Converter for PassthroughConverter {
    fn convert(
        &self,
        src: &Frame,
        dst_format: PixelFormat,
        dst_resolution: Resolution,
        _filter: FilterKind,
    ) -> Result<Frame, ConvertError> {
        if dst_format != src.format() {
            return Err(ConvertError::Unsupported {
                src: src.format(),
                dst: dst_format,
            });
        }
        if dst_resolution != src.resolution() {
            return Err(ConvertError::Backend(format!(
                "passthrough cannot scale {} to {}",
                src.resolution(),
                dst_resolution
            )));
        }
        Ok(src.clone())
    }
}
