use std::{fmt, num::NonZeroU32, str::FromStr};

/// Pixel format of a raw frame.
///
/// Each variant carries its own plane geometry (plane count, chroma
/// subsampling, bits per pixel) as data, so adding a format is a data
/// addition rather than a change at every call site.
///
/// # Example
/// ```rust
/// use rasterlab_core::prelude::PixelFormat;
///
/// let fmt: PixelFormat = "yuv420p".parse().unwrap();
/// assert_eq!(fmt.plane_count(), 3);
/// assert_eq!(fmt.bits_per_pixel(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PixelFormat {
    /// Single 8-bit luminance plane.
    Gray8,
    /// Planar YUV with 2:1 horizontal and 2:1 vertical chroma subsampling.
    Yuv420p,
    /// Planar YUV with 2:1 horizontal chroma subsampling.
    Yuv422p,
    /// Planar YUV with full-resolution chroma.
    Yuv444p,
    /// Packed 4:2:2 YUV, Y0 U Y1 V per pixel pair.
    Yuyv422,
    /// Packed 8-bit-per-channel RGB.
    Rgb24,
}

impl PixelFormat {
    /// All supported formats, in tag order.
    pub const ALL: [PixelFormat; 6] = [
        PixelFormat::Gray8,
        PixelFormat::Yuv420p,
        PixelFormat::Yuv422p,
        PixelFormat::Yuv444p,
        PixelFormat::Yuyv422,
        PixelFormat::Rgb24,
    ];

    /// Number of planes a frame of this format is made of.
    pub fn plane_count(self) -> usize {
        match self {
            PixelFormat::Yuv420p | PixelFormat::Yuv422p | PixelFormat::Yuv444p => 3,
            PixelFormat::Gray8 | PixelFormat::Yuyv422 | PixelFormat::Rgb24 => 1,
        }
    }

    /// Horizontal and vertical chroma subsampling divisors.
    ///
    /// `(1, 1)` for formats without a separate chroma plane.
    pub fn chroma_subsampling(self) -> (u32, u32) {
        match self {
            PixelFormat::Yuv420p => (2, 2),
            PixelFormat::Yuv422p => (2, 1),
            _ => (1, 1),
        }
    }

    /// Average bits per pixel over a whole frame.
    pub fn bits_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 8,
            PixelFormat::Yuv420p => 12,
            PixelFormat::Yuv422p | PixelFormat::Yuyv422 => 16,
            PixelFormat::Yuv444p | PixelFormat::Rgb24 => 24,
        }
    }

    /// Whether all channels live interleaved in a single plane.
    pub fn is_packed(self) -> bool {
        self.plane_count() == 1
    }

    /// Bytes per pixel for single-plane formats, `None` for planar ones.
    pub fn packed_bytes_per_pixel(self) -> Option<usize> {
        match self {
            PixelFormat::Gray8 => Some(1),
            PixelFormat::Yuyv422 => Some(2),
            PixelFormat::Rgb24 => Some(3),
            _ => None,
        }
    }

    /// Lowercase tag used in conventional raw file names.
    pub fn tag(self) -> &'static str {
        match self {
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Yuv420p => "yuv420p",
            PixelFormat::Yuv422p => "yuv422p",
            PixelFormat::Yuv444p => "yuv444p",
            PixelFormat::Yuyv422 => "yuyv422",
            PixelFormat::Rgb24 => "rgb24",
        }
    }

    /// Conventional raw file extension for this format.
    pub fn file_ext(self) -> &'static str {
        match self {
            PixelFormat::Rgb24 => "rgb",
            _ => "yuv",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A pixel format tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported pixel format: {0:?}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for PixelFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PixelFormat::ALL
            .into_iter()
            .find(|fmt| fmt.tag() == s)
            .ok_or_else(|| UnsupportedFormat(s.to_string()))
    }
}

/// Resolution of a frame.
///
/// # Example
/// ```rust
/// use rasterlab_core::prelude::Resolution;
///
/// let res = Resolution::new(640, 480).unwrap();
/// assert_eq!(res.width.get(), 640);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Width in pixels (non-zero).
    pub width: NonZeroU32,
    /// Height in pixels (non-zero).
    pub height: NonZeroU32,
}

impl Resolution {
    /// Create a resolution, returning `None` if width or height are zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Conventional raw file name: `<stem>_<width>x<height>_<tag>.<ext>`.
///
/// The name encodes format metadata for human identification only; it
/// is never parsed back.
///
/// # Example
/// ```rust
/// use rasterlab_core::prelude::{PixelFormat, Resolution, raw_file_name};
///
/// let res = Resolution::new(1280, 720).unwrap();
/// let name = raw_file_name("graybar", PixelFormat::Yuv420p, res);
/// assert_eq!(name, "graybar_1280x720_yuv420p.yuv");
/// ```
pub fn raw_file_name(stem: &str, format: PixelFormat, resolution: Resolution) -> String {
    format!(
        "{stem}_{}_{}.{}",
        resolution,
        format.tag(),
        format.file_ext()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for fmt in PixelFormat::ALL {
            assert_eq!(fmt.tag().parse::<PixelFormat>(), Ok(fmt));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "nv12".parse::<PixelFormat>().unwrap_err();
        assert_eq!(err, UnsupportedFormat("nv12".into()));
    }

    #[test]
    fn packed_formats_are_single_plane() {
        assert!(PixelFormat::Rgb24.is_packed());
        assert!(PixelFormat::Yuyv422.is_packed());
        assert!(!PixelFormat::Yuv420p.is_packed());
        assert_eq!(PixelFormat::Yuyv422.packed_bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::Yuv444p.packed_bytes_per_pixel(), None);
    }

    #[test]
    fn file_name_convention() {
        let res = Resolution::new(480, 272).unwrap();
        assert_eq!(
            raw_file_name("sintel", PixelFormat::Yuv420p, res),
            "sintel_480x272_yuv420p.yuv"
        );
        assert_eq!(
            raw_file_name("colorbar", PixelFormat::Rgb24, res),
            "colorbar_480x272_rgb24.rgb"
        );
    }
}
