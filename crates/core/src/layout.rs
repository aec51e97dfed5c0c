use smallvec::{SmallVec, smallvec};

use crate::format::{PixelFormat, Resolution};

/// Geometry of one plane inside a flat frame buffer.
///
/// # Example
/// ```rust
/// use rasterlab_core::prelude::{PixelFormat, Resolution, plane_layout};
///
/// let res = Resolution::new(4, 2).unwrap();
/// let planes = plane_layout(PixelFormat::Yuv420p, res);
/// assert_eq!(planes.len(), 3);
/// assert_eq!(planes[0].len(), 8);
/// assert_eq!(planes[1].len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Byte offset into the flat frame buffer.
    pub offset: usize,
    /// Bytes per row.
    pub stride: usize,
    /// Number of rows.
    pub rows: usize,
}

impl PlaneLayout {
    /// Total plane size in bytes.
    pub fn len(&self) -> usize {
        self.stride * self.rows
    }

    /// Whether the plane holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plane geometry for a frame of the given format and resolution.
///
/// Pure function of its arguments. Planes come back in canonical order:
/// luma (or the packed whole), then U, then V. Chroma dimensions use
/// truncating division, matching the raw on-disk layout for odd sizes.
pub fn plane_layout(format: PixelFormat, resolution: Resolution) -> SmallVec<[PlaneLayout; 3]> {
    let w = resolution.width.get() as usize;
    let h = resolution.height.get() as usize;
    if let Some(bpp) = format.packed_bytes_per_pixel() {
        return smallvec![PlaneLayout {
            offset: 0,
            stride: w * bpp,
            rows: h,
        }];
    }
    let (h_sub, v_sub) = format.chroma_subsampling();
    let chroma_w = w / h_sub as usize;
    let chroma_h = h / v_sub as usize;
    let luma = PlaneLayout {
        offset: 0,
        stride: w,
        rows: h,
    };
    let u = PlaneLayout {
        offset: luma.len(),
        stride: chroma_w,
        rows: chroma_h,
    };
    let v = PlaneLayout {
        offset: u.offset + u.len(),
        stride: chroma_w,
        rows: chroma_h,
    };
    smallvec![luma, u, v]
}

/// Total frame size in bytes for the given format and resolution.
pub fn frame_len(format: PixelFormat, resolution: Resolution) -> usize {
    plane_layout(format, resolution).iter().map(|p| p.len()).sum()
}
