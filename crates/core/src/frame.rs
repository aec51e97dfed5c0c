use smallvec::SmallVec;

use crate::format::{PixelFormat, Resolution};
use crate::layout::{frame_len, plane_layout};

/// A caller-supplied buffer did not match the computed plane geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Flat buffer length differs from the frame's total plane size.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// An owned frame: one buffer per plane plus format and resolution.
///
/// Planes are stored in canonical order (luma or packed whole, then U,
/// then V). A frame is exclusively owned by whichever stage currently
/// processes it; for streaming, allocate once per format/resolution and
/// refill with [`Frame::fill_from`] to avoid per-frame allocation.
///
/// # Example
/// ```rust
/// use rasterlab_core::prelude::{Frame, PixelFormat, Resolution};
///
/// let res = Resolution::new(4, 2).unwrap();
/// let flat = vec![0u8; 12]; // 8 luma + 2 U + 2 V
/// let frame = Frame::split(&flat, PixelFormat::Yuv420p, res).unwrap();
/// assert_eq!(frame.planes().len(), 3);
/// assert_eq!(frame.join(), flat);
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    format: PixelFormat,
    resolution: Resolution,
    planes: SmallVec<[Vec<u8>; 3]>,
}

impl Frame {
    /// Allocate a zero-filled frame of the given format and resolution.
    pub fn alloc(format: PixelFormat, resolution: Resolution) -> Self {
        let planes = plane_layout(format, resolution)
            .iter()
            .map(|layout| vec![0u8; layout.len()])
            .collect();
        Self {
            format,
            resolution,
            planes,
        }
    }

    /// Split a flat buffer into per-plane buffers.
    ///
    /// The flat buffer must hold exactly one frame; anything else is a
    /// [`LayoutError::SizeMismatch`]. For packed formats this is an
    /// identity copy into the single plane.
    pub fn split(
        flat: &[u8],
        format: PixelFormat,
        resolution: Resolution,
    ) -> Result<Self, LayoutError> {
        let mut frame = Self::alloc(format, resolution);
        frame.fill_from(flat)?;
        Ok(frame)
    }

    /// Refill this frame's planes from a flat buffer without reallocating.
    pub fn fill_from(&mut self, flat: &[u8]) -> Result<(), LayoutError> {
        let expected = frame_len(self.format, self.resolution);
        if flat.len() != expected {
            return Err(LayoutError::SizeMismatch {
                expected,
                actual: flat.len(),
            });
        }
        for (layout, plane) in plane_layout(self.format, self.resolution)
            .iter()
            .zip(self.planes.iter_mut())
        {
            plane.copy_from_slice(&flat[layout.offset..layout.offset + layout.len()]);
        }
        Ok(())
    }

    /// Concatenate planes back into a flat buffer in canonical order.
    ///
    /// Byte-exact inverse of [`Frame::split`]; this order is the on-disk
    /// contract for headerless raw streams.
    pub fn join(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.join_into(&mut out);
        out
    }

    /// Like [`Frame::join`], reusing a caller-provided buffer.
    pub fn join_into(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.len());
        for plane in &self.planes {
            out.extend_from_slice(plane);
        }
    }

    /// Pixel format of this frame.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Resolution of this frame.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Total frame size in bytes.
    pub fn len(&self) -> usize {
        self.planes.iter().map(|p| p.len()).sum()
    }

    /// Whether the frame holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Planes in canonical order.
    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// Borrow one plane's bytes.
    pub fn plane(&self, index: usize) -> Option<&[u8]> {
        self.planes.get(index).map(|p| p.as_slice())
    }

    /// Mutably borrow one plane's bytes.
    pub fn plane_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        self.planes.get_mut(index).map(|p| p.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::frame_len;

    fn res(w: u32, h: u32) -> Resolution {
        Resolution::new(w, h).unwrap()
    }

    #[test]
    fn split_join_round_trips_all_formats() {
        for fmt in PixelFormat::ALL {
            let r = res(8, 4);
            let flat: Vec<u8> = (0..frame_len(fmt, r)).map(|i| i as u8).collect();
            let frame = Frame::split(&flat, fmt, r).expect("split");
            assert_eq!(frame.join(), flat, "{fmt}");
        }
    }

    #[test]
    fn split_copies_planes_at_layout_offsets() {
        let r = res(4, 2);
        // 8 luma bytes, then 2 U, then 2 V.
        let flat = [1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3];
        let frame = Frame::split(&flat, PixelFormat::Yuv420p, r).unwrap();
        assert_eq!(frame.plane(0).unwrap(), &[1u8; 8]);
        assert_eq!(frame.plane(1).unwrap(), &[2u8; 2]);
        assert_eq!(frame.plane(2).unwrap(), &[3u8; 2]);
    }

    #[test]
    fn wrong_buffer_size_is_rejected() {
        let r = res(4, 2);
        let err = Frame::split(&[0u8; 11], PixelFormat::Yuv420p, r).unwrap_err();
        assert_eq!(
            err,
            LayoutError::SizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn fill_from_reuses_allocation() {
        let r = res(4, 2);
        let mut frame = Frame::alloc(PixelFormat::Gray8, r);
        let before = frame.plane(0).unwrap().as_ptr();
        frame.fill_from(&[7u8; 8]).unwrap();
        assert_eq!(frame.plane(0).unwrap(), &[7u8; 8]);
        assert_eq!(frame.plane(0).unwrap().as_ptr(), before);
    }

    #[test]
    fn packed_split_is_identity() {
        let r = res(2, 2);
        let flat: Vec<u8> = (0..12).collect();
        let frame = Frame::split(&flat, PixelFormat::Rgb24, r).unwrap();
        assert_eq!(frame.planes().len(), 1);
        assert_eq!(frame.plane(0).unwrap(), flat.as_slice());
    }
}
