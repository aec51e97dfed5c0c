use std::num::NonZeroU32;

use rasterlab_core::prelude::{Frame, PixelFormat, Resolution};

const SIDE: usize = 256;

const CUBE_RESOLUTION: Resolution = Resolution {
    width: NonZeroU32::new(SIDE as u32).unwrap(),
    height: NonZeroU32::new(SIDE as u32).unwrap(),
};

/// Axis assignment for the exhaustive 24-bit color cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CubeAxes {
    /// x carries R, y carries G, the frame index carries B.
    Rgb,
    /// x carries U, y carries V, the frame index carries Y.
    Yuv,
}

/// Every 24-bit color exactly once: 256 frames of 256x256 pixels.
///
/// Frames are produced lazily so the roughly 16M-pixel sequence never
/// has to exist in memory at once.
///
/// # Example
/// ```rust
/// use rasterlab_pattern::prelude::ColorCube;
///
/// let mut cube = ColorCube::rgb();
/// assert_eq!(cube.len(), 256);
/// let frame = cube.next().unwrap();
/// assert_eq!(frame.resolution().to_string(), "256x256");
/// ```
#[derive(Debug, Clone)]
pub struct ColorCube {
    axes: CubeAxes,
    next: usize,
}

impl ColorCube {
    /// RGB24 cube, file stem `allcolor_xr_yg_zb`.
    pub fn rgb() -> Self {
        Self {
            axes: CubeAxes::Rgb,
            next: 0,
        }
    }

    /// YUV444P cube, file stem `allcolor_xu_yv_zy`.
    pub fn yuv444() -> Self {
        Self {
            axes: CubeAxes::Yuv,
            next: 0,
        }
    }

    /// Pixel format of the frames this cube yields.
    pub fn format(&self) -> PixelFormat {
        match self.axes {
            CubeAxes::Rgb => PixelFormat::Rgb24,
            CubeAxes::Yuv => PixelFormat::Yuv444p,
        }
    }

    /// Resolution of every frame: 256x256.
    pub fn resolution(&self) -> Resolution {
        CUBE_RESOLUTION
    }

    /// Conventional file stem naming the axis assignment.
    pub fn file_stem(&self) -> &'static str {
        match self.axes {
            CubeAxes::Rgb => "allcolor_xr_yg_zb",
            CubeAxes::Yuv => "allcolor_xu_yv_zy",
        }
    }

    fn render(&self, z: usize) -> Frame {
        let mut frame = Frame::alloc(self.format(), CUBE_RESOLUTION);
        match self.axes {
            CubeAxes::Rgb => {
                if let Some(pixels) = frame.plane_mut(0) {
                    for y in 0..SIDE {
                        for x in 0..SIDE {
                            pixels[(y * SIDE + x) * 3..][..3]
                                .copy_from_slice(&[x as u8, y as u8, z as u8]);
                        }
                    }
                }
            }
            CubeAxes::Yuv => {
                if let Some(luma) = frame.plane_mut(0) {
                    luma.fill(z as u8);
                }
                if let Some(u) = frame.plane_mut(1) {
                    for y in 0..SIDE {
                        for x in 0..SIDE {
                            u[y * SIDE + x] = x as u8;
                        }
                    }
                }
                if let Some(v) = frame.plane_mut(2) {
                    for y in 0..SIDE {
                        v[y * SIDE..(y + 1) * SIDE].fill(y as u8);
                    }
                }
            }
        }
        frame
    }
}

impl Iterator for ColorCube {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= SIDE {
            return None;
        }
        let frame = self.render(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SIDE - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColorCube {}
