use rasterlab_core::prelude::{Frame, PixelFormat};

use crate::sanitize_resolution;

/// Single-pixel vertical stripes: odd columns in the chosen color, even
/// columns white. The one-pixel pitch makes chroma bleed from a lossy
/// conversion immediately visible.
#[derive(Debug, Clone, Copy)]
pub struct ColorStripe {
    width: u32,
    height: u32,
    color: [u8; 3],
}

const WHITE: [u8; 3] = [255, 255, 255];

impl ColorStripe {
    pub fn new(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Render one RGB24 frame.
    pub fn render(&self) -> Frame {
        let res = sanitize_resolution(self.width, self.height);
        let width = res.width.get() as usize;
        let height = res.height.get() as usize;

        let mut frame = Frame::alloc(PixelFormat::Rgb24, res);
        if let Some(pixels) = frame.plane_mut(0) {
            for y in 0..height {
                for x in 0..width {
                    let rgb = if x % 2 != 0 { &self.color } else { &WHITE };
                    pixels[(y * width + x) * 3..][..3].copy_from_slice(rgb);
                }
            }
        }
        frame
    }
}
