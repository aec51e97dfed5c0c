use rasterlab_core::prelude::{Frame, PixelFormat};

use crate::{ChannelRamp, Overflow, sanitize_bar_geometry};

/// Vertical bars ramping each RGB channel independently from a start
/// color to an end color, both endpoints inclusive.
///
/// # Example
/// ```rust
/// use rasterlab_pattern::prelude::{Overflow, RgbGradientBar};
///
/// let bar = RgbGradientBar::new(100, 2, 10, [255, 0, 0], [0, 0, 255]);
/// let frame = bar.render(Overflow::default());
/// assert_eq!(&frame.plane(0).unwrap()[0..3], &[255, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbGradientBar {
    width: u32,
    height: u32,
    bars: u32,
    start: [u8; 3],
    end: [u8; 3],
}

impl RgbGradientBar {
    pub fn new(width: u32, height: u32, bars: u32, start: [u8; 3], end: [u8; 3]) -> Self {
        Self {
            width,
            height,
            bars,
            start,
            end,
        }
    }

    /// The RGB color of each bar, left to right.
    pub fn steps(&self, overflow: Overflow) -> Vec<[u8; 3]> {
        let (_, bars) = sanitize_bar_geometry(self.width, self.height, self.bars);
        let ramps: [ChannelRamp; 3] = std::array::from_fn(|c| {
            ChannelRamp::new(self.start[c], self.end[c], bars, overflow)
        });
        (0..bars)
            .map(|t| std::array::from_fn(|c| ramps[c].at(t)))
            .collect()
    }

    /// Render one RGB24 frame.
    pub fn render(&self, overflow: Overflow) -> Frame {
        let (res, _) = sanitize_bar_geometry(self.width, self.height, self.bars);
        let width = res.width.get() as usize;
        let height = res.height.get() as usize;
        let steps = self.steps(overflow);
        if width % steps.len() != 0 {
            tracing::warn!(width, bars = steps.len(), "width not a multiple of bar count, last bar will be wider");
        }
        let bar_width = (width / steps.len()).max(1);

        let mut frame = Frame::alloc(PixelFormat::Rgb24, res);
        if let Some(pixels) = frame.plane_mut(0) {
            for y in 0..height {
                for x in 0..width {
                    let bar = (x / bar_width).min(steps.len() - 1);
                    pixels[(y * width + x) * 3..][..3].copy_from_slice(&steps[bar]);
                }
            }
        }
        frame
    }
}

/// Vertical bars ramping Y, U, and V independently, rendered as
/// YUV420P with the chroma bar boundaries aligned to the luma ones.
#[derive(Debug, Clone, Copy)]
pub struct YuvGradientBar {
    width: u32,
    height: u32,
    bars: u32,
    start: [u8; 3],
    end: [u8; 3],
}

impl YuvGradientBar {
    /// `start` and `end` are `[y, u, v]` triples.
    pub fn new(width: u32, height: u32, bars: u32, start: [u8; 3], end: [u8; 3]) -> Self {
        Self {
            width,
            height,
            bars,
            start,
            end,
        }
    }

    /// The YUV triple of each bar, left to right.
    pub fn steps(&self, overflow: Overflow) -> Vec<[u8; 3]> {
        let (_, bars) = sanitize_bar_geometry(self.width, self.height, self.bars);
        let ramps: [ChannelRamp; 3] = std::array::from_fn(|c| {
            ChannelRamp::new(self.start[c], self.end[c], bars, overflow)
        });
        (0..bars)
            .map(|t| std::array::from_fn(|c| ramps[c].at(t)))
            .collect()
    }

    /// Render one YUV420P frame.
    pub fn render(&self, overflow: Overflow) -> Frame {
        let (res, _) = sanitize_bar_geometry(self.width, self.height, self.bars);
        let width = res.width.get() as usize;
        let height = res.height.get() as usize;
        let steps = self.steps(overflow);
        if width % steps.len() != 0 {
            tracing::warn!(width, bars = steps.len(), "width not a multiple of bar count, last bar will be wider");
        }
        let bar_width = (width / steps.len()).max(1);
        let (h_sub, v_sub) = PixelFormat::Yuv420p.chroma_subsampling();
        // Chroma bar width in chroma samples; floors at one so narrow
        // bars still advance.
        let uv_bar_width = (bar_width / h_sub as usize).max(1);
        let chroma_w = width / h_sub as usize;
        let chroma_h = height / v_sub as usize;

        let mut frame = Frame::alloc(PixelFormat::Yuv420p, res);
        if let Some(luma) = frame.plane_mut(0) {
            for y in 0..height {
                for x in 0..width {
                    let bar = (x / bar_width).min(steps.len() - 1);
                    luma[y * width + x] = steps[bar][0];
                }
            }
        }
        for channel in 1..=2 {
            if let Some(chroma) = frame.plane_mut(channel) {
                for y in 0..chroma_h {
                    for x in 0..chroma_w {
                        let bar = (x / uv_bar_width).min(steps.len() - 1);
                        chroma[y * chroma_w + x] = steps[bar][channel];
                    }
                }
            }
        }
        frame
    }
}
