use rasterlab_core::prelude::{Frame, PixelFormat, Resolution};

use crate::{ChannelRamp, Overflow, sanitize_bar_geometry};

/// Neutral chroma for a gray image in YUV.
const CHROMA_NEUTRAL: u8 = 128;

/// Vertical gray bars stepping linearly from `y_min` to `y_max`.
///
/// Renders as YUV420P with both chroma planes held at 128. The last bar
/// absorbs any columns left over when the width does not divide evenly
/// by the bar count.
///
/// # Example
/// ```rust
/// use rasterlab_pattern::prelude::{GrayRamp, Overflow};
///
/// let frame = GrayRamp::new(1280, 720, 10, 16, 235).render(Overflow::default());
/// assert_eq!(frame.plane(0).unwrap()[0], 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GrayRamp {
    width: u32,
    height: u32,
    bars: u32,
    y_min: u8,
    y_max: u8,
}

impl GrayRamp {
    /// Describe a ramp. Zero width, height, or bar count downgrades to
    /// the defaults (640x480, 10 bars) with a warning.
    pub fn new(width: u32, height: u32, bars: u32, y_min: u8, y_max: u8) -> Self {
        Self {
            width,
            height,
            bars,
            y_min,
            y_max,
        }
    }

    /// Effective resolution and bar count after parameter sanitizing.
    pub fn geometry(&self) -> (Resolution, u32) {
        sanitize_bar_geometry(self.width, self.height, self.bars)
    }

    /// The luma level of each bar, left to right.
    pub fn levels(&self, overflow: Overflow) -> Vec<u8> {
        let (_, bars) = self.geometry();
        let ramp = ChannelRamp::new(self.y_min, self.y_max, bars, overflow);
        (0..bars).map(|t| ramp.at(t)).collect()
    }

    /// Render one YUV420P frame.
    pub fn render(&self, overflow: Overflow) -> Frame {
        let (res, bars) = self.geometry();
        let width = res.width.get() as usize;
        let height = res.height.get() as usize;
        if width % bars as usize != 0 {
            tracing::warn!(width, bars, "width not a multiple of bar count, last bar will be wider");
        }
        let bar_width = (width / bars as usize).max(1);
        let levels = self.levels(overflow);

        let mut frame = Frame::alloc(PixelFormat::Yuv420p, res);
        if let Some(luma) = frame.plane_mut(0) {
            for y in 0..height {
                for x in 0..width {
                    let bar = (x / bar_width).min(bars as usize - 1);
                    luma[y * width + x] = levels[bar];
                }
            }
        }
        for index in 1..=2 {
            if let Some(chroma) = frame.plane_mut(index) {
                chroma.fill(CHROMA_NEUTRAL);
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_range_endpoints() {
        let ramp = GrayRamp::new(1280, 720, 10, 16, 235);
        let frame = ramp.render(Overflow::Wrapping);
        let luma = frame.plane(0).unwrap();
        assert_eq!(luma[0], 16);
        // Last column falls in the final bar.
        assert_eq!(luma[1279], 235);
    }

    #[test]
    fn bars_are_constant_within_and_step_between() {
        let ramp = GrayRamp::new(100, 4, 10, 0, 90);
        let frame = ramp.render(Overflow::Wrapping);
        let luma = frame.plane(0).unwrap();
        // bar width 10; inc = 10.0 exactly.
        assert_eq!(luma[0], 0);
        assert_eq!(luma[9], 0);
        assert_eq!(luma[10], 10);
        assert_eq!(luma[99], 90);
        // Rows are identical.
        assert_eq!(&luma[0..100], &luma[300..400]);
    }

    #[test]
    fn remainder_columns_extend_last_bar() {
        // width 13, 10 bars: bar width 1, columns 10..12 stay at the
        // last level instead of indexing past it.
        let frame = GrayRamp::new(13, 2, 10, 0, 90).render(Overflow::Wrapping);
        let luma = frame.plane(0).unwrap();
        assert_eq!(luma[9], 90);
        assert_eq!(luma[12], 90);
    }

    #[test]
    fn chroma_is_neutral() {
        let frame = GrayRamp::new(16, 16, 4, 0, 255).render(Overflow::Wrapping);
        assert!(frame.plane(1).unwrap().iter().all(|&b| b == 128));
        assert!(frame.plane(2).unwrap().iter().all(|&b| b == 128));
    }

    #[test]
    fn zero_parameters_downgrade() {
        let (res, bars) = GrayRamp::new(0, 0, 0, 16, 235).geometry();
        assert_eq!((res.width.get(), res.height.get(), bars), (640, 480, 10));
    }

    #[test]
    fn one_zero_parameter_downgrades_the_whole_set() {
        // A single bad field resets everything, not just itself.
        let (res, bars) = GrayRamp::new(0, 720, 10, 16, 235).geometry();
        assert_eq!((res.width.get(), res.height.get(), bars), (640, 480, 10));
        let (res, bars) = GrayRamp::new(1280, 720, 0, 16, 235).geometry();
        assert_eq!((res.width.get(), res.height.get(), bars), (640, 480, 10));
    }

    #[test]
    fn levels_match_rendered_bars() {
        let ramp = GrayRamp::new(100, 2, 10, 16, 235);
        let levels = ramp.levels(Overflow::Wrapping);
        let frame = ramp.render(Overflow::Wrapping);
        let luma = frame.plane(0).unwrap();
        for (bar, &level) in levels.iter().enumerate() {
            assert_eq!(luma[bar * 10], level);
        }
    }
}
