use rasterlab_core::prelude::{Frame, PixelFormat};

use crate::sanitize_resolution;

/// The eight full-intensity bar colors, left to right.
pub const PALETTE: [(&str, [u8; 3]); 8] = [
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("green", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("red", [255, 0, 0]),
    ("blue", [0, 0, 255]),
    ("black", [0, 0, 0]),
];

/// One palette entry with its BT.601 luma, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLuma {
    pub name: &'static str,
    pub rgb: [u8; 3],
    pub luma: u8,
}

/// The classic eight-color vertical bar chart.
///
/// Bars run white, yellow, cyan, green, magenta, red, blue, black at
/// full intensity. Renders as packed RGB24; the last bar absorbs any
/// remainder columns when the width is not a multiple of eight.
#[derive(Debug, Clone, Copy)]
pub struct ColorBar {
    width: u32,
    height: u32,
}

impl ColorBar {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render one RGB24 frame.
    pub fn render(&self) -> Frame {
        let res = sanitize_resolution(self.width, self.height);
        let width = res.width.get() as usize;
        let height = res.height.get() as usize;
        if width % PALETTE.len() != 0 {
            tracing::warn!(width, "width not a multiple of 8, last bar will be wider");
        }
        let bar_width = (width / PALETTE.len()).max(1);

        let mut frame = Frame::alloc(PixelFormat::Rgb24, res);
        if let Some(pixels) = frame.plane_mut(0) {
            for y in 0..height {
                for x in 0..width {
                    let bar = (x / bar_width).min(PALETTE.len() - 1);
                    let (_, rgb) = PALETTE[bar];
                    pixels[(y * width + x) * 3..][..3].copy_from_slice(&rgb);
                }
            }
        }
        frame
    }

    /// BT.601 luma of each bar, for checking a grayscale conversion of
    /// the chart against expected values.
    pub fn luma_report(&self) -> [BarLuma; 8] {
        PALETTE.map(|(name, rgb)| BarLuma {
            name,
            rgb,
            luma: bt601_luma(rgb),
        })
    }
}

/// BT.601 luma of an RGB triple, truncated to a byte.
fn bt601_luma([r, g, b]: [u8; 3]) -> u8 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bar_white_last_bar_black() {
        let frame = ColorBar::new(1280, 720).render();
        let pixels = frame.plane(0).unwrap();
        assert_eq!(&pixels[0..3], &[255, 255, 255]);
        // Column 1120 starts the eighth bar.
        assert_eq!(&pixels[1120 * 3..1120 * 3 + 3], &[0, 0, 0]);
    }

    #[test]
    fn bars_follow_palette_order() {
        let frame = ColorBar::new(8, 1).render();
        let pixels = frame.plane(0).unwrap();
        for (bar, (_, rgb)) in PALETTE.iter().enumerate() {
            assert_eq!(&pixels[bar * 3..bar * 3 + 3], rgb);
        }
    }

    #[test]
    fn remainder_columns_stay_black() {
        let frame = ColorBar::new(10, 1).render();
        let pixels = frame.plane(0).unwrap();
        assert_eq!(&pixels[9 * 3..9 * 3 + 3], &[0, 0, 0]);
    }

    #[test]
    fn luma_report_matches_bt601() {
        let report = ColorBar::new(8, 8).luma_report();
        let by_name = |name: &str| report.iter().find(|b| b.name == name).unwrap().luma;
        assert_eq!(by_name("black"), 0);
        assert_eq!(by_name("red"), 76);
        assert_eq!(by_name("green"), 149);
        assert_eq!(by_name("blue"), 29);
    }
}
