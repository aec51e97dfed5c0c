#![doc = include_str!("../README.md")]

use std::num::NonZeroU32;

use rasterlab_core::prelude::Resolution;

pub mod bmp;
pub mod colorbar;
pub mod cube;
pub mod gradient;
pub mod gray;
pub mod stripe;

/// Commonly used types, glob-importable.
pub mod prelude {
    pub use crate::Overflow;
    pub use crate::bmp::{BmpError, encode_bmp};
    pub use crate::colorbar::{BarLuma, ColorBar};
    pub use crate::cube::ColorCube;
    pub use crate::gradient::{RgbGradientBar, YuvGradientBar};
    pub use crate::gray::GrayRamp;
    pub use crate::stripe::ColorStripe;
}

pub(crate) const DEFAULT_WIDTH: NonZeroU32 = NonZeroU32::new(640).unwrap();
pub(crate) const DEFAULT_HEIGHT: NonZeroU32 = NonZeroU32::new(480).unwrap();
pub(crate) const DEFAULT_BARS: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// How a ramp handles channel values stepping outside `0..=255`.
///
/// Only reachable with endpoint/step combinations whose truncated steps
/// leave the byte range; well-formed ramps produce identical bytes
/// under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Wrap modulo 256.
    #[default]
    Wrapping,
    /// Saturate at 0 and 255.
    Clamped,
}

impl Overflow {
    pub(crate) fn apply(self, value: i32) -> u8 {
        match self {
            Overflow::Wrapping => value as u8,
            Overflow::Clamped => value.clamp(0, 255) as u8,
        }
    }
}

/// One channel's linear ramp across a fixed number of bars.
///
/// Step `t` evaluates to `start + trunc(t * (end - start) / (bars - 1))`,
/// truncation toward zero. The division is by `bars - 1` so both
/// endpoints are produced exactly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChannelRamp {
    start: i32,
    inc: f32,
    overflow: Overflow,
}

impl ChannelRamp {
    pub(crate) fn new(start: u8, end: u8, bars: u32, overflow: Overflow) -> Self {
        let span = end as i32 - start as i32;
        Self {
            start: start as i32,
            inc: span as f32 / (bars.max(2) - 1) as f32,
            overflow,
        }
    }

    pub(crate) fn at(&self, t: u32) -> u8 {
        self.overflow.apply(self.start + (t as f32 * self.inc) as i32)
    }
}

/// Substitute the default resolution when either dimension is zero.
///
/// The whole parameter set is reset, not just the offending field, so a
/// downgraded render is always the stock 640x480 image.
pub(crate) fn sanitize_resolution(width: u32, height: u32) -> Resolution {
    match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(width), Some(height)) => Resolution { width, height },
        _ => {
            tracing::warn!(width, height, "invalid dimensions, using 640x480");
            Resolution {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            }
        }
    }
}

/// Like [`sanitize_resolution`], for generators that also take a bar
/// count: any zero parameter resets all three to the defaults.
pub(crate) fn sanitize_bar_geometry(width: u32, height: u32, bars: u32) -> (Resolution, u32) {
    match (NonZeroU32::new(width), NonZeroU32::new(height), NonZeroU32::new(bars)) {
        (Some(width), Some(height), Some(bars)) => (Resolution { width, height }, bars.get()),
        _ => {
            tracing::warn!(width, height, bars, "invalid parameters, using 640x480 with 10 bars");
            (
                Resolution {
                    width: DEFAULT_WIDTH,
                    height: DEFAULT_HEIGHT,
                },
                DEFAULT_BARS.get(),
            )
        }
    }
}
