use std::fs;
use std::path::{Path, PathBuf};

use rasterlab_core::prelude::{Frame, raw_file_name};
use rasterlab_pattern::prelude::{
    BmpError, ColorBar, ColorCube, ColorStripe, GrayRamp, Overflow, RgbGradientBar,
    YuvGradientBar, encode_bmp,
};

use crate::stream::RawFrameWriter;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("writing pattern file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Bmp(#[from] BmpError),
}

/// Write one frame as a raw file named by the usual convention.
pub fn write_frame_file(
    dir: impl AsRef<Path>,
    stem: &str,
    frame: &Frame,
) -> Result<PathBuf, GenerateError> {
    let path = dir
        .as_ref()
        .join(raw_file_name(stem, frame.format(), frame.resolution()));
    fs::write(&path, frame.join())?;
    Ok(path)
}

/// Write one RGB frame as `<stem>_<width>x<height>_<tag>.bmp`.
pub fn write_bmp_file(
    dir: impl AsRef<Path>,
    stem: &str,
    frame: &Frame,
) -> Result<PathBuf, GenerateError> {
    let path = dir.as_ref().join(format!(
        "{stem}_{}_{}.bmp",
        frame.resolution(),
        frame.format().tag()
    ));
    fs::write(&path, encode_bmp(frame)?)?;
    Ok(path)
}

/// Stream a color cube into a single raw file, one frame per cube slice.
pub fn write_cube_file(dir: impl AsRef<Path>, cube: ColorCube) -> Result<PathBuf, GenerateError> {
    let path = dir
        .as_ref()
        .join(raw_file_name(cube.file_stem(), cube.format(), cube.resolution()));
    let mut writer = RawFrameWriter::create(&path)?;
    for frame in cube {
        writer.write_frame(&frame)?;
    }
    writer.finish()?;
    Ok(path)
}

/// Outcome of a batch run: what landed on disk and how many writes
/// failed along the way.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

impl BatchReport {
    /// Fold in one artifact's result; a failure is logged and counted
    /// rather than aborting the rest of the batch.
    pub fn record(&mut self, result: Result<PathBuf, GenerateError>) {
        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "pattern written");
                self.written.push(path);
            }
            Err(err) => {
                tracing::error!(error = %err, "pattern generation failed");
                self.failed += 1;
            }
        }
    }
}

/// Write the standard artifact set into `dir`.
///
/// The sized patterns are rendered at `width` x `height`; the two color
/// cubes are always 256x256x256.
pub fn generate_all(dir: impl AsRef<Path>, width: u32, height: u32) -> BatchReport {
    let dir = dir.as_ref();
    let overflow = Overflow::default();
    let mut report = BatchReport::default();

    let gray = GrayRamp::new(width, height, 10, 16, 235).render(overflow);
    report.record(write_frame_file(dir, "graybar", &gray));

    let colorbar = ColorBar::new(width, height).render();
    report.record(write_frame_file(dir, "colorbar", &colorbar));
    report.record(write_bmp_file(dir, "colorbar", &colorbar));

    let rgb_gradient =
        RgbGradientBar::new(width, height, 10, [255, 0, 0], [0, 0, 255]).render(overflow);
    report.record(write_frame_file(dir, "rgbgradientbar", &rgb_gradient));

    let yuv_gradient =
        YuvGradientBar::new(width, height, 10, [0, 0, 0], [128, 128, 128]).render(overflow);
    report.record(write_frame_file(dir, "yuvgradientbar", &yuv_gradient));

    let stripe = ColorStripe::new(width, height, [255, 0, 0]).render();
    report.record(write_frame_file(dir, "rgbstripe", &stripe));

    report.record(write_cube_file(dir, ColorCube::rgb()));
    report.record(write_cube_file(dir, ColorCube::yuv444()));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::prelude::{PixelFormat, Resolution, frame_len};

    #[test]
    fn frame_file_uses_naming_convention() {
        let dir = tempfile::tempdir().unwrap();
        let frame = ColorBar::new(16, 8).render();
        let path = write_frame_file(dir.path(), "colorbar", &frame).unwrap();
        assert!(path.ends_with("colorbar_16x8_rgb24.rgb"));
        assert_eq!(fs::read(&path).unwrap().len(), 16 * 8 * 3);
    }

    #[test]
    fn bmp_file_has_header_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let frame = ColorBar::new(16, 8).render();
        let path = write_bmp_file(dir.path(), "colorbar", &frame).unwrap();
        assert!(path.ends_with("colorbar_16x8_rgb24.bmp"));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(bytes.len(), 54 + 16 * 8 * 3);
    }

    #[test]
    fn bmp_of_planar_frame_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let res = Resolution::new(4, 2).unwrap();
        let frame = Frame::alloc(PixelFormat::Yuv420p, res);
        let err = write_bmp_file(dir.path(), "bad", &frame).unwrap_err();
        assert!(matches!(err, GenerateError::Bmp(_)));
        assert!(!dir.path().join("bad_4x2_yuv420p.bmp").exists());
    }

    #[test]
    fn report_counts_failures_and_keeps_going() {
        let mut report = BatchReport::default();
        report.record(Ok(PathBuf::from("a.rgb")));
        report.record(Err(GenerateError::Bmp(BmpError::UnsupportedFormat(
            PixelFormat::Gray8,
        ))));
        report.record(Ok(PathBuf::from("b.rgb")));
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn cube_file_holds_256_frames() {
        // A small assertion on the byte count; rendering the cube is
        // the expensive part, so keep it to one format.
        let dir = tempfile::tempdir().unwrap();
        let path = write_cube_file(dir.path(), ColorCube::rgb()).unwrap();
        assert!(path.ends_with("allcolor_xr_yg_zb_256x256_rgb24.rgb"));
        let res = Resolution::new(256, 256).unwrap();
        let expected = 256 * frame_len(PixelFormat::Rgb24, res) as u64;
        assert_eq!(fs::metadata(&path).unwrap().len(), expected);
    }
}
