use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rasterlab_core::prelude::{Frame, LayoutError, PixelFormat, Resolution, frame_len};

use crate::convert::{ConvertError, Converter, FilterKind};

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("raw stream I/O: {0}")]
    Io(#[from] io::Error),
    #[error("raw stream layout: {0}")]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Reads fixed-size frames from a headerless raw file.
///
/// The frame size is fully determined by format and resolution; the
/// file carries no metadata, so a mismatched format silently reads
/// garbage. A trailing fragment shorter than one frame is discarded.
pub struct RawFrameReader {
    reader: BufReader<File>,
    buf: Vec<u8>,
    frame: Frame,
}

impl RawFrameReader {
    pub fn open(
        path: impl AsRef<Path>,
        format: PixelFormat,
        resolution: Resolution,
    ) -> io::Result<Self> {
        Ok(Self {
            reader: BufReader::new(File::open(path)?),
            buf: vec![0u8; frame_len(format, resolution)],
            frame: Frame::alloc(format, resolution),
        })
    }

    /// Read the next frame, or `None` at end of stream.
    ///
    /// The returned reference stays valid until the next call; the
    /// frame buffer is reused across reads.
    pub fn next_frame(&mut self) -> Result<Option<&Frame>, StreamError> {
        let mut filled = 0;
        while filled < self.buf.len() {
            let n = self.reader.read(&mut self.buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            return Ok(None);
        }
        if filled < self.buf.len() {
            tracing::debug!(bytes = filled, "discarding trailing partial frame");
            return Ok(None);
        }
        self.frame.fill_from(&self.buf)?;
        Ok(Some(&self.frame))
    }
}

/// Writes frames to a headerless raw file in canonical plane order.
pub struct RawFrameWriter {
    writer: BufWriter<File>,
    scratch: Vec<u8>,
}

impl RawFrameWriter {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            scratch: Vec::new(),
        })
    }

    /// Append one frame, planes joined back to flat bytes.
    pub fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        frame.join_into(&mut self.scratch);
        self.writer.write_all(&self.scratch)
    }

    /// Append an already-flat frame buffer verbatim.
    pub fn write_flat(&mut self, flat: &[u8]) -> io::Result<()> {
        self.writer.write_all(flat)
    }

    /// Flush buffered bytes to disk.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Pipe a raw file through a converter, frame by frame.
///
/// Returns the number of frames written. Frames are processed one at a
/// time, so arbitrarily long streams run in constant memory.
pub fn scale_raw_stream(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    src_format: PixelFormat,
    src_resolution: Resolution,
    dst_format: PixelFormat,
    dst_resolution: Resolution,
    filter: FilterKind,
    converter: &dyn Converter,
) -> Result<u64, StreamError> {
    let mut reader = RawFrameReader::open(&input, src_format, src_resolution)?;
    let mut writer = RawFrameWriter::create(&output)?;
    let mut frames = 0u64;
    while let Some(frame) = reader.next_frame()? {
        let converted = converter.convert(frame, dst_format, dst_resolution, filter)?;
        writer.write_frame(&converted)?;
        frames += 1;
    }
    writer.finish()?;
    tracing::info!(
        frames,
        src = %src_resolution,
        dst = %dst_resolution,
        "raw stream converted"
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::PassthroughConverter;

    fn res(w: u32, h: u32) -> Resolution {
        Resolution::new(w, h).unwrap()
    }

    #[test]
    fn reads_exactly_the_whole_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.yuv");
        // Two full 4x2 yuv420p frames (12 bytes each) plus 5 trailing bytes.
        let mut bytes = Vec::new();
        bytes.extend(std::iter::repeat_n(1u8, 12));
        bytes.extend(std::iter::repeat_n(2u8, 12));
        bytes.extend(std::iter::repeat_n(3u8, 5));
        std::fs::write(&path, &bytes).unwrap();

        let mut reader = RawFrameReader::open(&path, PixelFormat::Yuv420p, res(4, 2)).unwrap();
        assert_eq!(reader.next_frame().unwrap().unwrap().join(), vec![1u8; 12]);
        assert_eq!(reader.next_frame().unwrap().unwrap().join(), vec![2u8; 12]);
        assert!(reader.next_frame().unwrap().is_none());
        // EOF is sticky.
        assert!(reader.next_frame().unwrap().is_none());
    }

    #[test]
    fn empty_file_yields_no_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yuv");
        std::fs::write(&path, b"").unwrap();
        let mut reader = RawFrameReader::open(&path, PixelFormat::Gray8, res(2, 2)).unwrap();
        assert!(reader.next_frame().unwrap().is_none());
    }

    #[test]
    fn writer_round_trips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rgb");
        let frame = Frame::split(&[7u8; 24], PixelFormat::Rgb24, res(4, 2)).unwrap();
        let mut writer = RawFrameWriter::create(&path).unwrap();
        writer.write_frame(&frame).unwrap();
        writer.write_flat(&[8u8; 24]).unwrap();
        writer.finish().unwrap();

        let mut reader = RawFrameReader::open(&path, PixelFormat::Rgb24, res(4, 2)).unwrap();
        assert_eq!(reader.next_frame().unwrap().unwrap().join(), vec![7u8; 24]);
        assert_eq!(reader.next_frame().unwrap().unwrap().join(), vec![8u8; 24]);
        assert!(reader.next_frame().unwrap().is_none());
    }

    #[test]
    fn scale_stream_counts_converted_frames() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.rgb");
        let output = dir.path().join("out.rgb");
        std::fs::write(&input, vec![5u8; 24 * 3]).unwrap();

        let frames = scale_raw_stream(
            &input,
            &output,
            PixelFormat::Rgb24,
            res(4, 2),
            PixelFormat::Rgb24,
            res(4, 2),
            FilterKind::default(),
            &PassthroughConverter,
        )
        .unwrap();
        assert_eq!(frames, 3);
        assert_eq!(std::fs::read(&output).unwrap(), vec![5u8; 24 * 3]);
    }

    #[test]
    fn conversion_failure_aborts_the_stream() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.rgb");
        let output = dir.path().join("out.yuv");
        std::fs::write(&input, vec![5u8; 24]).unwrap();

        let err = scale_raw_stream(
            &input,
            &output,
            PixelFormat::Rgb24,
            res(4, 2),
            PixelFormat::Yuv420p,
            res(4, 2),
            FilterKind::default(),
            &PassthroughConverter,
        )
        .unwrap_err();
        assert!(matches!(err, StreamError::Convert(_)));
    }
}
