//! Scales a raw YUV420P clip up to 1280x720 RGB24 through the FFmpeg
//! backend.
//!
//! ```sh
//! cargo run --features converter-ffmpeg --example scale_raw
//! ```
//!
//! Expects `sintel_480x272_yuv420p.yuv` in the current directory.

#[cfg(feature = "converter-ffmpeg")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use rasterlab::prelude::*;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let src_res = Resolution::new(480, 272).ok_or("bad source resolution")?;
    let dst_res = Resolution::new(1280, 720).ok_or("bad target resolution")?;
    let frames = scale_raw_stream(
        "sintel_480x272_yuv420p.yuv",
        "sintel_1280x720_rgb24.rgb",
        PixelFormat::Yuv420p,
        src_res,
        PixelFormat::Rgb24,
        dst_res,
        FilterKind::Bicubic,
        &FfmpegConverter,
    )?;
    println!("converted {frames} frames");
    Ok(())
}

#[cfg(not(feature = "converter-ffmpeg"))]
fn main() {
    eprintln!("rebuild with --features converter-ffmpeg to run this example");
}
