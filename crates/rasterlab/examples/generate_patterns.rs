//! Writes the standard test-pattern artifact set into the current
//! directory at 1280x720.
//!
//! ```sh
//! cargo run --example generate_patterns
//! ```

use rasterlab::prelude::generate_all;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let report = generate_all(".", 1280, 720);
    println!(
        "wrote {} files, {} failures",
        report.written.len(),
        report.failed
    );
}
