//! duscan — concurrent disk-usage scanner with live terminal progress.
//!
//! Thin binary entry point. All logic lives in the `duscan-core` and
//! `duscan-cli` crates.

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the redrawn
    // progress view on stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    duscan_cli::run()
}
