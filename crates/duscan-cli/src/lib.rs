/// duscan CLI — terminal frontend for the core scanner.
///
/// This crate owns everything terminal-shaped: argument parsing, the live
/// ANSI progress view, and the final report printer. Scan logic lives in
/// `duscan-core`.
pub mod args;
pub mod view;

use anyhow::Result;
use args::Args;
use clap::Parser;
use duscan_core::scanner::probe::FsProbe;
use duscan_core::{run_scan, ScanError, ScanOptions};
use std::time::Duration;
use view::TerminalView;

/// Parse arguments, run the scan, print the final report.
///
/// Filesystem errors are absorbed into the report rather than turned into a
/// non-zero exit: even an inaccessible root prints a message and returns
/// `Ok`.
pub fn run() -> Result<()> {
    let args = Args::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    let root = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let options = ScanOptions {
        render_interval: Duration::from_millis(args.interval_ms.max(1)),
    };

    match run_scan(&root, FsProbe, TerminalView::stdout(), options) {
        Ok(report) => {
            view::print_final_report(&report);
            Ok(())
        }
        Err(ScanError::RootInaccessible { path, source }) => {
            tracing::warn!("cannot access {}: {source}", path.display());
            view::print_root_denied(&path);
            Ok(())
        }
    }
}
