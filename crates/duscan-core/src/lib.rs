/// duscan core — concurrent disk-usage scanning with live progress.
///
/// This crate contains all scan logic with zero terminal dependencies.
/// Frontends supply a [`render::ProgressView`] to receive live frames and
/// print the final [`scanner::ScanReport`] however they like.
///
/// # Modules
///
/// - [`model`] — status records and size formatting.
/// - [`store`] — the shared, lock-guarded progress store.
/// - [`scanner`] — size probing, recursive aggregation, scan orchestration.
/// - [`render`] — the background progress renderer and its view seam.
pub mod error;
pub mod model;
pub mod render;
pub mod scanner;
pub mod store;

pub use error::ScanError;
pub use scanner::{run_scan, ScanOptions, ScanReport};
