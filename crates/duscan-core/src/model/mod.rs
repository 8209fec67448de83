/// Data model for scan progress.
///
/// Re-exports the status-record types and size formatting helpers.
pub mod size;
pub mod status;

pub use status::{ScanState, StatusRecord};
