/// Status records for the live progress view.
///
/// One record exists per directory path observed during a scan. A record
/// advances `Pending → Scanning → Complete | Error` and never regresses;
/// the aggregator is the sole writer for any given path, so the renderer
/// observes each path's messages in write order.
use crate::model::size::format_size;
use compact_str::{format_compact, CompactString};

/// Lifecycle state of one directory's scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Known to exist, not yet visited.
    Pending,
    /// Listing and probing in progress.
    Scanning,
    /// Subtree total computed.
    Complete,
    /// The directory listing failed; the subtree contributes nothing.
    Error,
}

impl ScanState {
    /// Position in the pending → scanning → terminal progression.
    /// `Complete` and `Error` share the terminal rank.
    pub(crate) fn rank(self) -> u8 {
        match self {
            ScanState::Pending => 0,
            ScanState::Scanning => 1,
            ScanState::Complete | ScanState::Error => 2,
        }
    }

    /// A terminal record is never overwritten.
    pub fn is_terminal(self) -> bool {
        self.rank() == 2
    }
}

/// The latest known state and human-readable message for one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusRecord {
    pub state: ScanState,
    pub message: CompactString,
}

impl StatusRecord {
    /// Record for a directory discovered but not yet visited.
    pub fn pending() -> Self {
        Self {
            state: ScanState::Pending,
            message: CompactString::const_new("Pending..."),
        }
    }

    /// Record written when a directory's scan begins.
    pub fn scanning() -> Self {
        Self {
            state: ScanState::Scanning,
            message: CompactString::const_new("Scanning..."),
        }
    }

    /// Progress update after a file probe completes: `done` of `total`
    /// probes have settled for this directory.
    pub fn scanning_files(done: usize, total: usize) -> Self {
        Self {
            state: ScanState::Scanning,
            message: format_compact!("Scanning... ({done}/{total} files)"),
        }
    }

    /// Terminal record carrying the formatted subtree total.
    pub fn complete(total_bytes: u64) -> Self {
        Self {
            state: ScanState::Complete,
            message: CompactString::from(format_size(total_bytes)),
        }
    }

    /// Terminal record for a directory whose listing failed.
    pub fn access_denied() -> Self {
        Self {
            state: ScanState::Error,
            message: CompactString::const_new("Access Denied"),
        }
    }
}
