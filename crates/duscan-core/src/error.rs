/// Error types for the scan engine.
///
/// Almost every filesystem failure is absorbed into status records rather
/// than surfaced as an error — the one exception is a root that cannot be
/// listed at all, which makes the whole scan meaningless.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root itself could not be listed. No partial scan is
    /// attempted; the caller reports an access-denied condition instead.
    #[error("cannot access scan root {}: {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
