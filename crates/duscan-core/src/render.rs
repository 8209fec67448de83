/// Live progress rendering — a background loop that snapshots the store at
/// a fixed interval and hands frames to an abstract [`ProgressView`].
///
/// The renderer never touches the filesystem and never holds the store lock
/// while a frame is being drawn: each tick copies the map under the lock,
/// then renders from the copy.
///
/// # Shutdown
///
/// The loop waits on a stop channel with the render interval as the
/// timeout, so the sleep and the stop check are the same operation. A stop
/// message (or a disconnected sender) ends the loop immediately and nothing
/// is rendered afterwards.
use crate::model::StatusRecord;
use crate::store::ProgressStore;
use compact_str::CompactString;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default interval between progress frames.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(500);

/// One immediate subdirectory of the scan root, as shown in the listing.
#[derive(Clone, Debug)]
pub struct Subdir {
    pub name: CompactString,
    pub path: PathBuf,
}

/// One line of a progress frame: a subdirectory and its latest record.
/// `record` is `None` when the path has not been observed yet, which the
/// view renders the same as an explicit pending record.
pub struct StatusRow<'a> {
    pub name: &'a str,
    pub record: Option<StatusRecord>,
}

/// Sink for progress frames. Implemented by frontends (a terminal view in
/// the CLI crate, recording fakes in tests).
pub trait ProgressView: Send {
    /// Render one frame. `rows` lists the root's immediate subdirectories
    /// in case-insensitive name order.
    fn render(&mut self, root: &Path, rows: &[StatusRow<'_>]);
}

/// Periodic renderer. Owns its copy of the subdirectory listing (captured
/// at scan start) and reads the shared store; it never writes to it.
pub struct ProgressRenderer {
    store: Arc<ProgressStore>,
    root: PathBuf,
    subdirs: Vec<Subdir>,
    interval: Duration,
}

impl ProgressRenderer {
    pub fn new(
        store: Arc<ProgressStore>,
        root: PathBuf,
        mut subdirs: Vec<Subdir>,
        interval: Duration,
    ) -> Self {
        subdirs.sort_by_key(|s| s.name.to_lowercase());
        Self {
            store,
            root,
            subdirs,
            interval,
        }
    }

    /// Run the render loop until the stop channel signals or disconnects.
    ///
    /// Draws an initial frame immediately, then one per interval. Blocking
    /// on `recv_timeout` means a stop message is observed mid-sleep rather
    /// than at the next tick.
    pub fn run<V: ProgressView>(self, mut view: V, stop_rx: Receiver<()>) {
        loop {
            self.draw(&mut view);
            match stop_rx.recv_timeout(self.interval) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
    }

    fn draw<V: ProgressView>(&self, view: &mut V) {
        let snapshot = self.store.snapshot();
        let rows: Vec<StatusRow<'_>> = self
            .subdirs
            .iter()
            .map(|s| StatusRow {
                name: s.name.as_str(),
                record: snapshot.get(&s.path).cloned(),
            })
            .collect();
        view.render(&self.root, &rows);
    }
}
