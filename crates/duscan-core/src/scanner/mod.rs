/// Scanner module — orchestrates a full scan.
///
/// [`run_scan`] wires the pieces together: it enumerates the root's
/// immediate subdirectories, seeds the progress store with pending records,
/// runs the renderer on a named background thread, drives the recursive
/// aggregation to completion, and returns the final [`ScanReport`].
///
/// The renderer is the only background thread the orchestrator owns; file
/// probe pools live and die inside individual [`aggregate`] calls.
pub mod aggregate;
pub mod probe;

use crate::error::ScanError;
use crate::model::{ScanState, StatusRecord};
use crate::render::{ProgressRenderer, ProgressView, Subdir, RENDER_INTERVAL};
use crate::store::ProgressStore;
use aggregate::DirectoryAggregator;
use compact_str::CompactString;
use crossbeam_channel::RecvTimeoutError;
use probe::{EntryKind, SizeProbe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long the orchestrator waits for the renderer to acknowledge the stop
/// signal before abandoning the thread. The renderer is read-only, so an
/// abandoned one is harmless at process exit.
const RENDERER_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Tunables for a scan run.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// Interval between progress frames.
    pub render_interval: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            render_interval: RENDER_INTERVAL,
        }
    }
}

/// One immediate subdirectory of the root in the final report, carrying the
/// terminal status its scan ended with.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub name: CompactString,
    pub state: ScanState,
    pub message: CompactString,
}

/// Final outcome of a completed scan.
#[derive(Clone, Debug)]
pub struct ScanReport {
    pub root: PathBuf,
    pub total_bytes: u64,
    /// Rows in case-insensitive name order.
    pub rows: Vec<ReportRow>,
    pub duration: Duration,
}

/// Scan the tree rooted at `root`, rendering live progress through `view`.
///
/// Returns [`ScanError::RootInaccessible`] if the root itself cannot be
/// listed — no partial scan is attempted. Every other filesystem failure is
/// absorbed into status records and the report.
pub fn run_scan<P, V>(
    root: &Path,
    probe: P,
    view: V,
    options: ScanOptions,
) -> Result<ScanReport, ScanError>
where
    P: SizeProbe,
    V: ProgressView + 'static,
{
    let entries = probe::list_entries(root).map_err(|source| ScanError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;

    let store = Arc::new(ProgressStore::new());

    // Seed the store so every immediate subdirectory shows up as pending
    // from the very first frame. Files in the root are not tracked
    // individually; they only contribute to the grand total.
    let mut subdirs: Vec<Subdir> = Vec::new();
    for entry in entries {
        if entry.kind == EntryKind::Directory {
            let name = entry
                .path
                .file_name()
                .map(|n| CompactString::new(n.to_string_lossy()))
                .unwrap_or_default();
            store.set(&entry.path, StatusRecord::pending());
            subdirs.push(Subdir {
                name,
                path: entry.path,
            });
        }
    }
    subdirs.sort_by_key(|s| s.name.to_lowercase());

    info!(
        "starting scan of {} ({} subdirectories)",
        root.display(),
        subdirs.len()
    );
    let start = Instant::now();

    let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);
    let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(0);

    let renderer = ProgressRenderer::new(
        Arc::clone(&store),
        root.to_path_buf(),
        subdirs.clone(),
        options.render_interval,
    );
    let render_thread = thread::Builder::new()
        .name("duscan-render".into())
        .spawn(move || {
            renderer.run(view, stop_rx);
            drop(done_tx);
        })
        .expect("failed to spawn render thread");

    let aggregator = DirectoryAggregator::new(Arc::new(probe), Arc::clone(&store));
    let total_bytes = aggregator.aggregate(root);

    // Stop the renderer. The stop message wakes it mid-sleep; the done
    // channel disconnecting tells us the thread actually exited. If it has
    // not within the timeout, abandon it rather than block the report.
    let _ = stop_tx.send(());
    match done_rx.recv_timeout(RENDERER_JOIN_TIMEOUT) {
        Err(RecvTimeoutError::Disconnected) => {
            let _ = render_thread.join();
        }
        _ => warn!("renderer did not stop within {RENDERER_JOIN_TIMEOUT:?}; abandoning it"),
    }

    let duration = start.elapsed();
    debug!(
        "scan of {} complete: {total_bytes} bytes in {duration:?}",
        root.display()
    );

    let rows = subdirs
        .iter()
        .map(|s| {
            let record = store.get(&s.path).unwrap_or_else(StatusRecord::pending);
            ReportRow {
                name: s.name.clone(),
                state: record.state,
                message: record.message,
            }
        })
        .collect();

    Ok(ScanReport {
        root: root.to_path_buf(),
        total_bytes,
        rows,
        duration,
    })
}
