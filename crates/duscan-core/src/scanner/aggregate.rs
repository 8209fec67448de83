/// Recursive bottom-up size aggregation.
///
/// Each directory is handled in two phases: its immediate files are probed
/// concurrently on a transient bounded worker pool, then its subdirectories
/// are recursed into **sequentially**. This bounds concurrency to a single
/// directory's fan-out at a time — the I/O-bound stat calls that dominate
/// cost still overlap, but a deep tree never nests pools or explodes the
/// thread count.
///
/// Errors never propagate upward as failures. An unlistable directory is
/// marked `Error`/"Access Denied" in the store and contributes 0 to its
/// parent; a failing file probe contributes 0 and still counts toward the
/// `(k/n files)` progress counter.
use crate::model::StatusRecord;
use crate::scanner::probe::{list_entries, EntryKind, SizeProbe};
use crate::store::ProgressStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Upper bound on probe worker threads for a single directory's pool.
/// The pool size is `min(PROBE_POOL_CAP, file_count)`.
pub const PROBE_POOL_CAP: usize = 32;

/// Directories nested deeper than this are skipped (contributing 0) instead
/// of risking call-stack exhaustion.
const MAX_DEPTH: usize = 512;

pub struct DirectoryAggregator<P: SizeProbe> {
    probe: Arc<P>,
    store: Arc<ProgressStore>,
}

impl<P: SizeProbe> DirectoryAggregator<P> {
    pub fn new(probe: Arc<P>, store: Arc<ProgressStore>) -> Self {
        Self { probe, store }
    }

    /// Compute the total size in bytes of the subtree rooted at `path`,
    /// publishing status updates into the store as the scan progresses.
    pub fn aggregate(&self, path: &Path) -> u64 {
        self.aggregate_at(path, 0)
    }

    fn aggregate_at(&self, path: &Path, depth: usize) -> u64 {
        if depth > MAX_DEPTH {
            warn!("skipping {}: deeper than {MAX_DEPTH} levels", path.display());
            return 0;
        }

        self.store.set(path, StatusRecord::scanning());

        let entries = match list_entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("cannot list {}: {err}", path.display());
                self.store.set(path, StatusRecord::access_denied());
                return 0;
            }
        };

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries {
            match entry.kind {
                EntryKind::File => files.push(entry.path),
                EntryKind::Directory => subdirs.push(entry.path),
            }
        }

        let mut total = self.probe_files(path, files);

        for subdir in subdirs {
            total += self.aggregate_at(&subdir, depth + 1);
        }

        self.store.set(path, StatusRecord::complete(total));
        total
    }

    /// Fan file probes out across a fresh bounded pool and drain the
    /// completions on this thread, advancing the `(k/n files)` counter as
    /// each one settles. Completion order is whatever the pool produces.
    ///
    /// Draining here keeps this thread the sole writer for `dir`'s record,
    /// so its messages stay in write order. The pool is torn down before
    /// returning; it never outlives the directory it was built for.
    fn probe_files(&self, dir: &Path, files: Vec<PathBuf>) -> u64 {
        let n = files.len();
        if n == 0 {
            return 0;
        }

        let workers = PROBE_POOL_CAP.min(n).max(1);
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool,
            Err(err) => {
                warn!("probe pool unavailable ({err}); probing inline");
                return self.probe_files_inline(dir, files);
            }
        };

        let (tx, rx) = crossbeam_channel::unbounded::<u64>();
        for file in files {
            let tx = tx.clone();
            let probe = Arc::clone(&self.probe);
            pool.spawn(move || {
                let _ = tx.send(probe.size(&file));
            });
        }
        drop(tx);

        let mut total = 0u64;
        let mut done = 0usize;
        for size in rx {
            total += size;
            done += 1;
            self.store.set(dir, StatusRecord::scanning_files(done, n));
        }
        total
    }

    /// Fallback when the worker pool cannot be built: probe on this thread.
    fn probe_files_inline(&self, dir: &Path, files: Vec<PathBuf>) -> u64 {
        let n = files.len();
        let mut total = 0u64;
        for (done, file) in files.iter().enumerate() {
            total += self.probe.size(file);
            self.store.set(dir, StatusRecord::scanning_files(done + 1, n));
        }
        total
    }
}
