/// The shared progress store — one coarse lock over all status records.
///
/// The aggregator is the sole writer; the renderer and orchestrator read
/// through [`ProgressStore::snapshot`], so the lock is held only long
/// enough to copy the map, never while rendering. Directory counts are
/// small enough that per-key locking would buy nothing.
use crate::model::StatusRecord;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct ProgressStore {
    inner: Mutex<HashMap<PathBuf, StatusRecord>>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `path`.
    ///
    /// Debug builds assert the per-path lifecycle invariant: states never
    /// regress and terminal records are never overwritten.
    pub fn set(&self, path: &Path, record: StatusRecord) {
        let mut map = self.inner.lock();
        if let Some(prev) = map.get(path) {
            debug_assert!(
                record.state.rank() >= prev.state.rank() && !prev.state.is_terminal(),
                "status for {} regressed: {:?} -> {:?}",
                path.display(),
                prev.state,
                record.state,
            );
        }
        map.insert(path.to_path_buf(), record);
    }

    /// Latest record for `path`, if the path has been observed.
    pub fn get(&self, path: &Path) -> Option<StatusRecord> {
        self.inner.lock().get(path).cloned()
    }

    /// Point-in-time copy of the whole map, safe to iterate without the lock.
    pub fn snapshot(&self) -> HashMap<PathBuf, StatusRecord> {
        self.inner.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScanState;

    #[test]
    fn set_then_get() {
        let store = ProgressStore::new();
        let path = Path::new("/some/dir");
        assert!(store.is_empty());
        assert!(store.get(path).is_none());

        store.set(path, StatusRecord::pending());
        let record = store.get(path).unwrap();
        assert_eq!(record.state, ScanState::Pending);
        assert_eq!(record.message, "Pending...");
    }

    #[test]
    fn records_advance_in_place() {
        let store = ProgressStore::new();
        let path = Path::new("/some/dir");

        store.set(path, StatusRecord::pending());
        store.set(path, StatusRecord::scanning());
        store.set(path, StatusRecord::scanning_files(1, 2));
        store.set(path, StatusRecord::complete(100));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(path).unwrap().state, ScanState::Complete);
    }

    #[test]
    fn snapshot_is_point_in_time() {
        let store = ProgressStore::new();
        let a = Path::new("/a");
        store.set(a, StatusRecord::scanning());

        let snap = store.snapshot();
        store.set(a, StatusRecord::complete(0));

        // The snapshot keeps the state it was taken with.
        assert_eq!(snap[&a.to_path_buf()].state, ScanState::Scanning);
        assert_eq!(store.get(a).unwrap().state, ScanState::Complete);
    }

    #[test]
    #[should_panic(expected = "regressed")]
    #[cfg(debug_assertions)]
    fn regressing_a_record_panics_in_debug() {
        let store = ProgressStore::new();
        let path = Path::new("/some/dir");
        store.set(path, StatusRecord::complete(0));
        store.set(path, StatusRecord::scanning());
    }
}
