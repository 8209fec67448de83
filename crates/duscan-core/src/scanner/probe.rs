/// Filesystem probing — the stat seam between the aggregator and the OS.
///
/// [`SizeProbe`] is a trait so tests can inject deterministic sizes; the
/// production implementation is [`FsProbe`]. All failure modes collapse to
/// a zero size — a vanished file or permission error must never abort the
/// directory it lives in.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of one directory child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One filesystem object observed while listing a directory.
#[derive(Clone, Debug)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Returns the size of a filesystem entry in bytes.
///
/// Must not fail outward: permission errors, vanished files, and OS-level
/// stat failures all yield 0.
pub trait SizeProbe: Send + Sync + 'static {
    fn size(&self, path: &Path) -> u64;
}

/// Probe backed by `symlink_metadata`.
///
/// Symlinks are not followed; anything that is not a regular file reports 0.
/// Sparse files and hardlinks report whatever the stat call says, with no
/// deduplication.
pub struct FsProbe;

impl SizeProbe for FsProbe {
    fn size(&self, path: &Path) -> u64 {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => 0,
        }
    }
}

/// List the immediate children of `path` as [`Entry`] values.
///
/// `read_dir` streams entries rather than materialising the full listing,
/// which keeps very large and very deep directories cheap to walk. A child
/// whose own stat fails is silently skipped — it is neither counted as a
/// file nor descended into. Non-directories (regular files, symlinks,
/// sockets) are classified as files and left to the probe to size.
pub fn list_entries(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dent in fs::read_dir(path)? {
        let dent = match dent {
            Ok(d) => d,
            Err(_) => continue,
        };
        let kind = match dent.file_type() {
            Ok(ft) if ft.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(_) => continue,
        };
        entries.push(Entry {
            path: dent.path(),
            kind,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn probe_reports_file_length() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.bin");
        let mut f = fs::File::create(&file).unwrap();
        f.write_all(&[0u8; 321]).unwrap();

        assert_eq!(FsProbe.size(&file), 321);
    }

    #[test]
    fn probe_is_zero_for_missing_path() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(FsProbe.size(&tmp.path().join("no-such-file")), 0);
    }

    #[test]
    fn probe_is_zero_for_directory() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(FsProbe.size(tmp.path()), 0);
    }

    #[test]
    fn listing_partitions_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::File::create(tmp.path().join("a.txt")).unwrap();

        let entries = list_entries(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        let dirs = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .count();
        assert_eq!(dirs, 1);
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(list_entries(&tmp.path().join("gone")).is_err());
    }
}
