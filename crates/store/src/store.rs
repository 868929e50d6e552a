//! Partition store implementation
//!
//! This module provides the core implementation of the DeckDrop storage
//! system through the [`ExchangeStore`] type. It manages the access-code
//! namespace, file transfer in and out of partitions, the retention sweep,
//! and the operator bulk wipe.
//!
//! # Concurrency Model
//!
//! The store performs no coordination between callers. Concurrent writers to
//! the same partition race; the collision-proof naming in [`ExchangeStore::save_file`]
//! keeps a same-named upload from silently replacing its predecessor, but
//! nothing else is defended against. A sweep running between two writes can
//! remove a partition whose last recorded activity predates the retention
//! threshold.

use crate::constants::{ACTIVITY_STAMP_NAME, INBOUND_DIR_NAME, OUTBOUND_DIR_NAME, RETENTION_HOURS};
use crate::{StoreError, StoreResult};
use chrono::{DateTime, Duration, Utc};
use deckdrop_types::AccessCode;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The two sub-areas of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Submitter-provided source files awaiting operator action
    Inbound,
    /// Operator-provided result files awaiting submitter retrieval
    Outbound,
}

impl Area {
    /// Returns the on-disk directory name for this sub-area.
    pub fn dir_name(self) -> &'static str {
        match self {
            Area::Inbound => INBOUND_DIR_NAME,
            Area::Outbound => OUTBOUND_DIR_NAME,
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl std::str::FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INBOUND_DIR_NAME => Ok(Area::Inbound),
            OUTBOUND_DIR_NAME => Ok(Area::Outbound),
            other => Err(format!(
                "unknown area {:?} (expected {} or {})",
                other, INBOUND_DIR_NAME, OUTBOUND_DIR_NAME
            )),
        }
    }
}

/// A file stored inside one sub-area of one partition.
///
/// No metadata is tracked beyond what the filesystem reports.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredFile {
    /// Name the file is stored under (may carry a timestamp prefix if the
    /// original name was already taken)
    pub name: String,

    /// Size of the file in bytes
    pub size_bytes: u64,

    /// UTC timestamp of the last modification
    pub modified: DateTime<Utc>,
}

/// Filesystem-backed store of access-code partitions
///
/// The `ExchangeStore` is scoped to a single storage root. Each partition
/// under the root is keyed by a sanitized [`AccessCode`] and holds an
/// `inbound` and an `outbound` sub-area. The store is cheap to clone and
/// holds no open handles.
#[derive(Debug, Clone)]
pub struct ExchangeStore {
    /// Canonicalised storage root containing all partitions
    root: PathBuf,

    /// Inactivity window after which a partition is swept
    retention: Duration,
}

impl ExchangeStore {
    /// Creates a new `ExchangeStore` rooted at the given directory.
    ///
    /// The root is created if it does not exist and canonicalised so that
    /// every partition path is resolved against a fixed absolute base.
    /// Retention is the fixed [`RETENTION_HOURS`] window.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRoot` if the root cannot be created or
    /// canonicalised, or if it exists but is not a directory.
    pub fn new(root: &Path) -> StoreResult<Self> {
        fs::create_dir_all(root).map_err(|e| {
            StoreError::InvalidRoot(format!("Cannot create {}: {}", root.display(), e))
        })?;

        let root = root.canonicalize().map_err(|e| {
            StoreError::InvalidRoot(format!("Cannot canonicalize {}: {}", root.display(), e))
        })?;

        if !root.is_dir() {
            return Err(StoreError::InvalidRoot(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        Ok(Self {
            root,
            retention: Duration::hours(RETENTION_HOURS),
        })
    }

    /// Returns the storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the path to one sub-area of a partition, creating the
    /// partition and the sub-area if absent.
    ///
    /// Repeated calls with the same code and area are idempotent and return
    /// the same path. Resolving an area counts as partition activity and
    /// refreshes the activity stamp. Raw codes that sanitize to the same
    /// string resolve to the same partition; the store does not distinguish
    /// who created it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if directory creation or the stamp write
    /// fails.
    pub fn area_path(&self, code: &AccessCode, area: Area) -> StoreResult<PathBuf> {
        let path = self.partition_dir(code).join(area.dir_name());
        fs::create_dir_all(&path).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create area directory {}: {}", path.display(), e),
            ))
        })?;
        self.touch(code)?;
        Ok(path)
    }

    /// Writes a file into a sub-area of a partition.
    ///
    /// The write is whole-buffer and synchronous, with no temp-and-rename
    /// step. If `filename` is already taken in the target area, the file is
    /// stored under a timestamp-prefixed name (with a counter once the
    /// timestamp itself is taken) instead of replacing the existing one.
    /// The file is created with `create_new`, so two writers can never claim
    /// the same name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFilename` if `filename` is empty, hidden,
    /// or not a bare file name, and `StoreError::Io` if the write fails.
    pub fn save_file(
        &self,
        code: &AccessCode,
        area: Area,
        filename: &str,
        bytes: &[u8],
    ) -> StoreResult<StoredFile> {
        validate_filename(filename)?;

        let dir = self.area_path(code, area)?;

        let mut stored_name = filename.to_owned();
        let mut attempt: u32 = 0;
        let mut file = loop {
            let target = dir.join(&stored_name);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
            {
                Ok(file) => break file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                    let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
                    stored_name = if attempt == 1 {
                        format!("{}_{}", stamp, filename)
                    } else {
                        format!("{}_{}_{}", stamp, attempt, filename)
                    };
                }
                Err(e) => {
                    return Err(StoreError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create file {}: {}", target.display(), e),
                    )));
                }
            }
        };

        file.write_all(bytes).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write file to {}: {}",
                    dir.join(&stored_name).display(),
                    e
                ),
            ))
        })?;

        tracing::debug!(code = %code, area = %area, name = %stored_name, "stored file");

        Ok(StoredFile {
            name: stored_name,
            size_bytes: bytes.len() as u64,
            modified: Utc::now(),
        })
    }

    /// Reads a file from a sub-area of a partition.
    ///
    /// Reading does not create the partition and does not refresh the
    /// activity stamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFilename` for non-bare names,
    /// `StoreError::FileNotFound` if the file is absent, and
    /// `StoreError::Io` if the read fails.
    pub fn read_file(&self, code: &AccessCode, area: Area, filename: &str) -> StoreResult<Vec<u8>> {
        validate_filename(filename)?;

        let path = self
            .partition_dir(code)
            .join(area.dir_name())
            .join(filename);

        if !path.is_file() {
            return Err(StoreError::FileNotFound(format!("{}/{}", code, filename)));
        }

        fs::read(&path).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read file from {}: {}", path.display(), e),
            ))
        })
    }

    /// Lists the immediate file entries of a sub-area.
    ///
    /// The partition and sub-area are created if absent, so listing a
    /// never-used code yields an empty result rather than an error. Entry
    /// order is whatever the filesystem enumerates; nothing is sorted.
    pub fn list_files(&self, code: &AccessCode, area: Area) -> StoreResult<Vec<StoredFile>> {
        let dir = self.area_path(code, area)?;

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            let modified = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());
            files.push(StoredFile {
                name,
                size_bytes: metadata.len(),
                modified,
            });
        }
        Ok(files)
    }

    /// Lists the codes of every partition directory under the root.
    ///
    /// Non-directory entries are skipped, as are directories whose names are
    /// not already sanitized codes (nothing the store writes produces one);
    /// reporting those would advertise partitions that do not exist.
    pub fn partitions(&self) -> StoreResult<Vec<AccessCode>> {
        let mut codes = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Ok(code) = AccessCode::new(name) {
                    if code.as_str() == name {
                        codes.push(code);
                    }
                }
            }
        }
        Ok(codes)
    }

    /// Removes every partition whose last activity predates the retention
    /// window.
    ///
    /// Single synchronous pass over the root in filesystem enumeration
    /// order. Each expired partition is deleted recursively, inbound and
    /// outbound alike, with no way to recover. Best-effort, fire-and-forget:
    /// there is no rollback and no retry, and the first error aborts the
    /// remainder of the pass.
    ///
    /// # Returns
    ///
    /// The codes of the partitions that were removed.
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> StoreResult<Vec<String>> {
        let cutoff = now - self.retention;
        let mut removed = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let path = entry.path();
            if self.last_activity(&path) >= cutoff {
                continue;
            }
            fs::remove_dir_all(&path).map_err(|e| {
                StoreError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to remove partition {}: {}", path.display(), e),
                ))
            })?;
            let code = entry.file_name().to_string_lossy().into_owned();
            tracing::info!(code = %code, "swept expired partition");
            removed.push(code);
        }

        Ok(removed)
    }

    /// Deletes the entire storage root and recreates it empty.
    ///
    /// Unconditional: every partition is destroyed regardless of age. There
    /// is no confirmation step and no undo.
    pub fn wipe_all(&self) -> StoreResult<()> {
        fs::remove_dir_all(&self.root).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to remove root {}: {}", self.root.display(), e),
            ))
        })?;
        fs::create_dir_all(&self.root).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to recreate root {}: {}", self.root.display(), e),
            ))
        })?;
        tracing::warn!(root = %self.root.display(), "wiped all partitions");
        Ok(())
    }

    /// Returns the path of the partition directory for a code.
    fn partition_dir(&self, code: &AccessCode) -> PathBuf {
        self.root.join(code.as_str())
    }

    /// Refreshes the partition's last-activity stamp.
    fn touch(&self, code: &AccessCode) -> StoreResult<()> {
        let stamp = self.partition_dir(code).join(ACTIVITY_STAMP_NAME);
        fs::write(&stamp, Utc::now().to_rfc3339()).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write activity stamp {}: {}", stamp.display(), e),
            ))
        })?;
        Ok(())
    }

    /// Reads a partition's last-activity time.
    ///
    /// Prefers the `.activity` stamp; a missing or unparseable stamp falls
    /// back to the directory's mtime, and as a last resort the partition is
    /// treated as just-touched so a metadata failure never deletes data.
    fn last_activity(&self, partition: &Path) -> DateTime<Utc> {
        let stamp = partition.join(ACTIVITY_STAMP_NAME);
        if let Ok(contents) = fs::read_to_string(&stamp) {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(contents.trim()) {
                return parsed.with_timezone(&Utc);
            }
        }
        fs::metadata(partition)
            .and_then(|m| m.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now())
    }
}

/// Checks that a filename is a single, visible path component.
///
/// Uploaded names pass through to the filesystem unchanged, so anything with
/// a separator, a parent reference, or a leading dot (which would collide
/// with the activity stamp) is refused outright rather than sanitized.
fn validate_filename(filename: &str) -> StoreResult<()> {
    let bare = !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains('/')
        && !filename.contains('\\')
        && filename != ".."
        && !filename.contains('\0');
    if bare {
        Ok(())
    } else {
        Err(StoreError::InvalidFilename(filename.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> ExchangeStore {
        ExchangeStore::new(&temp.path().join("exchange_data")).unwrap()
    }

    fn code(raw: &str) -> AccessCode {
        AccessCode::new(raw).unwrap()
    }

    /// Backdates a partition's activity stamp by the given number of hours.
    fn backdate(store: &ExchangeStore, code: &AccessCode, hours: i64) {
        let stamp = store.root().join(code.as_str()).join(ACTIVITY_STAMP_NAME);
        let past = Utc::now() - Duration::hours(hours);
        std::fs::write(stamp, past.to_rfc3339()).unwrap();
    }

    #[test]
    fn new_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("exchange_data");

        let store = ExchangeStore::new(&root).unwrap();

        assert!(store.root().is_dir());
    }

    #[test]
    fn new_rejects_file_as_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("file.txt");
        std::fs::write(&root, "not a directory").unwrap();

        let result = ExchangeStore::new(&root);

        assert!(matches!(result, Err(StoreError::InvalidRoot(_))));
    }

    #[test]
    fn area_path_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("Alex8899");

        let first = store.area_path(&code, Area::Inbound).unwrap();
        let second = store.area_path(&code, Area::Inbound).unwrap();

        assert_eq!(first, second);
        assert!(first.is_dir());
        assert!(first.ends_with("Alex8899/inbound"));
    }

    #[test]
    fn colliding_codes_share_a_partition() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store
            .save_file(&code("abc-123"), Area::Inbound, "a.pdf", b"pdf")
            .unwrap();
        let files = store.list_files(&code("abc123"), Area::Inbound).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.pdf");
    }

    #[test]
    fn write_then_list_sees_the_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("Alex8899");

        let stored = store
            .save_file(&code, Area::Inbound, "slides.pdf", b"%PDF-1.7 content")
            .unwrap();

        assert_eq!(stored.name, "slides.pdf");
        assert_eq!(stored.size_bytes, 16);

        let files = store.list_files(&code, Area::Inbound).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "slides.pdf");
        assert_eq!(files[0].size_bytes, 16);
    }

    #[test]
    fn listing_a_fresh_code_is_empty_not_an_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let files = store.list_files(&code("neverused1"), Area::Outbound).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn listing_skips_the_activity_stamp() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("stampcheck");

        store
            .save_file(&code, Area::Inbound, "a.pdf", b"x")
            .unwrap();

        // Stamp lives at the partition root, not inside an area, and the
        // area listing must never surface dotfiles either way.
        let files = store.list_files(&code, Area::Inbound).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn duplicate_filename_does_not_clobber() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("dup123");

        let first = store
            .save_file(&code, Area::Outbound, "result.pptx", b"first")
            .unwrap();
        let second = store
            .save_file(&code, Area::Outbound, "result.pptx", b"second")
            .unwrap();

        assert_eq!(first.name, "result.pptx");
        assert_ne!(second.name, first.name);
        assert!(second.name.ends_with("result.pptx"));

        let original = store
            .read_file(&code, Area::Outbound, "result.pptx")
            .unwrap();
        assert_eq!(original, b"first");

        let files = store.list_files(&code, Area::Outbound).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn rapid_same_name_saves_all_survive() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("burst55");

        // Back-to-back saves land inside one timestamp tick; every version
        // must still get its own name.
        for i in 0..5u8 {
            store
                .save_file(&code, Area::Outbound, "result.pptx", &[i])
                .unwrap();
        }

        let files = store.list_files(&code, Area::Outbound).unwrap();
        assert_eq!(files.len(), 5);

        let original = store
            .read_file(&code, Area::Outbound, "result.pptx")
            .unwrap();
        assert_eq!(original, [0]);
    }

    #[test]
    fn read_round_trips_binary_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("bin999");
        let content: Vec<u8> = (0..=255).collect();

        store
            .save_file(&code, Area::Inbound, "binary.pdf", &content)
            .unwrap();
        let back = store.read_file(&code, Area::Inbound, "binary.pdf").unwrap();

        assert_eq!(back, content);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.read_file(&code("ghost77"), Area::Outbound, "nope.pptx");

        assert!(matches!(result, Err(StoreError::FileNotFound(_))));
    }

    #[test]
    fn filenames_with_path_components_are_rejected() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("evil666");

        for bad in ["../escape.pdf", "a/b.pdf", "a\\b.pdf", "", ".hidden", ".."] {
            let result = store.save_file(&code, Area::Inbound, bad, b"x");
            assert!(
                matches!(result, Err(StoreError::InvalidFilename(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn partitions_lists_directories_only() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.area_path(&code("aaa111"), Area::Inbound).unwrap();
        store.area_path(&code("bbb222"), Area::Outbound).unwrap();
        std::fs::write(store.root().join("stray.txt"), "not a partition").unwrap();

        let mut names: Vec<String> = store
            .partitions()
            .unwrap()
            .iter()
            .map(|c| c.as_str().to_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["aaa111", "bbb222"]);
    }

    #[test]
    fn partitions_skips_directory_names_that_are_not_codes() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.area_path(&code("real123"), Area::Inbound).unwrap();
        // A hand-placed directory whose name would only become a code after
        // sanitization must not be reported as one.
        std::fs::create_dir(store.root().join("a b")).unwrap();

        let names: Vec<String> = store
            .partitions()
            .unwrap()
            .iter()
            .map(|c| c.as_str().to_owned())
            .collect();

        assert_eq!(names, vec!["real123"]);
    }

    #[test]
    fn sweep_removes_only_expired_partitions() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let old = code("old123");
        let fresh = code("fresh456");

        store
            .save_file(&old, Area::Inbound, "old.pdf", b"x")
            .unwrap();
        store
            .save_file(&fresh, Area::Inbound, "fresh.pdf", b"y")
            .unwrap();
        backdate(&store, &old, RETENTION_HOURS + 1);

        let removed = store.sweep_expired(Utc::now()).unwrap();

        assert_eq!(removed, vec!["old123".to_owned()]);
        assert!(!store.root().join("old123").exists());
        let kept = store.list_files(&fresh, Area::Inbound).unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn sweep_keeps_partitions_on_the_retention_boundary() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("edge789");

        store.save_file(&code, Area::Inbound, "a.pdf", b"x").unwrap();
        backdate(&store, &code, RETENTION_HOURS - 1);

        let removed = store.sweep_expired(Utc::now()).unwrap();

        assert!(removed.is_empty());
        assert!(store.root().join("edge789").exists());
    }

    #[test]
    fn sweep_skips_plain_files_at_the_root() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        std::fs::write(store.root().join("stray.txt"), "keep me").unwrap();

        let removed = store.sweep_expired(Utc::now()).unwrap();

        assert!(removed.is_empty());
        assert!(store.root().join("stray.txt").exists());
    }

    #[test]
    fn sweep_falls_back_to_mtime_without_a_stamp() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        // Hand-made partition without a stamp, as one created before the
        // stamp existed. A fresh mtime keeps it alive.
        std::fs::create_dir_all(store.root().join("legacy1").join(INBOUND_DIR_NAME)).unwrap();

        let removed = store.sweep_expired(Utc::now()).unwrap();

        assert!(removed.is_empty());
        assert!(store.root().join("legacy1").exists());
    }

    #[test]
    fn saving_refreshes_the_activity_stamp() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("touch42");

        store.save_file(&code, Area::Inbound, "a.pdf", b"x").unwrap();
        backdate(&store, &code, RETENTION_HOURS + 5);
        store.save_file(&code, Area::Inbound, "b.pdf", b"y").unwrap();

        let removed = store.sweep_expired(Utc::now()).unwrap();

        assert!(removed.is_empty());
        assert!(store.root().join("touch42").exists());
    }

    #[test]
    fn wipe_leaves_root_present_and_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store
            .save_file(&code("wipeme1"), Area::Inbound, "a.pdf", b"x")
            .unwrap();
        store
            .save_file(&code("wipeme2"), Area::Outbound, "b.pptx", b"y")
            .unwrap();

        store.wipe_all().unwrap();

        assert!(store.root().is_dir());
        assert!(store.partitions().unwrap().is_empty());
        assert_eq!(std::fs::read_dir(store.root()).unwrap().count(), 0);
    }

    #[test]
    fn exchange_scenario_end_to_end() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let code = code("Alex8899");

        // Submitter deposits the source file.
        store
            .save_file(&code, Area::Inbound, "slides.pdf", b"%PDF-1.7")
            .unwrap();

        // Operator finds the partition and retrieves the source.
        let partitions = store.partitions().unwrap();
        assert!(partitions.iter().any(|c| c.as_str() == "Alex8899"));
        let pdf = store.read_file(&code, Area::Inbound, "slides.pdf").unwrap();
        assert_eq!(pdf, b"%PDF-1.7");

        // Operator deposits the converted deck.
        store
            .save_file(&code, Area::Outbound, "result.pptx", b"PK deck")
            .unwrap();

        // Submitter retrieves the result unchanged.
        let results = store.list_files(&code, Area::Outbound).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "result.pptx");
        let deck = store
            .read_file(&code, Area::Outbound, "result.pptx")
            .unwrap();
        assert_eq!(deck, b"PK deck");
    }

    #[test]
    fn stored_file_serializes_for_listings() {
        let file = StoredFile {
            name: "result.pptx".into(),
            size_bytes: 1024,
            modified: "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        };

        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("result.pptx"));
        assert!(json.contains("1024"));
    }
}
