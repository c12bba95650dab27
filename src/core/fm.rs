//! Directory collection for lsr.
//!
//! Provides the [Entry] record which flows through sorting and rendering,
//! together with the small value types it is made of ([EntryKind], [Permissions], [EntryMetadata]).
//!
//! [collect] drives a [DirectoryReader] and a [MetadataProvider] to build the entry set of one
//! directory.

use crate::core::error::ListError;
use crate::core::provider::{DirectoryReader, MetadataProvider};

use log::debug;

use std::ffi::{OsStr, OsString};
use std::fs::FileType;
use std::path::Path;
use std::time::SystemTime;

/// Kind of a directory member, as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Symlink,
    Unknown,
}

impl EntryKind {
    pub fn from_file_type(ft: &FileType) -> Self {
        if ft.is_file() {
            return EntryKind::Regular;
        }
        if ft.is_dir() {
            return EntryKind::Directory;
        }
        if ft.is_symlink() {
            return EntryKind::Symlink;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if ft.is_fifo() {
                return EntryKind::Fifo;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
        }

        EntryKind::Unknown
    }

    /// Leading character of the mode string.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Symlink => 'l',
            EntryKind::Unknown => '?',
        }
    }
}

/// The nine read/write/execute bits for owner, group and other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions(u16);

impl Permissions {
    const MASK: u32 = 0o777;

    /// Keeps only the permission bits of a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        Permissions((mode & Self::MASK) as u16)
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether bit `shift` (0 = other execute .. 8 = owner read) is set.
    #[inline]
    pub fn is_set(self, shift: u32) -> bool {
        (self.0 >> shift) & 1 != 0
    }
}

/// Raw result of stat-ing one path.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    pub permissions: Permissions,
    pub uid: u32,
    pub gid: u32,
    pub link_count: u64,
    pub size_bytes: u64,
    pub modified: SystemTime,
}

/// Represents a single member of a directory listing.
///
/// Created once by [collect] and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    raw_name: OsString,
    name: String,
    kind: EntryKind,
    permissions: Permissions,
    owner: String,
    group: String,
    link_count: u64,
    size_bytes: u64,
    modified_at: SystemTime,
}

impl Entry {
    /// `name` is kept as read from the directory; a lossy UTF-8 copy is used for display and sorting.
    pub fn new(name: OsString, meta: EntryMetadata, owner: String, group: String) -> Self {
        Entry {
            name: name.to_string_lossy().into_owned(),
            raw_name: name,
            kind: meta.kind,
            permissions: meta.permissions,
            owner,
            group,
            link_count: meta.link_count,
            size_bytes: meta.size_bytes,
            modified_at: meta.modified,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn raw_name(&self) -> &OsStr {
        &self.raw_name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[inline]
    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }
}

/// Hidden entries are the ones whose name starts with a dot, `.` and `..` included.
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Reads the directory at `path` and resolves metadata for every member that survives the
/// hidden-entry filter.
///
/// The order of the returned entries is whatever the reader produced.
/// The first failure of any kind aborts the whole collection; no partial list is returned.
pub fn collect<R, M>(
    path: &Path,
    show_hidden: bool,
    reader: &R,
    provider: &M,
) -> Result<Vec<Entry>, ListError>
where
    R: DirectoryReader,
    M: MetadataProvider,
{
    let stream = reader
        .open(path)
        .map_err(|e| ListError::from_open(path, e))?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for name in stream {
        let name = name.map_err(|e| ListError::from_read(path, e))?;

        if !show_hidden && is_hidden(&name) {
            skipped += 1;
            continue;
        }

        let entry_path = path.join(&name);
        let meta = provider
            .stat(&entry_path)
            .map_err(|e| ListError::from_stat(&entry_path, e))?;
        let owner = provider.resolve_user(meta.uid);
        let group = provider.resolve_group(meta.gid);

        entries.push(Entry::new(name, meta, owner, group));
    }

    debug!(
        "collected {} entries from {} ({} hidden skipped)",
        entries.len(),
        path.display(),
        skipped
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::{OsDirectoryReader, OsMetadataProvider};
    use crate::core::testing::{MemoryFs, meta};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    fn sample_fs() -> MemoryFs {
        MemoryFs::new("/d")
            .with("visible.txt", meta(10, 0))
            .with(".hidden", meta(1, 0))
            .with("Docs", meta(4096, 0))
    }

    #[test]
    fn hidden_entries_are_skipped_by_default() -> Result<(), Box<dyn std::error::Error>> {
        let fs = sample_fs();
        let entries = collect(Path::new("/d"), false, &fs, &fs)?;

        let got = names(&entries);
        assert!(!got.contains(&"."));
        assert!(!got.contains(&".."));
        assert!(!got.contains(&".hidden"));
        assert_eq!(got.len(), 2);
        Ok(())
    }

    #[test]
    fn show_hidden_includes_dots_exactly_once() -> Result<(), Box<dyn std::error::Error>> {
        let fs = sample_fs();
        let entries = collect(Path::new("/d"), true, &fs, &fs)?;

        let got = names(&entries);
        assert_eq!(got.iter().filter(|n| **n == ".").count(), 1);
        assert_eq!(got.iter().filter(|n| **n == "..").count(), 1);
        assert!(got.contains(&".hidden"));
        assert_eq!(got.len(), 5);
        Ok(())
    }

    #[test]
    fn metadata_failure_aborts_collection() {
        let fs = sample_fs().with_broken("broken");
        let err = collect(Path::new("/d"), false, &fs, &fs).unwrap_err();

        match err {
            ListError::MetadataUnavailable { path, .. } => {
                assert_eq!(path, Path::new("/d/broken"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn owner_and_group_are_resolved() -> Result<(), Box<dyn std::error::Error>> {
        let fs = sample_fs();
        let entries = collect(Path::new("/d"), false, &fs, &fs)?;

        let e = entries
            .iter()
            .find(|e| e.name() == "visible.txt")
            .ok_or("missing entry")?;
        assert_eq!(e.owner(), "user1000");
        assert_eq!(e.group(), "group100");
        assert_eq!(e.size_bytes(), 10);
        Ok(())
    }

    #[test]
    fn missing_directory_is_path_not_found() {
        let fs = sample_fs();
        let err = collect(Path::new("/elsewhere"), false, &fs, &fs).unwrap_err();
        assert!(matches!(err, ListError::PathNotFound { .. }));
    }

    #[test]
    fn collect_real_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("one.txt"))?;
        File::create(tmp.path().join(".dotfile"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let entries = collect(tmp.path(), false, &OsDirectoryReader, &OsMetadataProvider)?;
        let mut got = names(&entries);
        got.sort();
        assert_eq!(got, vec!["one.txt", "sub"]);

        let sub = entries
            .iter()
            .find(|e| e.name() == "sub")
            .ok_or("missing sub")?;
        assert_eq!(sub.kind(), EntryKind::Directory);
        assert_eq!(sub.kind().glyph(), 'd');
        Ok(())
    }

    #[test]
    fn collect_file_path_is_not_a_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file = tmp.path().join("plain.txt");
        File::create(&file)?;

        let err = collect(&file, false, &OsDirectoryReader, &OsMetadataProvider).unwrap_err();
        assert!(matches!(err, ListError::NotADirectory { .. }), "{:?}", err);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_stat_by_their_raw_bytes() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new()?;
        let raw = OsStr::from_bytes(b"bad\xffname");
        File::create(tmp.path().join(raw))?;
        File::create(tmp.path().join("ok.txt"))?;

        let entries = collect(tmp.path(), false, &OsDirectoryReader, &OsMetadataProvider)?;
        assert_eq!(entries.len(), 2);

        let bad = entries
            .iter()
            .find(|e| e.raw_name() == raw)
            .ok_or("missing non-utf8 entry")?;
        assert_eq!(bad.raw_name().as_bytes(), b"bad\xffname");
        assert_eq!(bad.name(), "bad\u{FFFD}name");
        assert_eq!(bad.kind(), EntryKind::Regular);
        Ok(())
    }

    #[test]
    fn dot_prefix_marks_hidden() {
        assert!(is_hidden(OsStr::new(".")));
        assert!(is_hidden(OsStr::new("..")));
        assert!(is_hidden(OsStr::new(".git")));
        assert!(!is_hidden(OsStr::new("a.txt")));
        assert!(!is_hidden(OsStr::new("")));
    }

    #[test]
    fn permission_bits_are_masked() {
        let p = Permissions::from_mode(0o100755);
        assert_eq!(p.bits(), 0o755);
        assert!(p.is_set(8));
        assert!(!p.is_set(7));
        assert!(p.is_set(0));
    }
}
