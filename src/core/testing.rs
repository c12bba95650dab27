//! In-memory collaborators for unit tests.

use crate::core::fm::{Entry, EntryKind, EntryMetadata, Permissions};
use crate::core::provider::{DirectoryReader, MetadataProvider};

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Regular file metadata with the given size and mtime (seconds since the epoch).
pub(crate) fn meta(size: u64, mtime_secs: u64) -> EntryMetadata {
    EntryMetadata {
        kind: EntryKind::Regular,
        permissions: Permissions::from_mode(0o644),
        uid: 1000,
        gid: 100,
        link_count: 1,
        size_bytes: size,
        modified: UNIX_EPOCH + Duration::from_secs(mtime_secs),
    }
}

pub(crate) fn entry(name: &str, size: u64, mtime_secs: u64) -> Entry {
    Entry::new(
        name.into(),
        meta(size, mtime_secs),
        "user".to_string(),
        "staff".to_string(),
    )
}

pub(crate) fn entries(names: &[&str]) -> Vec<Entry> {
    names.iter().map(|n| entry(n, 0, 0)).collect()
}

/// A single directory held in memory.
pub(crate) struct MemoryFs {
    root: PathBuf,
    members: Vec<(String, Option<EntryMetadata>)>,
}

impl MemoryFs {
    pub(crate) fn new(root: &str) -> Self {
        MemoryFs {
            root: PathBuf::from(root),
            members: Vec::new(),
        }
    }

    pub(crate) fn with(mut self, name: &str, md: EntryMetadata) -> Self {
        self.members.push((name.to_string(), Some(md)));
        self
    }

    /// Adds a member that is listed but cannot be stat-ed.
    pub(crate) fn with_broken(mut self, name: &str) -> Self {
        self.members.push((name.to_string(), None));
        self
    }

    fn dir_meta() -> EntryMetadata {
        EntryMetadata {
            kind: EntryKind::Directory,
            permissions: Permissions::from_mode(0o755),
            link_count: 2,
            size_bytes: 4096,
            ..meta(0, 0)
        }
    }
}

impl DirectoryReader for MemoryFs {
    type Stream = std::vec::IntoIter<io::Result<OsString>>;

    fn open(&self, path: &Path) -> io::Result<Self::Stream> {
        if path != self.root {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        let names = [".", ".."]
            .into_iter()
            .map(OsString::from)
            .chain(self.members.iter().map(|(n, _)| OsString::from(n)))
            .map(Ok)
            .collect::<Vec<_>>();
        Ok(names.into_iter())
    }
}

impl MetadataProvider for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<EntryMetadata> {
        // Path components drop a trailing `.`, so check the raw text
        let raw = path.to_string_lossy();
        if raw.ends_with("/.") || raw.ends_with("/..") {
            return Ok(Self::dir_meta());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match self.members.iter().find(|(n, _)| *n == name) {
            Some((_, Some(md))) => Ok(md.clone()),
            Some((_, None)) => Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn resolve_user(&self, uid: u32) -> String {
        format!("user{}", uid)
    }

    fn resolve_group(&self, gid: u32) -> String {
        format!("group{}", gid)
    }
}

pub(crate) fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}
