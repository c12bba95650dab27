//! Filesystem collaborators for the collector.
//!
//! [DirectoryReader] hands out the raw names of a directory, [MetadataProvider] stats a single
//! path and turns numeric owner ids into names. The OS-backed implementations live here too:
//! [OsDirectoryReader] and [OsMetadataProvider].

use crate::core::fm::{EntryKind, EntryMetadata, Permissions};

use once_cell::sync::Lazy;

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::io;
use std::path::Path;
use std::sync::RwLock;

/// Opens a directory stream that yields one entry name at a time.
///
/// Closing the stream is dropping it, so every exit path of the caller releases the handle.
pub trait DirectoryReader {
    type Stream: Iterator<Item = io::Result<OsString>>;

    fn open(&self, path: &Path) -> io::Result<Self::Stream>;
}

/// Resolves per-entry metadata and owner/group names.
pub trait MetadataProvider {
    /// Inspects `path` without following a trailing symlink.
    fn stat(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// User name for `uid`, or the id itself when it has no name.
    fn resolve_user(&self, uid: u32) -> String;

    /// Group name for `gid`, or the id itself when it has no name.
    fn resolve_group(&self, gid: u32) -> String;
}

/// [DirectoryReader] backed by [fs::read_dir].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDirectoryReader;

/// Directory stream of [OsDirectoryReader].
///
/// The platform iterator never reports `.` and `..`, so they are yielded first.
pub struct DirStream {
    dots: std::array::IntoIter<&'static str, 2>,
    inner: ReadDir,
}

impl Iterator for DirStream {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(dot) = self.dots.next() {
            return Some(Ok(OsString::from(dot)));
        }
        self.inner
            .next()
            .map(|entry| entry.map(|e| e.file_name()))
    }
}

impl DirectoryReader for OsDirectoryReader {
    type Stream = DirStream;

    fn open(&self, path: &Path) -> io::Result<DirStream> {
        Ok(DirStream {
            dots: [".", ".."].into_iter(),
            inner: fs::read_dir(path)?,
        })
    }
}

/// [MetadataProvider] backed by `lstat` and the system user/group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsMetadataProvider;

static USER_NAMES: Lazy<RwLock<HashMap<u32, String>>> = Lazy::new(Default::default);
static GROUP_NAMES: Lazy<RwLock<HashMap<u32, String>>> = Lazy::new(Default::default);

/// Looks `id` up in `cache`, resolving and storing it on a miss.
fn cached_name(
    cache: &RwLock<HashMap<u32, String>>,
    id: u32,
    resolve: impl FnOnce(u32) -> Option<String>,
) -> String {
    if let Ok(names) = cache.read()
        && let Some(name) = names.get(&id)
    {
        return name.clone();
    }
    let name = resolve(id).unwrap_or_else(|| id.to_string());
    if let Ok(mut names) = cache.write() {
        names.insert(id, name.clone());
    }
    name
}

impl MetadataProvider for OsMetadataProvider {
    fn stat(&self, path: &Path) -> io::Result<EntryMetadata> {
        let md = fs::symlink_metadata(path)?;
        let modified = md.modified()?;
        let kind = EntryKind::from_file_type(&md.file_type());

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;

            Ok(EntryMetadata {
                kind,
                permissions: Permissions::from_mode(md.mode()),
                uid: md.uid(),
                gid: md.gid(),
                link_count: md.nlink(),
                size_bytes: md.len(),
                modified,
            })
        }

        #[cfg(not(unix))]
        {
            let mut mode = if md.permissions().readonly() { 0o444 } else { 0o666 };
            if md.is_dir() {
                mode |= 0o111;
            }
            Ok(EntryMetadata {
                kind,
                permissions: Permissions::from_mode(mode),
                uid: 0,
                gid: 0,
                link_count: 1,
                size_bytes: md.len(),
                modified,
            })
        }
    }

    fn resolve_user(&self, uid: u32) -> String {
        cached_name(&USER_NAMES, uid, |uid| {
            #[cfg(unix)]
            {
                uzers::get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
            }
            #[cfg(not(unix))]
            {
                let _ = uid;
                None
            }
        })
    }

    fn resolve_group(&self, gid: u32) -> String {
        cached_name(&GROUP_NAMES, gid, |gid| {
            #[cfg(unix)]
            {
                uzers::get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
            }
            #[cfg(not(unix))]
            {
                let _ = gid;
                None
            }
        })
    }
}
