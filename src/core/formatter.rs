//! Ordering and field formatting for entries in lsr.
//!
//! The [Sorter] picks one named ordering strategy per listing from the sort key and direction.
//! The free functions format single fields of an [Entry] for the long listing:
//! mode strings, sizes and modification times.

use crate::core::error::ListError;
use crate::core::fm::Entry;

use chrono::{Local, TimeZone};
use humansize::{DECIMAL, format_size};
use log::debug;
use serde::Deserialize;

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Field the listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    #[serde(rename = "time")]
    ModifiedTime,
    Size,
}

impl SortKey {
    /// Resolves the sort flags of one invocation. Time beats size beats name.
    pub fn from_flags(by_time: bool, by_size: bool) -> Option<Self> {
        if by_time {
            Some(SortKey::ModifiedTime)
        } else if by_size {
            Some(SortKey::Size)
        } else {
            None
        }
    }
}

/// The closed set of orderings a listing can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// A to Z, case-insensitive.
    NameAscending,
    /// Z to A, case-insensitive.
    NameDescending,
    NewestFirst,
    OldestFirst,
    LargestFirst,
    SmallestFirst,
}

type Comparator = fn(&Entry, &Entry) -> Ordering;

impl SortStrategy {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        match (key, reverse) {
            (SortKey::Name, false) => SortStrategy::NameAscending,
            (SortKey::Name, true) => SortStrategy::NameDescending,
            (SortKey::ModifiedTime, false) => SortStrategy::NewestFirst,
            (SortKey::ModifiedTime, true) => SortStrategy::OldestFirst,
            (SortKey::Size, false) => SortStrategy::LargestFirst,
            (SortKey::Size, true) => SortStrategy::SmallestFirst,
        }
    }

    fn comparator(self) -> Comparator {
        match self {
            SortStrategy::NameAscending => cmp_name,
            SortStrategy::NameDescending => |a, b| cmp_name(b, a),
            SortStrategy::NewestFirst => |a, b| cmp_time(b, a),
            SortStrategy::OldestFirst => cmp_time,
            SortStrategy::LargestFirst => |a, b| cmp_size(b, a),
            SortStrategy::SmallestFirst => cmp_size,
        }
    }
}

/// Case-insensitive name order. Names equal after folding fall back to the raw bytes.
/// ASCII case-folded byte order; non-ASCII bytes compare as they are.
/// Names that fold equal fall back to their raw bytes.
fn cmp_name(a: &Entry, b: &Entry) -> Ordering {
    let (a, b) = (a.name().as_bytes(), b.name().as_bytes());
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
        .then_with(|| a.cmp(b))
}

fn cmp_time(a: &Entry, b: &Entry) -> Ordering {
    a.modified_at()
        .cmp(&b.modified_at())
        .then_with(|| cmp_name(b, a))
}

fn cmp_size(a: &Entry, b: &Entry) -> Ordering {
    a.size_bytes()
        .cmp(&b.size_bytes())
        .then_with(|| cmp_name(b, a))
}

/// Orders entries with the strategy chosen at construction.
#[derive(Debug, Clone, Copy)]
pub struct Sorter {
    strategy: SortStrategy,
}

impl Sorter {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self {
            strategy: SortStrategy::new(key, reverse),
        }
    }

    #[inline]
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Sorts the given entries in place.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        debug!("sorting {} entries: {:?}", entries.len(), self.strategy);
        entries.sort_unstable_by(self.strategy.comparator());
    }
}

/// Sorts a collected listing by `key`, flipping the direction when `reverse` is set.
pub fn sort(mut entries: Vec<Entry>, key: SortKey, reverse: bool) -> Vec<Entry> {
    Sorter::new(key, reverse).sort_entries(&mut entries);
    entries
}

/// Formats the entry kind and permissions as a ten character string like `drwxr-xr-x`.
pub fn format_mode(entry: &Entry) -> String {
    let perms = entry.permissions();
    let mut chars = [entry.kind().glyph(), '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if perms.is_set(shift + 2) {
            chars[base] = 'r';
        }
        if perms.is_set(shift + 1) {
            chars[base + 1] = 'w';
        }
        if perms.is_set(shift) {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats a size either as the raw byte count or in decimal units (`1.23 kB`).
pub fn format_file_size(size: u64, human: bool) -> String {
    if human {
        format_size(size, DECIMAL)
    } else {
        size.to_string()
    }
}

/// Formats the modification time in local time as `Mon dd HH:MM`, day padded with a space.
/// # Returns
/// [ListError::FormatFailure] when the timestamp has no local representation.
pub fn format_file_time(entry: &Entry) -> Result<String, ListError> {
    format_timestamp(entry.modified_at()).ok_or_else(|| ListError::FormatFailure {
        name: entry.name().to_string(),
    })
}

fn format_timestamp(time: SystemTime) -> Option<String> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(d) => (i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(e) => {
            // before the epoch: round towards negative infinity
            let d = e.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            match d.subsec_nanos() {
                0 => (-secs, 0),
                n => (-secs - 1, 1_000_000_000 - n),
            }
        }
    };
    let dt = Local.timestamp_opt(secs, nanos).single()?;
    Some(dt.format("%b %e %H:%M").to_string())
}
