//! The `[general]` table of `lsr.toml`.
//!
//! Holds the defaults a listing starts from before command-line flags are applied.

use crate::core::SortKey;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    long_format: bool,
    reverse: bool,
    human_sizes: bool,
    sort: SortKey,
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn human_sizes(&self) -> bool {
        self.human_sizes
    }

    #[inline]
    pub fn sort(&self) -> SortKey {
        self.sort
    }
}
