//! The resolved behavior of one invocation.
//!
//! [ListingConfiguration] is built once from the config file defaults and the command-line
//! flags, then handed by reference to collection, sorting and rendering. It has no setters.

use crate::config::General;
use crate::core::SortKey;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfiguration {
    target_path: PathBuf,
    show_hidden: bool,
    long_format: bool,
    sort_key: SortKey,
    reverse: bool,
    human_sizes: bool,
}

impl ListingConfiguration {
    /// Starts a configuration for `target_path` from the `[general]` defaults.
    pub fn builder(target_path: impl Into<PathBuf>, general: &General) -> ListingBuilder {
        ListingBuilder {
            inner: ListingConfiguration {
                target_path: target_path.into(),
                show_hidden: general.show_hidden(),
                long_format: general.long_format(),
                sort_key: general.sort(),
                reverse: general.reverse(),
                human_sizes: general.human_sizes(),
            },
        }
    }

    // Getters

    #[inline]
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    #[inline]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn human_sizes(&self) -> bool {
        self.human_sizes
    }
}

/// Applies overrides on top of the file defaults. Flags only ever switch options on.
#[derive(Debug)]
pub struct ListingBuilder {
    inner: ListingConfiguration,
}

impl ListingBuilder {
    pub fn show_hidden(mut self, on: bool) -> Self {
        self.inner.show_hidden |= on;
        self
    }

    pub fn long_format(mut self, on: bool) -> Self {
        self.inner.long_format |= on;
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.inner.reverse |= on;
        self
    }

    pub fn human_sizes(mut self, on: bool) -> Self {
        self.inner.human_sizes |= on;
        self
    }

    /// Replaces the default sort key when a sort flag was given.
    pub fn sort_key(mut self, key: Option<SortKey>) -> Self {
        if let Some(key) = key {
            self.inner.sort_key = key;
        }
        self
    }

    pub fn build(self) -> ListingConfiguration {
        self.inner
    }
}
