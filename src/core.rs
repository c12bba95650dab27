//! Core listing logic for lsr.
//!
//! The pipeline is collect → sort → render:
//! - [fm]: the [Entry] record and [collect], which reads one directory.
//! - [provider]: the [DirectoryReader] and [MetadataProvider] collaborators and their OS implementations.
//! - [formatter]: the [Sorter] and field formatting for long listings.
//! - [render]: long-format and grid rendering.
//! - [error]: the [ListError] every stage returns.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod provider;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ListError;
pub use fm::{Entry, EntryKind, EntryMetadata, Permissions, collect, is_hidden};
pub use formatter::{
    SortKey, SortStrategy, Sorter, format_file_size, format_file_time, format_mode, sort,
};
pub use provider::{DirectoryReader, MetadataProvider, OsDirectoryReader, OsMetadataProvider};
pub use render::{GRID_WIDTH, GridLayout, render, render_grid, render_long};
