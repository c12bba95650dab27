//! Listing session for lsr.
//!
//! Wires a [ListingConfiguration] through collect → sort → render.
//! Each stage only reads what the previous one returned; the first error ends the session.

use crate::config::ListingConfiguration;
use crate::core::{
    DirectoryReader, ListError, MetadataProvider, OsDirectoryReader, OsMetadataProvider, collect,
    render, sort,
};

/// Lists the configured directory using the operating system.
pub fn run(config: &ListingConfiguration) -> Result<String, ListError> {
    run_with(config, &OsDirectoryReader, &OsMetadataProvider)
}

/// Lists the configured directory through the given collaborators.
pub fn run_with<R, M>(
    config: &ListingConfiguration,
    reader: &R,
    provider: &M,
) -> Result<String, ListError>
where
    R: DirectoryReader,
    M: MetadataProvider,
{
    let entries = collect(config.target_path(), config.show_hidden(), reader, provider)?;
    let entries = sort(entries, config.sort_key(), config.reverse());
    render(&entries, config)
}
