//! Text rendering of an ordered listing.
//!
//! Two formats are supported:
//! - [render_long]: one entry per line with mode, links, owner, group, size, time and name.
//! - [render_grid]: bare names packed into a fixed [GRID_WIDTH] budget.
//!
//! Any name containing a space is wrapped in single quotes in both formats.

use crate::config::ListingConfiguration;
use crate::core::error::ListError;
use crate::core::fm::Entry;
use crate::core::formatter::{format_file_size, format_file_time, format_mode};
use crate::utils::{digit_count, display_width, needs_quotes, pad_right, quote_name};

use log::debug;

use std::fmt::Write;

/// Line width budget of the grid, in columns.
pub const GRID_WIDTH: usize = 96;
/// Names per row in the wrapped grid.
const WRAP_COLUMNS: usize = 5;
/// Gap written after each name in the grid.
const GAP: &str = "  ";

/// Renders `entries` in the format selected by `config`.
pub fn render(entries: &[Entry], config: &ListingConfiguration) -> Result<String, ListError> {
    if config.long_format() {
        render_long(entries, config.human_sizes())
    } else {
        Ok(render_grid(entries))
    }
}

/// Renders one line per entry: `mode links owner group size date name`.
///
/// Link counts and sizes are right-aligned to the widest value in the listing.
/// With `human_sizes` the size column holds decimal units (`1.23 kB`) instead of bytes.
pub fn render_long(entries: &[Entry], human_sizes: bool) -> Result<String, ListError> {
    let link_width = entries
        .iter()
        .map(|e| digit_count(e.link_count()))
        .max()
        .unwrap_or(1);

    let sizes: Vec<String> = entries
        .iter()
        .map(|e| format_file_size(e.size_bytes(), human_sizes))
        .collect();
    let size_width = sizes
        .iter()
        .map(|s| display_width(s))
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for (entry, size) in entries.iter().zip(&sizes) {
        let date = format_file_time(entry)?;
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {:>lw$} {} {} {:>sw$} {} {}",
            format_mode(entry),
            entry.link_count(),
            entry.owner(),
            entry.group(),
            size,
            date,
            quote_name(entry.name()),
            lw = link_width,
            sw = size_width,
        );
    }
    Ok(out)
}

/// Grid layout picked for a listing, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// All names on one run.
    SingleRun,
    /// Row-major, [WRAP_COLUMNS] names per line.
    Wrapped,
    /// Two columns, the left one padded to its widest name.
    TwoColumns,
}

impl GridLayout {
    /// Picks the layout from the summed name width and the entry count.
    pub fn select(total_len: usize, count: usize) -> Self {
        if total_len + 2 * count <= GRID_WIDTH {
            GridLayout::SingleRun
        } else if total_len / WRAP_COLUMNS + 2 * count <= GRID_WIDTH {
            GridLayout::Wrapped
        } else {
            GridLayout::TwoColumns
        }
    }
}

/// Packs bare names into the [GRID_WIDTH] budget.
pub fn render_grid(entries: &[Entry]) -> String {
    let total_len: usize = entries.iter().map(|e| display_width(e.name())).sum();
    let layout = GridLayout::select(total_len, entries.len());
    debug!(
        "grid layout {:?} for {} names ({} columns of text)",
        layout,
        entries.len(),
        total_len
    );

    match layout {
        GridLayout::SingleRun => single_run(entries),
        GridLayout::Wrapped => wrapped(entries),
        GridLayout::TwoColumns => two_columns(entries),
    }
}

fn single_run(entries: &[Entry]) -> String {
    let mut out = String::new();
    for e in entries {
        // a quoted name gets no trailing gap
        if needs_quotes(e.name()) {
            out.push('\'');
            out.push_str(e.name());
            out.push('\'');
        } else {
            out.push_str(e.name());
            out.push_str(GAP);
        }
    }
    out.push('\n');
    out
}

fn wrapped(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        out.push_str(&quote_name(e.name()));
        out.push_str(GAP);
        if (i + 1) % WRAP_COLUMNS == 0 {
            out.push('\n');
        }
    }
    // Always closes the last row, so a full final row leaves an empty line.
    out.push('\n');
    out
}

fn two_columns(entries: &[Entry]) -> String {
    let split = (entries.len() / 2 + 1).min(entries.len());
    let (left, right) = entries.split_at(split);

    let left: Vec<_> = left.iter().map(|e| quote_name(e.name())).collect();
    let width = left.iter().map(|s| display_width(s)).max().unwrap_or(0);

    let mut out = String::new();
    for (i, name) in left.iter().enumerate() {
        match right.get(i) {
            Some(other) => {
                out.push_str(&pad_right(name, width));
                out.push_str(GAP);
                out.push_str(&quote_name(other.name()));
            }
            None => out.push_str(name),
        }
        out.push('\n');
    }
    out
}
