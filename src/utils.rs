//! Miscellaneous utility functions for lsr.
//!
//! - [cli]: command-line parsing, help and version output.
//! - [helpers]: digit counting, quoting and width helpers used by the renderers.

pub mod cli;
pub mod helpers;

pub use helpers::{digit_count, display_width, get_home, needs_quotes, pad_right, quote_name};
