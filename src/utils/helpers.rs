//! Helpers for lsr.
//!
//! Small utilities shared by the renderers and the config loader:
//! - Counting decimal digits for column alignment
//! - Quoting names that contain a space
//! - Measuring names in terminal columns
//! - Locating the home directory

use unicode_width::UnicodeWidthStr;

use std::borrow::Cow;
use std::path::PathBuf;

/// Number of decimal digits needed to print `n`. Zero takes one digit.
pub fn digit_count(mut n: u64) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

/// Whether a name is shown wrapped in single quotes.
#[inline]
pub fn needs_quotes(name: &str) -> bool {
    name.contains(' ')
}

/// Wraps `name` in single quotes if it contains a space.
pub fn quote_name(name: &str) -> Cow<'_, str> {
    if needs_quotes(name) {
        Cow::Owned(format!("'{}'", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Width of `s` in terminal columns.
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-justifies `s` to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// Get the home directory of the current user.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}
